use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Expanded,
    Collapsed,
    Leaf,
    Arrows,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Expanded) => theme::icons::EXPANDED,
            (true, Icon::Collapsed) => theme::icons::COLLAPSED,
            (true, Icon::Leaf) => theme::icons::LEAF,
            (true, Icon::Arrows) => theme::icons::ARROWS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Expanded) => theme::icons_ascii::EXPANDED,
            (false, Icon::Collapsed) => theme::icons_ascii::COLLAPSED,
            (false, Icon::Leaf) => theme::icons_ascii::LEAF,
            (false, Icon::Arrows) => theme::icons_ascii::ARROWS,
        }
    }
}
