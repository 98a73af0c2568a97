//! The "Commands" view shipped with the binary.

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::Panel;
use crate::ui::widgets::tree_menu::{FrameState, TreeMenu, TreeNode};

pub const TITLE: &str = "Commands";

/// Demo command tree
pub fn command_tree() -> TreeNode {
    TreeNode::new("commands").with_children([
        command("build").with_children([command("debug"), command("release")]),
        command("test").with_children([
            command("unit"),
            command("integration").with_children([command("cli"), command("render")]),
            command("property").with_children([
                command("spans"),
                command("offsets"),
                command("visibility"),
            ]),
            command("bench"),
        ]),
        command("clean").with_children([]),
        command("deploy").with_children([command("staging"), command("production")]),
    ])
}

fn command(name: &'static str) -> TreeNode {
    TreeNode::new(name).on_select(move || {
        tracing::debug!(command = name, "command highlighted");
        Ok(())
    })
}

/// Full interactive screen: framed tree, status line and help bar
pub fn render_view(menu: &TreeMenu, ui: &UiContext, state: &FrameState) -> String {
    let mut out = render_panel(menu, ui, menu.render(ui.color, ui.unicode));

    let status = match &state.error {
        Some(err) => {
            ColoredText::error(format!("{} {}", Icon::Error.render(ui.unicode), err)).render(ui.color)
        }
        None => ColoredText::plain(menu.current().label()).bold().render(ui.color),
    };
    out.push_str(&status);
    out.push('\n');
    out.push_str(&ColoredText::dim(menu.render_help_bar(ui.unicode)).render(ui.color));
    out.push('\n');
    out
}

/// One static frame for non-interactive output: no cursor highlight
pub fn render_snapshot(menu: &TreeMenu, ui: &UiContext) -> String {
    render_panel(menu, ui, menu.render_plain(ui.unicode))
}

fn render_panel(menu: &TreeMenu, ui: &UiContext, tree: String) -> String {
    let width = (menu.max_width() + 2).max(TITLE.len() + 2);
    let mut panel = Panel::with_title(TITLE).width(width);
    panel.add_line(tree);
    panel.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::terminal::TerminalCapabilities;
    use crate::ui::widgets::tree_menu::TreeAction;

    fn plain_ui() -> UiContext {
        let caps = TerminalCapabilities {
            is_tty: false,
            supports_color: false,
            supports_unicode: true,
        };
        UiContext::from_caps(&Config::default(), caps)
    }

    #[test]
    fn command_tree_builds() {
        let menu = command_tree().build().unwrap();
        assert_eq!(menu.len(), 18);
        assert!(menu.nodes().iter().skip(1).all(|n| n.has_callback()));
    }

    #[test]
    fn command_tree_clean_is_not_toggleable() {
        let mut menu = command_tree().build().unwrap();
        for _ in 0..3 {
            menu.handle_action(TreeAction::Down).unwrap();
        }
        assert_eq!(menu.current().label(), "clean");
        assert!(!menu.handle_action(TreeAction::Toggle).unwrap());
    }

    #[test]
    fn view_shows_title_status_and_help() {
        let menu = command_tree().build().unwrap();
        let view = render_view(&menu, &plain_ui(), &FrameState::default());

        assert!(view.lines().nth(1).unwrap().contains(TITLE));
        assert!(view.contains("▸ build"));
        assert!(view.lines().any(|l| l == "commands"));
        assert!(view.contains("[Enter] Expand/Collapse"));
    }

    #[test]
    fn view_shows_callback_error() {
        let menu = command_tree().build().unwrap();
        let state = FrameState {
            error: Some("select callback for 'x' failed: boom".to_string()),
        };
        let view = render_view(&menu, &plain_ui(), &state);

        assert!(view.contains("✗ select callback for 'x' failed: boom"));
        assert!(!view.lines().any(|l| l == "commands"));
    }

    #[test]
    fn snapshot_has_no_escapes() {
        let menu = command_tree().build().unwrap();
        let frame = render_snapshot(&menu, &plain_ui());
        assert!(!frame.contains('\u{1b}'));
    }
}
