use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

/// Rounded frame with an optional centered header.
///
/// Content lines are drawn one column in from the left border.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
    width: Option<usize>,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Fix the inner width (columns between the borders)
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let inner_width = self
            .width
            .unwrap_or_else(|| {
                self.title
                    .iter()
                    .chain(&self.content)
                    .map(|l| visible_width(l))
                    .max()
                    .unwrap_or(0)
                    .saturating_add(2)
            })
            .max(2);

        let b = Borders::new(supports_unicode);
        let mut out = String::new();

        let top = format!("{}{}{}", b.top_left, b.horizontal.repeat(inner_width), b.top_right);
        out.push_str(&color_border(&top, supports_color));
        out.push('\n');

        if let Some(title) = &self.title {
            let free = inner_width.saturating_sub(visible_width(title));
            let left = free / 2;
            let row = format!("{}{}{}", " ".repeat(left), title, " ".repeat(free - left));
            push_row(&mut out, &row, inner_width, b.vertical, supports_color);
        }

        for line in &self.content {
            push_row(&mut out, &format!(" {}", line), inner_width, b.vertical, supports_color);
        }

        let bottom = format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner_width),
            b.bottom_right
        );
        out.push_str(&color_border(&bottom, supports_color));
        out.push('\n');
        out
    }
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

fn push_row(out: &mut String, row: &str, inner_width: usize, vertical: &str, supports_color: bool) {
    let pad = inner_width.saturating_sub(visible_width(row));
    out.push_str(&color_border(vertical, supports_color));
    out.push_str(row);
    out.push_str(&" ".repeat(pad));
    out.push_str(&color_border(vertical, supports_color));
    out.push('\n');
}

fn color_border(s: &str, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    format!("{}", s.with(theme::colors::DIM))
}

pub(crate) fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
