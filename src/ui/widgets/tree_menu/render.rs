//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render tree rows and help text to
//! strings for terminal output.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::menu::FlatNode;

/// Columns of indentation per nesting level
pub const INDENT_WIDTH: usize = 2;

/// Expansion glyph for a node, a blank of equal width for leaves
pub fn toggle_glyph(node: &FlatNode, supports_unicode: bool) -> &'static str {
    let icon = match (node.has_children(), node.is_expanded()) {
        (false, _) => Icon::Leaf,
        (true, true) => Icon::Expanded,
        (true, false) => Icon::Collapsed,
    };
    icon.render(supports_unicode)
}

/// Render a single tree row to a string
///
/// Without color the active row is drawn in reverse video so the cursor
/// stays visible.
pub fn render_tree_line(
    node: &FlatNode,
    is_active: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let indent = " ".repeat(node.depth() * INDENT_WIDTH);
    let body = format!("{} {}", toggle_glyph(node, supports_unicode), node.label());

    let body = match (is_active, supports_color) {
        (true, true) => ColoredText::highlight(body).render(true),
        (true, false) => format!("{}", body.as_str().reverse()),
        (false, _) => ColoredText::accent(body).render(supports_color),
    };

    format!("{}{}", indent, body)
}

/// Display width of a rendered row, escape sequences excluded
pub fn line_width(node: &FlatNode) -> usize {
    node.depth() * INDENT_WIDTH + 2 + node.label().width()
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(supports_unicode: bool) -> String {
    format!(
        "[{}] Move    [Enter] Expand/Collapse    [q] Quit",
        Icon::Arrows.render(supports_unicode)
    )
}
