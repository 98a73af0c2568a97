use crossterm::style::Color;

/// Design tokens for the totui tree UI.
///
/// Design constraints:
/// - Only the semantic colors below (`colors::*`)
/// - All glyphs and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// Regular tree rows (xterm 205, pink)
    pub const ACCENT: Color = Color::AnsiValue(205);
    /// Row under the cursor (xterm 150, pale green)
    pub const HIGHLIGHT: Color = Color::AnsiValue(150);
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";

    // Tree expansion.
    pub const EXPANDED: &str = "▾";
    pub const COLLAPSED: &str = "▸";
    pub const LEAF: &str = " ";

    // Key hints.
    pub const ARROWS: &str = "↑↓";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";

    // Tree expansion.
    pub const EXPANDED: &str = "-";
    pub const COLLAPSED: &str = "+";
    pub const LEAF: &str = " ";

    // Key hints.
    pub const ARROWS: &str = "Up/Down";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
