//! Terminal UI: design tokens, primitives, widgets and views.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
