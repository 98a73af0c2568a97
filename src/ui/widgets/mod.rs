pub mod panel;
pub mod tree_menu;
