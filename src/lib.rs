//! totui - keyboard-navigable terminal tree menu
//!
//! A nested [`TreeNode`] description is flattened once into a pre-order
//! array where every node knows the span of its own subtree and of its
//! previous sibling. Moving past a collapsed subtree, in either direction,
//! is then a single jump instead of a walk over hidden rows.

pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use error::{TotuiError, TotuiResult};
pub use ui::widgets::tree_menu::{
    build_tree, flatten_tree, FlatNode, OnSelect, SelectError, TreeAction, TreeMenu, TreeNode,
    VisibleRow, VisibleRows,
};
