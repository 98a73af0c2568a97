//! Tree Menu Widget
//!
//! A keyboard-navigable tree. A nested [`TreeNode`] description is compiled
//! once into a flat pre-order sequence where every node knows how far to
//! jump to reach its previous sibling or to step past its own subtree, so
//! navigation never walks the tree.
//!
//! # Module Structure
//!
//! - `node` - nested build-time description and selection callbacks
//! - `builder` - flattening with skip offsets
//! - `menu` - TreeMenu cursor state and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod builder;
mod input;
mod menu;
mod node;
mod render;

pub use builder::{build_tree, flatten_tree};
pub use input::{is_quit_key, key_to_action, run_interactive, FrameState};
pub use menu::{FlatNode, TreeAction, TreeMenu, VisibleRow, VisibleRows};
pub use node::{OnSelect, SelectError, TreeNode};
pub use render::{line_width, render_help_bar, render_tree_line, toggle_glyph, INDENT_WIDTH};
