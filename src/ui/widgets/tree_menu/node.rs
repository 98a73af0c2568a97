//! Nested tree description.
//!
//! `TreeNode` is the build-time input of the tree menu: a label, an ordered
//! list of child slots and an optional selection callback. It is consumed
//! once by [`TreeMenu::build`](super::TreeMenu::build) and never retained by
//! the running widget.

use std::fmt;

use crate::error::TotuiResult;

use super::builder::build_tree;
use super::menu::TreeMenu;

/// Error a selection callback may report back to the host.
pub type SelectError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Callback fired when the cursor lands on a node.
pub type OnSelect = Box<dyn FnMut() -> Result<(), SelectError>>;

/// A node of the nested tree description.
///
/// Child slots may be empty (`None`); empty slots are dropped before the tree
/// is flattened and never show up in the widget.
pub struct TreeNode {
    /// Display label
    pub label: String,
    /// Ordered child slots
    pub children: Vec<Option<TreeNode>>,
    /// Fired when the cursor moves onto this node
    pub on_select: Option<OnSelect>,
}

impl TreeNode {
    /// Create a node without children
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            on_select: None,
        }
    }

    /// Replace the children of this node
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children = children.into_iter().map(Some).collect();
        self
    }

    /// Replace the child slots of this node, holes included
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = Option<TreeNode>>) -> Self {
        self.children = slots.into_iter().collect();
        self
    }

    /// Attach a selection callback
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> Result<(), SelectError> + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Append a child
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(Some(child));
    }

    /// Number of nodes in this subtree, self included, holes excluded
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Compile this description into a ready-to-use tree menu
    pub fn build(self) -> TotuiResult<TreeMenu> {
        build_tree(self)
    }

    /// Drop empty child slots in the whole subtree
    pub(crate) fn clear_holes(&mut self) {
        self.children.retain(Option::is_some);
        for child in self.children.iter_mut().flatten() {
            child.clear_holes();
        }
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("label", &self.label)
            .field("children", &self.children)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_count_skips_holes() {
        let root = TreeNode::new("root").with_slots([
            Some(TreeNode::new("a").with_children([TreeNode::new("a1")])),
            None,
            Some(TreeNode::new("b")),
        ]);

        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn clear_holes_is_recursive() {
        let mut root = TreeNode::new("root").with_slots([
            None,
            Some(TreeNode::new("a").with_slots([None, Some(TreeNode::new("a1")), None])),
        ]);

        root.clear_holes();

        assert_eq!(root.children.len(), 1);
        let a = root.children[0].as_ref().unwrap();
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].as_ref().unwrap().label, "a1");
    }

    #[test]
    fn only_holes_counts_as_leaf() {
        let root = TreeNode::new("root").with_children([TreeNode::new("n").with_slots([None, None])]);
        let menu = root.build().unwrap();
        assert_eq!(menu.len(), 2);
        assert!(!menu.nodes()[1].has_children());
    }

    #[test]
    fn add_child_appends_in_order() {
        let mut root = TreeNode::new("root");
        root.add_child(TreeNode::new("a"));
        root.add_child(TreeNode::new("b"));

        let menu = root.build().unwrap();
        let labels: Vec<&str> = menu.nodes().iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["root", "a", "b"]);
    }

    #[test]
    fn debug_hides_callback_body() {
        let node = TreeNode::new("n").on_select(|| Ok(()));
        let rendered = format!("{:?}", node);
        assert!(rendered.contains("on_select: true"));
    }
}
