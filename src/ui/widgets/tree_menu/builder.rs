//! Tree construction from a nested description.
//!
//! Flattens a [`TreeNode`] tree into its pre-order sequence of
//! [`FlatNode`]s. Every flat node records the span of its own subtree and
//! the span of its previous sibling, so the navigator can hop over whole
//! subtrees with plain index arithmetic.

use crate::error::{TotuiError, TotuiResult};

use super::menu::{FlatNode, TreeMenu};
use super::node::TreeNode;

/// Build a tree menu from a nested description
///
/// Empty child slots are discarded first. Labels that cannot be drawn on a
/// single line are rejected here, before any navigation state exists.
pub fn build_tree(root: TreeNode) -> TotuiResult<TreeMenu> {
    let nodes = flatten_tree(root)?;
    tracing::debug!(
        nodes = nodes.len(),
        depth = nodes.iter().map(FlatNode::depth).max().unwrap_or(0),
        "built tree menu"
    );
    Ok(TreeMenu::from_flat(nodes))
}

/// Flatten a nested description into its pre-order sequence
pub fn flatten_tree(mut root: TreeNode) -> TotuiResult<Vec<FlatNode>> {
    root.clear_holes();

    let mut path = Vec::new();
    validate_labels(&root, &mut path)?;

    let mut nodes = Vec::with_capacity(root.node_count());
    flatten_node(root, None, 0, 0, &mut nodes);
    Ok(nodes)
}

/// Emit `node` and its subtree, returning the subtree span
fn flatten_node(
    node: TreeNode,
    parent: Option<usize>,
    depth: usize,
    left_skip: usize,
    out: &mut Vec<FlatNode>,
) -> usize {
    let TreeNode {
        label,
        children,
        on_select,
    } = node;

    let index = out.len();
    out.push(FlatNode::new(
        label,
        depth,
        left_skip,
        parent,
        !children.is_empty(),
        on_select,
    ));

    let mut span = 1;
    let mut previous_span = 0;
    for child in children.into_iter().flatten() {
        previous_span = flatten_node(child, Some(index), depth + 1, previous_span, out);
        span += previous_span;
    }

    out[index].span = span;
    span
}

fn validate_labels(node: &TreeNode, path: &mut Vec<usize>) -> TotuiResult<()> {
    if node.label.chars().any(char::is_control) {
        return Err(TotuiError::InvalidLabel {
            label: node.label.clone(),
            path: path.clone(),
        });
    }

    for (i, child) in node.children.iter().flatten().enumerate() {
        path.push(i);
        validate_labels(child, path)?;
        path.pop();
    }
    Ok(())
}
