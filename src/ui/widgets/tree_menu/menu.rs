//! TreeMenu state management and action handling.
//!
//! The menu owns the flattened, pre-order node sequence and a single cursor.
//! Moving up or down jumps over collapsed subtrees using the spans recorded
//! at build time, so every transition is index arithmetic.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{TotuiError, TotuiResult};

use super::builder::build_tree;
use super::node::{OnSelect, TreeNode};
use super::render::{line_width, render_help_bar, render_tree_line};

/// A compiled tree node in pre-order position
pub struct FlatNode {
    label: String,
    depth: usize,
    /// Span of the previous sibling (0 for a first child)
    left_skip: usize,
    /// Slots covered by this node's subtree, self included
    pub(super) span: usize,
    parent: Option<usize>,
    has_children: bool,
    expanded: bool,
    on_select: Option<OnSelect>,
}

impl FlatNode {
    pub(super) fn new(
        label: String,
        depth: usize,
        left_skip: usize,
        parent: Option<usize>,
        has_children: bool,
        on_select: Option<OnSelect>,
    ) -> Self {
        Self {
            label,
            depth,
            left_skip,
            span: 1,
            parent,
            has_children,
            expanded: false,
            on_select,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nesting level, 0 for the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Distance back to the previous sibling, 0 for a first child
    pub fn left_skip(&self) -> usize {
        self.left_skip
    }

    /// Distance forward past this node's whole subtree (never 0)
    pub fn right_skip(&self) -> usize {
        self.span
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_callback(&self) -> bool {
        self.on_select.is_some()
    }
}

impl fmt::Debug for FlatNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatNode")
            .field("label", &self.label)
            .field("depth", &self.depth)
            .field("left_skip", &self.left_skip)
            .field("span", &self.span)
            .field("parent", &self.parent)
            .field("has_children", &self.has_children)
            .field("expanded", &self.expanded)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor to the previous visible row
    Up,
    /// Move cursor to the next visible row
    Down,
    /// Expand or collapse the node under the cursor
    Toggle,
}

/// Slot a MoveUp lands on before any visibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpStep {
    /// Collapsed previous sibling, always visible
    Sibling(usize),
    /// Parent of a first child, always visible
    Parent(usize),
    /// Last slot of an expanded previous sibling's subtree, possibly hidden
    LastDescendant(usize),
}

/// Interactive, keyboard-driven tree
pub struct TreeMenu {
    nodes: Vec<FlatNode>,
    cursor: usize,
    max_width: usize,
}

impl TreeMenu {
    /// Build a tree menu from a nested description
    pub fn build(root: TreeNode) -> TotuiResult<Self> {
        build_tree(root)
    }

    /// Wrap an already flattened, non-empty pre-order sequence
    ///
    /// The root starts expanded so its children are reachable straight away.
    pub(super) fn from_flat(mut nodes: Vec<FlatNode>) -> Self {
        if let Some(root) = nodes.first_mut() {
            root.expanded = root.has_children;
        }
        let max_width = nodes.iter().map(line_width).max().unwrap_or(0);
        Self {
            nodes,
            cursor: 0,
            max_width,
        }
    }

    /// All nodes in pre-order, hidden ones included
    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Node under the cursor
    pub fn current(&self) -> &FlatNode {
        &self.nodes[self.cursor]
    }

    /// Widest rendered line (indent, glyph and label), for sizing frames
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Handle a tree action
    ///
    /// Returns whether the state changed. When the cursor lands on a node with
    /// a selection callback the callback runs before this returns; its failure
    /// is reported as [`TotuiError::Select`] and the move is kept.
    pub fn handle_action(&mut self, action: TreeAction) -> TotuiResult<bool> {
        match action {
            TreeAction::Up => match self.up_target() {
                Some(target) => self.select(target).map(|_| true),
                None => Ok(false),
            },
            TreeAction::Down => match self.down_target() {
                Some(target) => self.select(target).map(|_| true),
                None => Ok(false),
            },
            TreeAction::Toggle => Ok(self.toggle_current()),
        }
    }

    fn up_step(&self) -> Option<UpStep> {
        if self.cursor == 0 {
            return None;
        }

        let left_skip = self.nodes[self.cursor].left_skip;
        if left_skip == 0 {
            return Some(UpStep::Parent(self.cursor - 1));
        }

        let sibling = self.cursor.checked_sub(left_skip)?;
        if self.nodes[sibling].expanded {
            Some(UpStep::LastDescendant(self.cursor - 1))
        } else {
            Some(UpStep::Sibling(sibling))
        }
    }

    fn up_target(&self) -> Option<usize> {
        Some(match self.up_step()? {
            UpStep::Sibling(index) | UpStep::Parent(index) => index,
            // Only this slot can sit under a collapsed node.
            UpStep::LastDescendant(index) => {
                self.outermost_collapsed_ancestor(index).unwrap_or(index)
            }
        })
    }

    fn down_target(&self) -> Option<usize> {
        if self.cursor + 1 >= self.nodes.len() {
            return None;
        }

        let node = &self.nodes[self.cursor];
        let offset = if node.expanded { 1 } else { node.span };
        let target = self.cursor + offset;
        (target < self.nodes.len()).then_some(target)
    }

    /// The row that hides `index`, if any ancestor is collapsed
    fn outermost_collapsed_ancestor(&self, index: usize) -> Option<usize> {
        let mut hidden_by = None;
        let mut parent = self.nodes[index].parent;
        while let Some(p) = parent {
            if !self.nodes[p].expanded {
                hidden_by = Some(p);
            }
            parent = self.nodes[p].parent;
        }
        hidden_by
    }

    fn select(&mut self, index: usize) -> TotuiResult<()> {
        self.cursor = index;
        let node = &mut self.nodes[index];
        tracing::trace!(cursor = index, label = %node.label, "cursor moved");

        // TODO: let hosts opt into firing callbacks only on explicit selection
        // instead of on every cursor move.
        if let Some(callback) = node.on_select.as_mut() {
            callback().map_err(|source| TotuiError::Select {
                label: node.label.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn toggle_current(&mut self) -> bool {
        let node = &mut self.nodes[self.cursor];
        if !node.has_children {
            return false;
        }
        node.expanded = !node.expanded;
        tracing::trace!(label = %node.label, expanded = node.expanded, "toggled node");
        true
    }

    /// Whether every ancestor of `index` is expanded
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.nodes.len() && self.outermost_collapsed_ancestor(index).is_none()
    }

    /// Expand every node that has children
    pub fn expand_all(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.has_children) {
            node.expanded = true;
        }
    }

    /// Collapse every node; the cursor returns to the root
    pub fn collapse_all(&mut self) {
        for node in &mut self.nodes {
            node.expanded = false;
        }
        self.cursor = 0;
    }

    /// Walk the rows currently on screen, top to bottom
    pub fn visible_rows(&self) -> VisibleRows<'_> {
        VisibleRows {
            menu: self,
            next: 0,
        }
    }

    /// Render the visible rows, cursor row highlighted
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        for row in self.visible_rows() {
            out.push_str(&render_tree_line(
                row.node,
                row.active,
                supports_color,
                supports_unicode,
            ));
            out.push('\n');
        }
        out
    }

    /// Render the visible rows without any escape sequences
    pub fn render_plain(&self, supports_unicode: bool) -> String {
        let mut out = String::new();
        for row in self.visible_rows() {
            out.push_str(&render_tree_line(row.node, false, false, supports_unicode));
            out.push('\n');
        }
        out
    }

    /// Render the help bar
    pub fn render_help_bar(&self, supports_unicode: bool) -> String {
        render_help_bar(supports_unicode)
    }
}

impl fmt::Debug for TreeMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMenu")
            .field("nodes", &self.nodes.len())
            .field("cursor", &self.cursor)
            .field("max_width", &self.max_width)
            .finish()
    }
}

/// A row produced by [`TreeMenu::visible_rows`]
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Position in the flattened sequence
    pub index: usize,
    pub node: &'a FlatNode,
    /// Whether the cursor is on this row
    pub active: bool,
}

/// Lazy walk over the visible rows; collapsed subtrees are skipped whole
#[derive(Debug, Clone)]
pub struct VisibleRows<'a> {
    menu: &'a TreeMenu,
    next: usize,
}

impl<'a> Iterator for VisibleRows<'a> {
    type Item = VisibleRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let node = self.menu.nodes.get(index)?;
        self.next += if node.expanded { 1 } else { node.span };
        Some(VisibleRow {
            index,
            node,
            active: index == self.menu.cursor,
        })
    }
}

impl FusedIterator for VisibleRows<'_> {}
