//! Property tests for tree flattening and navigation.

use proptest::prelude::*;

use totui::{flatten_tree, FlatNode, TreeAction, TreeMenu, TreeNode};

/// Shape of a nested tree; `None` marks an empty child slot.
#[derive(Debug, Clone)]
struct Shape(Vec<Option<Shape>>);

impl Shape {
    fn without_holes(&self) -> Shape {
        Shape(
            self.0
                .iter()
                .flatten()
                .map(|child| Some(child.without_holes()))
                .collect(),
        )
    }
}

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(5, 64, 5, |inner| {
        prop::collection::vec(prop::option::weighted(0.85, inner), 0..=5).prop_map(Shape)
    })
}

fn action() -> impl Strategy<Value = TreeAction> {
    prop_oneof![
        Just(TreeAction::Up),
        Just(TreeAction::Down),
        Just(TreeAction::Toggle),
    ]
}

/// Labels are `n<i>` with `i` the pre-order position; holes take no number.
fn to_tree(shape: &Shape) -> TreeNode {
    fn build(shape: &Shape, next: &mut usize) -> TreeNode {
        let label = format!("n{}", *next);
        *next += 1;
        let slots: Vec<Option<TreeNode>> = shape
            .0
            .iter()
            .map(|slot| slot.as_ref().map(|child| build(child, next)))
            .collect();
        TreeNode::new(label).with_slots(slots)
    }
    build(shape, &mut 0)
}

type Layout = Vec<(String, usize, usize, usize, Option<usize>, bool)>;

fn layout(nodes: &[FlatNode]) -> Layout {
    nodes
        .iter()
        .map(|n| {
            (
                n.label().to_string(),
                n.depth(),
                n.left_skip(),
                n.right_skip(),
                n.parent(),
                n.has_children(),
            )
        })
        .collect()
}

fn visible_indices(menu: &TreeMenu) -> Vec<usize> {
    menu.visible_rows().map(|row| row.index).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Flattening emits every node exactly once, in pre-order.
    #[test]
    fn property_flatten_is_pre_order(shape in shape()) {
        let root = to_tree(&shape);
        let count = root.node_count();
        let nodes = flatten_tree(root).unwrap();

        prop_assert_eq!(nodes.len(), count);
        for (i, node) in nodes.iter().enumerate() {
            prop_assert_eq!(node.label(), format!("n{}", i));
        }
    }

    /// PROPERTY: A node's span covers exactly its descendants.
    #[test]
    fn property_span_is_subtree_size(shape in shape()) {
        let nodes = flatten_tree(to_tree(&shape)).unwrap();

        prop_assert_eq!(nodes[0].right_skip(), nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            let span = node.right_skip();
            prop_assert!(span >= 1);

            let children: usize = nodes
                .iter()
                .filter(|n| n.parent() == Some(i))
                .map(FlatNode::right_skip)
                .sum();
            prop_assert_eq!(span, 1 + children);
            prop_assert_eq!(node.has_children(), span > 1);

            for inner in &nodes[i + 1..i + span] {
                prop_assert!(inner.depth() > node.depth());
            }
            if let Some(next) = nodes.get(i + span) {
                prop_assert!(next.depth() <= node.depth());
            }
        }
    }

    /// PROPERTY: left_skip points back at the previous sibling, whose span matches.
    #[test]
    fn property_offsets_are_symmetric(shape in shape()) {
        let nodes = flatten_tree(to_tree(&shape)).unwrap();

        prop_assert_eq!(nodes[0].left_skip(), 0);
        prop_assert_eq!(nodes[0].parent(), None);
        for (i, node) in nodes.iter().enumerate().skip(1) {
            let left = node.left_skip();
            if left == 0 {
                prop_assert_eq!(node.parent(), Some(i - 1));
            } else {
                let sibling = &nodes[i - left];
                prop_assert_eq!(sibling.parent(), node.parent());
                prop_assert_eq!(sibling.right_skip(), left);
            }
        }
    }

    /// PROPERTY: Empty child slots leave no trace in the flattened tree.
    #[test]
    fn property_holes_are_transparent(shape in shape()) {
        let with_holes = flatten_tree(to_tree(&shape)).unwrap();
        let without = flatten_tree(to_tree(&shape.without_holes())).unwrap();

        prop_assert_eq!(layout(&with_holes), layout(&without));
    }

    /// PROPERTY: Flattening the same description twice gives the same layout.
    #[test]
    fn property_flatten_is_deterministic(shape in shape()) {
        let first = flatten_tree(to_tree(&shape)).unwrap();
        let second = flatten_tree(to_tree(&shape)).unwrap();

        prop_assert_eq!(layout(&first), layout(&second));
    }

    /// PROPERTY: Up and Down move to the neighbouring visible rows, and the
    /// cursor never rests on a hidden row.
    #[test]
    fn property_moves_follow_visible_rows(
        shape in shape(),
        actions in prop::collection::vec(action(), 0..64),
    ) {
        let mut menu = TreeMenu::build(to_tree(&shape)).unwrap();

        for action in actions {
            let rows = visible_indices(&menu);
            let before = menu.cursor_position();
            let pos = rows.iter().position(|&i| i == before).ok_or_else(|| {
                TestCaseError::fail(format!("cursor {} not in visible rows {:?}", before, rows))
            })?;

            let changed = menu.handle_action(action).unwrap();
            let after = menu.cursor_position();

            match action {
                TreeAction::Down => {
                    let expected = rows.get(pos + 1).copied().unwrap_or(before);
                    prop_assert_eq!(after, expected);
                    prop_assert_eq!(changed, expected != before);
                }
                TreeAction::Up => {
                    let expected = pos.checked_sub(1).map_or(before, |p| rows[p]);
                    prop_assert_eq!(after, expected);
                    prop_assert_eq!(changed, expected != before);
                }
                TreeAction::Toggle => {
                    prop_assert_eq!(after, before);
                    prop_assert_eq!(changed, menu.current().has_children());
                }
            }
            prop_assert!(menu.is_visible(menu.cursor_position()));
        }
    }

    /// PROPERTY: Toggling the same node twice restores the visible rows.
    #[test]
    fn property_toggle_round_trip(
        shape in shape(),
        moves in prop::collection::vec(prop_oneof![Just(TreeAction::Up), Just(TreeAction::Down)], 0..16),
    ) {
        let mut menu = TreeMenu::build(to_tree(&shape)).unwrap();
        for action in moves {
            menu.handle_action(action).unwrap();
        }

        let before = visible_indices(&menu);
        let cursor = menu.cursor_position();
        menu.handle_action(TreeAction::Toggle).unwrap();
        menu.handle_action(TreeAction::Toggle).unwrap();

        prop_assert_eq!(visible_indices(&menu), before);
        prop_assert_eq!(menu.cursor_position(), cursor);
    }

    /// PROPERTY: The frame width fits every row of the fully expanded tree.
    #[test]
    fn property_max_width_fits_all_rows(shape in shape()) {
        let mut menu = TreeMenu::build(to_tree(&shape)).unwrap();
        menu.expand_all();

        let widest = menu
            .render_plain(false)
            .lines()
            .map(str::len)
            .max()
            .unwrap_or(0);
        prop_assert_eq!(menu.max_width(), widest);
    }
}
