//! Golden tests for the rendered command tree
//!
//! Snapshots are rendered without color so they stay free of escape codes.

use insta::assert_snapshot;

use totui::ui::views::commands::command_tree;
use totui::{TreeAction, TreeMenu};

fn demo_menu() -> TreeMenu {
    command_tree().build().unwrap()
}

#[test]
fn test_golden_demo_tree_collapsed() {
    let menu = demo_menu();
    assert_snapshot!("demo_tree_collapsed", menu.render_plain(true).trim_end());
}

#[test]
fn test_golden_demo_tree_expanded() {
    let mut menu = demo_menu();
    menu.expand_all();
    assert_snapshot!("demo_tree_expanded", menu.render_plain(true).trim_end());
}

#[test]
fn test_demo_tree_ascii_fallback() {
    let menu = demo_menu();
    assert_eq!(
        menu.render_plain(false),
        "- commands\n  + build\n  + test\n    clean\n  + deploy\n"
    );
}

#[test]
fn test_demo_tree_after_navigation() {
    let mut menu = demo_menu();
    for action in [TreeAction::Down, TreeAction::Down, TreeAction::Toggle] {
        menu.handle_action(action).unwrap();
    }
    menu.handle_action(TreeAction::Down).unwrap();

    assert_eq!(menu.current().label(), "unit");
    assert_eq!(
        menu.render_plain(true),
        "▾ commands\n  ▸ build\n  ▾ test\n      unit\n    ▸ integration\n    ▸ property\n      bench\n    clean\n  ▸ deploy\n"
    );
}

#[test]
fn test_demo_tree_width() {
    // "        visibility" is the widest row once everything is expanded
    let menu = demo_menu();
    assert_eq!(menu.max_width(), 18);
}
