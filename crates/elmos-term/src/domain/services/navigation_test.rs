use std::sync::Arc;

use super::*;
use crate::domain::models::ActionId;

fn tree() -> Arc<MenuTree> {
    let leaf = |label: &str, action: ActionId| return MenuNode::action(label, "", action, "elmos x");
    return Arc::new(
        MenuTree::new(vec![
            MenuNode::category(
                "Kernel",
                "",
                vec![
                    leaf("Status", ActionId::KernelStatus),
                    MenuNode::category("Nested", "", vec![leaf("Build", ActionId::KernelBuild)]),
                    leaf("Clean", ActionId::KernelClean),
                ],
            ),
            leaf("Doctor", ActionId::DoctorCheck),
            MenuNode::category("Apps", "", vec![leaf("List", ActionId::AppList)]),
        ])
        .unwrap(),
    );
}

#[test]
fn it_starts_at_the_root() {
    let nav = NavigationController::new(tree());
    assert!(nav.is_at_root());
    assert_eq!(nav.cursor(), 0);
    assert_eq!(nav.items().len(), 3);
    assert_eq!(nav.title(), None);
}

#[test]
fn it_clamps_the_cursor() {
    let mut nav = NavigationController::new(tree());
    nav.move_cursor(-1);
    assert_eq!(nav.cursor(), 0);

    nav.move_cursor(1);
    nav.move_cursor(1);
    nav.move_cursor(1);
    assert_eq!(nav.cursor(), 2);

    nav.move_cursor(-10);
    assert_eq!(nav.cursor(), 0);
}

#[test]
fn it_descends_into_categories() {
    let mut nav = NavigationController::new(tree());
    assert_eq!(nav.enter(), Selection::Descended);
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.cursor(), 0);
    assert_eq!(nav.title(), Some("Kernel"));
    assert_eq!(nav.selected().unwrap().label, "Status");
}

#[test]
fn it_reports_leaves_without_moving() {
    let mut nav = NavigationController::new(tree());
    nav.move_cursor(1);

    match nav.enter() {
        Selection::Leaf(node) => assert_eq!(node.action, Some(ActionId::DoctorCheck)),
        other => panic!("unexpected selection {other:?}"),
    }
    assert!(nav.is_at_root());
    assert_eq!(nav.cursor(), 1);
}

#[test]
fn it_restores_the_exact_level_on_back() {
    let mut nav = NavigationController::new(tree());
    nav.move_cursor(2);
    let before = nav.current_level().clone();

    assert_eq!(nav.enter(), Selection::Descended);
    assert!(nav.back());
    assert_eq!(nav.current_level(), &before);
    assert_eq!(nav.cursor(), 2);
}

#[test]
fn it_keeps_symmetry_across_nested_levels() {
    let mut nav = NavigationController::new(tree());
    let root = nav.current_level().clone();

    nav.enter();
    nav.move_cursor(1);
    let kernel = nav.current_level().clone();

    assert_eq!(nav.enter(), Selection::Descended);
    assert_eq!(nav.title(), Some("Nested"));
    assert_eq!(nav.depth(), 2);

    assert!(nav.back());
    assert_eq!(nav.current_level(), &kernel);
    assert!(nav.back());
    assert_eq!(nav.current_level(), &root);
    assert!(nav.is_at_root());
}

#[test]
fn it_ignores_back_at_the_root() {
    let mut nav = NavigationController::new(tree());
    nav.move_cursor(1);
    assert!(!nav.back());
    assert_eq!(nav.cursor(), 1);
}
