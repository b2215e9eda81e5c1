//! Drop-to-delete zone.

use crate::helpers::{cell_center, TestCanvas, TestCanvasBuilder, STRIP_A, STRIP_B};
use gridshift::geometry::{Point, Rect};
use gridshift::session::{outcome_of, DragUpdate, DropOutcome, GhostUpdate};

const ZONE: Rect = Rect::new(400.0, 0.0, 100.0, 100.0);

fn canvas_with_zone(a: &[&'static str], b: &[&'static str]) -> TestCanvas {
    TestCanvasBuilder::new()
        .with_delete_zone(ZONE)
        .with_strip(STRIP_A, a)
        .with_strip(STRIP_B, b)
        .build()
}

#[test]
fn test_drop_in_zone_deletes_item() {
    let mut canvas = canvas_with_zone(&["x", "y", "z"], &[]);

    canvas.begin(cell_center(STRIP_A, 0));
    canvas.drag_to(Point::new(425.0, 25.0));
    assert!(canvas.driver.bundle().unwrap().is_over_delete_zone());

    let updates = canvas.release(Point::new(425.0, 25.0));

    assert_eq!(canvas.items(0), vec!["y", "z"]);
    assert!(canvas.items(1).is_empty());
    assert_eq!(outcome_of(&updates), Some(DropOutcome::Deleted));
    assert!(updates.contains(&DragUpdate::Ghost(GhostUpdate::Removed)));

    let log = canvas.log();
    assert_eq!(log.deleted, 1);
    assert_eq!(log.entered_zone, 1);
    // Deletion replaces the regular end notification
    assert_eq!(log.ended, 0);
}

#[test]
fn test_delete_after_visiting_another_surface() {
    let mut canvas = canvas_with_zone(&["x", "y"], &["w"]);

    canvas.begin(cell_center(STRIP_A, 1));
    canvas.drag_to(cell_center(STRIP_B, 0));
    assert_eq!(canvas.items(1), vec!["y", "w"]);

    // Zone is off to the right of both strips, so B stays the owner
    canvas.drag_to(Point::new(450.0, 50.0));
    canvas.release(Point::new(450.0, 50.0));

    assert_eq!(canvas.items(0), vec!["x"]);
    assert_eq!(canvas.items(1), vec!["w"]);
    assert_eq!(canvas.log().deleted, 1);
}

#[test]
fn test_zone_notifications_are_edge_triggered() {
    let mut canvas = canvas_with_zone(&["x", "y"], &[]);

    canvas.begin(cell_center(STRIP_A, 0));
    canvas.drag_to(Point::new(420.0, 30.0));
    canvas.drag_to(Point::new(440.0, 40.0));
    canvas.drag_to(Point::new(460.0, 50.0));
    assert_eq!(canvas.log().entered_zone, 1);

    canvas.drag_to(cell_center(STRIP_A, 1));
    canvas.drag_to(cell_center(STRIP_A, 0));
    assert_eq!(canvas.log().left_zone, 1);
    assert!(!canvas.driver.bundle().unwrap().is_over_delete_zone());

    let updates = canvas.release(cell_center(STRIP_A, 0));
    assert_eq!(canvas.items(0), vec!["x", "y"]);
    assert_ne!(outcome_of(&updates), Some(DropOutcome::Deleted));
    assert_eq!(canvas.log().deleted, 0);
    assert_eq!(canvas.log().ended, 1);
}

#[test]
fn test_ghost_center_decides_zone_membership() {
    let mut canvas = canvas_with_zone(&["x"], &[]);

    canvas.begin(cell_center(STRIP_A, 0));
    // Ghost covers x 380..430 with its center at 405: inside
    canvas.drag_to(Point::new(405.0, 25.0));
    assert!(canvas.driver.bundle().unwrap().is_over_delete_zone());

    // Ghost overlaps the zone at x 400..420 but its center at 395 is outside
    canvas.drag_to(Point::new(395.0, 25.0));
    assert!(!canvas.driver.bundle().unwrap().is_over_delete_zone());
}
