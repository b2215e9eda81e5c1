//! Collection surface contract: idempotent enter/leave, anchors, hidden slot.

use crate::helpers::{strip, strip_layout, STRIP_A};
use gridshift::geometry::{Point, Rect};
use gridshift::surface::{
    CollectionSurface, Draggable, Droppable, Surface, VecDataSource, ViewUpdate,
};
use gridshift::types::SlotIndex;

fn over_slot(row: usize) -> Rect {
    Rect::new(row as f32 * 60.0, 0.0, 50.0, 50.0)
}

#[test]
fn test_enter_twice_inserts_once() {
    let (mut surface, source) = strip(STRIP_A, &["a", "b"]);

    surface.will_move_item(&"c", &over_slot(0));
    surface.will_move_item(&"c", &over_slot(0));

    assert_eq!(source.lock().items(), &["c", "a", "b"]);
    assert_eq!(
        surface.take_updates(),
        vec![
            ViewUpdate::Insert { slot: SlotIndex::row(0) },
            ViewUpdate::Hide { slot: SlotIndex::row(0) },
        ]
    );
    assert_eq!(surface.hidden_slot(), Some(SlotIndex::row(0)));
}

#[test]
fn test_leave_twice_deletes_once() {
    let (mut surface, source) = strip(STRIP_A, &["a", "b"]);
    surface.will_move_item(&"c", &over_slot(1));
    surface.take_updates();

    surface.did_move_out_item(&"c");
    surface.did_move_out_item(&"c");

    assert_eq!(source.lock().items(), &["a", "b"]);
    assert_eq!(
        surface.take_updates(),
        vec![
            ViewUpdate::Delete { slot: SlotIndex::row(1) },
            ViewUpdate::Reveal { slot: SlotIndex::row(1) },
        ]
    );
    assert_eq!(surface.hidden_slot(), None);
    assert_eq!(surface.hover_rect(), None);
}

#[test]
fn test_hover_moves_item_and_hidden_slot() {
    let (mut surface, source) = strip(STRIP_A, &["a", "b", "c"]);

    surface.did_move_item(&"a", &over_slot(2));

    assert_eq!(source.lock().items(), &["b", "c", "a"]);
    assert_eq!(surface.hidden_slot(), Some(SlotIndex::row(2)));
    assert_eq!(surface.hover_rect(), Some(over_slot(2)));
    assert_eq!(
        surface.take_updates(),
        vec![ViewUpdate::Move {
            from: SlotIndex::row(0),
            to: SlotIndex::row(2),
        }]
    );
}

#[test]
fn test_anchor_first_blocks_moves_into_and_out_of_first_slot() {
    let source = VecDataSource::new(vec!["a", "b", "c"]).with_anchors(true, false);
    let mut surface: CollectionSurface<&str, _> =
        CollectionSurface::new(STRIP_A, strip_layout(), source);

    surface.did_move_item(&"c", &over_slot(0));
    assert_eq!(surface.data_source().items(), &["a", "b", "c"]);

    surface.did_move_item(&"a", &over_slot(1));
    assert_eq!(surface.data_source().items(), &["a", "b", "c"]);

    surface.did_move_item(&"c", &over_slot(1));
    assert_eq!(surface.data_source().items(), &["a", "c", "b"]);
}

#[test]
fn test_anchor_last_blocks_moves_into_and_out_of_last_slot() {
    let source = VecDataSource::new(vec!["a", "b", "c"]).with_anchors(false, true);
    let mut surface: CollectionSurface<&str, _> =
        CollectionSurface::new(STRIP_A, strip_layout(), source);

    surface.did_move_item(&"a", &over_slot(2));
    assert_eq!(surface.data_source().items(), &["a", "b", "c"]);

    surface.did_move_item(&"c", &over_slot(0));
    assert_eq!(surface.data_source().items(), &["a", "b", "c"]);

    surface.did_move_item(&"a", &over_slot(1));
    assert_eq!(surface.data_source().items(), &["b", "a", "c"]);
}

#[test]
fn test_entering_item_lands_behind_pinned_first_row() {
    let source = VecDataSource::new(vec!["a", "b", "c"]).with_anchors(true, false);
    let mut surface: CollectionSurface<&str, _> =
        CollectionSurface::new(STRIP_A, strip_layout(), source);

    surface.will_move_item(&"n", &over_slot(0));

    assert_eq!(surface.data_source().items(), &["a", "n", "b", "c"]);
    assert_eq!(surface.hidden_slot(), Some(SlotIndex::row(1)));
}

#[test]
fn test_start_and_stop_dragging_toggle_hidden_slot() {
    let (mut surface, _) = strip(STRIP_A, &["a", "b", "c"]);

    surface.start_dragging(Point::new(85.0, 25.0));
    assert_eq!(surface.hidden_slot(), Some(SlotIndex::row(1)));
    assert!(surface.is_edge_scroll_armed());
    assert_eq!(surface.dragging_origin_of_cell(), Some(Point::new(60.0, 0.0)));

    surface.stop_dragging();
    assert_eq!(surface.hidden_slot(), None);
    assert!(!surface.is_edge_scroll_armed());
    assert_eq!(surface.dragging_origin_of_cell(), None);
    assert_eq!(
        surface.take_updates(),
        vec![
            ViewUpdate::Hide { slot: SlotIndex::row(1) },
            ViewUpdate::Reveal { slot: SlotIndex::row(1) },
            ViewUpdate::Reload,
        ]
    );
}

#[test]
fn test_locked_item_is_not_draggable() {
    let source = VecDataSource::new(vec!["a", "b"]).with_locked("b");
    let surface: CollectionSurface<&str, _> =
        CollectionSurface::new(STRIP_A, strip_layout(), source);

    assert!(surface.can_drag_at(Point::new(25.0, 25.0)));
    assert!(!surface.can_drag_at(Point::new(85.0, 25.0)));
    // Spacing between cells
    assert!(!surface.can_drag_at(Point::new(55.0, 25.0)));
}

#[test]
fn test_drop_reports_to_data_source() {
    let (mut surface, source) = strip(STRIP_A, &["a"]);
    // Past the end of one cell: enters before the last item, then the hover
    // sample settles it after
    surface.will_move_item(&"b", &over_slot(1));
    assert_eq!(source.lock().items(), &["b", "a"]);
    surface.did_move_item(&"b", &over_slot(1));
    surface.drop_data_item(&"b", &over_slot(1));

    assert_eq!(source.lock().items(), &["a", "b"]);
    assert_eq!(source.lock().drop_count(), 1);
    assert_eq!(surface.hidden_slot(), None);
}

#[test]
fn test_restore_item_reinserts_at_origin() {
    let (mut surface, source) = strip(STRIP_A, &["a", "c"]);

    surface.restore_item(&"b", SlotIndex::row(1));
    assert_eq!(source.lock().items(), &["a", "b", "c"]);
    assert_eq!(surface.hidden_slot(), Some(SlotIndex::row(1)));

    surface.restore_item(&"c", SlotIndex::row(0));
    assert_eq!(source.lock().items(), &["c", "a", "b"]);
}
