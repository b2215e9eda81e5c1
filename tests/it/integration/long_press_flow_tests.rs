//! Raw pointer input through the long-press recognizer into the driver.

use crate::helpers::{cell_center, two_strips, TestCanvas, STRIP_A, STRIP_B};
use gridshift::gesture::{LongPressRecognizer, PointerInput};
use gridshift::session::{outcome_of, DragUpdate, DropOutcome};
use gridshift::DragConfig;

/// Feed one input (or a bare frame tick) at `ms` and collect the updates.
fn step(
    canvas: &mut TestCanvas,
    press: &mut LongPressRecognizer,
    input: Option<PointerInput>,
    ms: u64,
) -> Vec<DragUpdate> {
    let now = canvas.at(ms);
    let sample = match input {
        Some(input) => press.process(input, now),
        None => press.check_long_press(now),
    };

    let mut updates = canvas.driver.tick(now);
    if let Some(sample) = sample {
        updates.extend(canvas.driver.handle(sample));
    }
    updates
}

#[test]
fn test_long_press_then_drag_to_other_surface() {
    let mut canvas = two_strips(&["x", "y"], &[]);
    let b = canvas.ids[1];
    let mut press = LongPressRecognizer::from_config(&DragConfig::default());

    step(&mut canvas, &mut press, Some(PointerInput::Down(cell_center(STRIP_A, 0))), 0);
    step(&mut canvas, &mut press, None, 200);
    assert!(!canvas.driver.is_dragging());

    step(&mut canvas, &mut press, None, 450);
    assert!(canvas.driver.is_dragging());
    assert_eq!(canvas.log().began, 1);

    step(&mut canvas, &mut press, Some(PointerInput::Move(cell_center(STRIP_B, 0))), 500);
    let updates = step(&mut canvas, &mut press, Some(PointerInput::Up(cell_center(STRIP_B, 0))), 550);

    assert_eq!(outcome_of(&updates), Some(DropOutcome::Dropped { surface: b }));
    assert_eq!(canvas.items(0), vec!["y"]);
    assert_eq!(canvas.items(1), vec!["x"]);
}

#[test]
fn test_quick_swipe_never_drags() {
    let mut canvas = two_strips(&["x", "y"], &[]);
    let mut press = LongPressRecognizer::from_config(&DragConfig::default());

    step(&mut canvas, &mut press, Some(PointerInput::Down(cell_center(STRIP_A, 0))), 0);
    step(&mut canvas, &mut press, Some(PointerInput::Move(cell_center(STRIP_B, 0))), 100);
    step(&mut canvas, &mut press, None, 600);
    step(&mut canvas, &mut press, Some(PointerInput::Up(cell_center(STRIP_B, 0))), 650);

    assert!(!canvas.driver.is_dragging());
    assert_eq!(canvas.log().began, 0);
    assert_eq!(canvas.items(0), vec!["x", "y"]);
    assert!(canvas.items(1).is_empty());
}

#[test]
fn test_system_cancel_rolls_back() {
    let mut canvas = two_strips(&["x", "y"], &[]);
    let mut press = LongPressRecognizer::from_config(&DragConfig::default());

    step(&mut canvas, &mut press, Some(PointerInput::Down(cell_center(STRIP_A, 1))), 0);
    step(&mut canvas, &mut press, None, 500);
    step(&mut canvas, &mut press, Some(PointerInput::Move(cell_center(STRIP_B, 0))), 550);
    assert_eq!(canvas.items(1), vec!["y"]);

    let updates = step(&mut canvas, &mut press, Some(PointerInput::Cancel), 600);
    assert_eq!(outcome_of(&updates), Some(DropOutcome::Cancelled));
    assert_eq!(canvas.items(0), vec!["x", "y"]);
    assert!(canvas.items(1).is_empty());
}
