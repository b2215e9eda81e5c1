//! Unit tests for perf module.

use crate::helpers::{cell_center, two_strips, STRIP_A, STRIP_B};
use gridshift::perf::{measure, OperationStats, ScopedTimer, SAMPLE_BUDGET_MS};

#[test]
fn test_operation_stats_average_and_max() {
    let mut stats = OperationStats::default();
    assert_eq!(stats.average(), 0.0);

    for ms in [1.0, 2.0, 3.0] {
        stats.record(ms);
    }

    assert_eq!(stats.count(), 3);
    assert!((stats.average() - 2.0).abs() < 1e-9);
    assert_eq!(stats.max(), 3.0);
}

#[test]
fn test_over_budget_ratio() {
    let mut stats = OperationStats::default();
    stats.record(SAMPLE_BUDGET_MS / 2.0);
    stats.record(SAMPLE_BUDGET_MS * 2.0);

    assert!((stats.over_budget_ratio() - 0.5).abs() < 1e-9);
}

#[test]
fn test_stats_keep_a_rolling_window() {
    let mut stats = OperationStats::default();
    for _ in 0..100 {
        stats.record(10.0);
    }
    for _ in 0..100 {
        stats.record(1.0);
    }

    // Old samples fall out of the average but the all-time max stays
    assert!((stats.average() - 1.0).abs() < 1e-9);
    assert_eq!(stats.max(), 10.0);
    assert_eq!(stats.count(), 200);
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it should not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_sample_timer_uses_sample_budget() {
    let timer = ScopedTimer::for_sample("on_move");
    assert_eq!(timer.name(), "on_move");
    assert!(timer.elapsed_ms() < SAMPLE_BUDGET_MS * 1000.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_coordinator_records_move_timings() {
    let mut canvas = two_strips(&["x", "y", "z"], &[]);
    canvas.begin(cell_center(STRIP_A, 0));
    for row in 0..4 {
        canvas.drag_to(cell_center(STRIP_B, row));
    }

    let stats = canvas.driver.coordinator().move_stats();
    assert_eq!(stats.count(), 4);
    assert!(stats.max() >= 0.0);
}
