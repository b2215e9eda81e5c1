//! Crate-wide constants.
//!
//! Centralizes the timing and geometry values used by the drag path so the
//! defaults in [`DragConfig`](crate::config::DragConfig) and the tests agree.

// ============================================================================
// Gesture Activation
// ============================================================================

/// Hold time before a press turns into a drag, in seconds
pub const LONG_PRESS_DELAY_SECS: f64 = 0.45;

/// Distance the pointer may wander during the hold before the press fails
pub const LONG_PRESS_SLOP: f32 = 10.0;

// ============================================================================
// Auto-scroll
// ============================================================================

/// Interval between edge-scroll checks while dragging, in seconds
pub const AUTO_SCROLL_INTERVAL_SECS: f64 = 0.1;

/// Width of the hot-zone strip outside each scrollable edge
pub const AUTO_SCROLL_HOT_ZONE: f32 = 40.0;

/// Fraction of the viewport extent scrolled per tick
pub const AUTO_SCROLL_STEP_FRACTION: f32 = 0.1;

// ============================================================================
// Layout Defaults
// ============================================================================

/// Default cell size for flow layouts
pub const DEFAULT_ITEM_SIZE: (f32, f32) = (60.0, 60.0);

/// Default spacing between consecutive cells
pub const DEFAULT_ITEM_SPACING: f32 = 10.0;

/// Only section populated by the flow layout
pub const PRIMARY_SECTION: usize = 0;
