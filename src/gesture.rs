//! Long-press recognition.
//!
//! Raw pointer input is turned into phase-tagged [`PointerSample`]s. A press
//! becomes a drag once it has been held for the activation delay without
//! moving further than the slop. Call
//! [`check_long_press`](LongPressRecognizer::check_long_press) on every frame
//! tick so a stationary press activates without further input.

use crate::config::DragConfig;
use crate::geometry::Point;
use crate::session::{GesturePhase, PointerSample};
use std::time::{Duration, Instant};
use tracing::trace;

/// Raw pointer input in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressState {
    Idle,
    Pending {
        origin: Point,
        down_at: Instant,
        last: Point,
    },
    Active {
        last: Point,
    },
}

#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    delay: Duration,
    slop: f32,
    state: PressState,
}

impl LongPressRecognizer {
    pub fn new(delay: Duration, slop: f32) -> Self {
        Self {
            delay,
            slop,
            state: PressState::Idle,
        }
    }

    pub fn from_config(config: &DragConfig) -> Self {
        Self::new(config.long_press_duration(), config.long_press_slop)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PressState::Active { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, PressState::Pending { .. })
    }

    pub fn reset(&mut self) {
        self.state = PressState::Idle;
    }

    pub fn process(&mut self, input: PointerInput, now: Instant) -> Option<PointerSample> {
        match (self.state, input) {
            (PressState::Idle, PointerInput::Down(point)) => {
                self.state = PressState::Pending {
                    origin: point,
                    down_at: now,
                    last: point,
                };
                None
            }
            (PressState::Idle, _) => None,

            (PressState::Pending { .. }, PointerInput::Down(_)) => None,
            (PressState::Pending { origin, down_at, .. }, PointerInput::Move(point)) => {
                if now.saturating_duration_since(down_at) >= self.delay {
                    self.state = PressState::Active { last: point };
                    return Some(PointerSample::new(GesturePhase::Began, point, now));
                }
                if distance(origin, point) > self.slop {
                    trace!(x = point.x, y = point.y, "Long press failed: moved beyond slop");
                    self.state = PressState::Idle;
                    return Some(PointerSample::new(GesturePhase::Failed, point, now));
                }
                self.state = PressState::Pending {
                    origin,
                    down_at,
                    last: point,
                };
                None
            }
            (PressState::Pending { .. }, PointerInput::Up(_) | PointerInput::Cancel) => {
                self.state = PressState::Idle;
                None
            }

            (PressState::Active { .. }, PointerInput::Down(_)) => None,
            (PressState::Active { .. }, PointerInput::Move(point)) => {
                self.state = PressState::Active { last: point };
                Some(PointerSample::new(GesturePhase::Changed, point, now))
            }
            (PressState::Active { .. }, PointerInput::Up(point)) => {
                self.state = PressState::Idle;
                Some(PointerSample::new(GesturePhase::Ended, point, now))
            }
            (PressState::Active { last }, PointerInput::Cancel) => {
                self.state = PressState::Idle;
                Some(PointerSample::new(GesturePhase::Cancelled, last, now))
            }
        }
    }

    /// Activate a press held still for the full delay.
    pub fn check_long_press(&mut self, now: Instant) -> Option<PointerSample> {
        let PressState::Pending { down_at, last, .. } = self.state else {
            return None;
        };
        if now.saturating_duration_since(down_at) < self.delay {
            return None;
        }
        self.state = PressState::Active { last };
        Some(PointerSample::new(GesturePhase::Began, last, now))
    }
}

fn distance(a: Point, b: Point) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}
