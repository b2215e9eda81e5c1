//! State of the single active drag.

use crate::geometry::{Point, Rect};
use crate::surface::Ghost;
use crate::types::SurfaceId;
use std::time::{Duration, Instant};

/// Repeating edge-scroll timer driven by caller-supplied timestamps.
#[derive(Debug, Clone)]
pub struct AutoScrollTicker {
    period: Duration,
    last_fire: Option<Instant>,
}

impl AutoScrollTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_fire: None,
        }
    }

    /// Start counting from `now`. The first tick is due one period later.
    pub fn arm(&mut self, now: Instant) {
        self.last_fire = Some(now);
    }

    pub fn is_armed(&self) -> bool {
        self.last_fire.is_some()
    }

    /// True when a period has elapsed since the last fire. Missed periods
    /// are coalesced into one fire. An unarmed ticker arms itself instead.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_fire {
            None => {
                self.last_fire = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.period => {
                self.last_fire = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}

/// One drag session, from lift to drop or cancel.
///
/// Created by [`DragCoordinator::begin_if_eligible`](super::DragCoordinator::begin_if_eligible)
/// and consumed by `on_end` / `on_cancel`.
#[derive(Debug, Clone)]
pub struct DragBundle<T> {
    /// Pointer position minus ghost origin, fixed for the session
    pub(crate) offset: Point,
    pub(crate) source: SurfaceId,
    pub(crate) over: Option<SurfaceId>,
    /// Ghost frame in canvas coordinates, slot in the source
    pub(crate) ghost: Ghost,
    pub(crate) item: T,
    /// Canvas point the gesture started at
    pub(crate) start_point: Point,
    /// Latest rect handed to the over surface, in its local coordinates
    pub(crate) current_rect: Option<Rect>,
    pub(crate) over_delete_zone: bool,
    pub(crate) ticker: AutoScrollTicker,
}

impl<T> DragBundle<T> {
    pub fn source(&self) -> SurfaceId {
        self.source
    }

    /// Surface the item currently belongs to, if any.
    pub fn over(&self) -> Option<SurfaceId> {
        self.over
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn ghost_frame(&self) -> Rect {
        self.ghost.frame
    }

    pub fn ghost(&self) -> &Ghost {
        &self.ghost
    }

    pub fn current_rect(&self) -> Option<Rect> {
        self.current_rect
    }

    pub fn is_over_delete_zone(&self) -> bool {
        self.over_delete_zone
    }

    /// Start the edge-scroll timer.
    pub fn arm_ticker(&mut self, now: Instant) {
        self.ticker.arm(now);
    }

    pub(crate) fn move_ghost_to(&mut self, pointer: Point) {
        self.ghost.frame.origin = pointer - self.offset;
    }
}
