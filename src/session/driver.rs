//! Gesture driver - maps phase-tagged pointer samples onto the coordinator.
//!
//! ## Transitions
//!
//! ```text
//! Idle     -> Dragging   (began over an eligible item)
//! Dragging -> Dragging   (changed, tick)
//! Dragging -> Idle       (ended, cancelled, failed)
//! ```
//!
//! Anything else is a no-op. A second `began` while dragging is ignored.

use super::bundle::DragBundle;
use super::coordinator::DragCoordinator;
use super::DragUpdate;
use crate::error::{DragError, DragResult};
use crate::geometry::Point;
use crate::surface::Surface;
use crate::types::{DragItem, SurfaceId};
use std::time::Instant;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    /// Recognizer gave up; treated like a cancel
    Failed,
}

/// One pointer sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: GesturePhase,
    pub position: Point,
    pub timestamp: Instant,
}

impl PointerSample {
    pub fn new(phase: GesturePhase, position: Point, timestamp: Instant) -> Self {
        Self {
            phase,
            position,
            timestamp,
        }
    }
}

pub struct GestureDriver<T> {
    coordinator: DragCoordinator<T>,
    bundle: Option<DragBundle<T>>,
}

impl<T: DragItem> GestureDriver<T> {
    pub fn new(coordinator: DragCoordinator<T>) -> Self {
        Self {
            coordinator,
            bundle: None,
        }
    }

    pub fn coordinator(&self) -> &DragCoordinator<T> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut DragCoordinator<T> {
        &mut self.coordinator
    }

    pub fn is_dragging(&self) -> bool {
        self.bundle.is_some()
    }

    pub fn bundle(&self) -> Option<&DragBundle<T>> {
        self.bundle.as_ref()
    }

    pub fn register(&mut self, surface: impl Surface<T> + 'static) -> DragResult<SurfaceId> {
        self.coordinator.register(surface)
    }

    /// Remove a surface. Refused for every surface while a drag is live,
    /// since the bundle may route to any of them.
    pub fn unregister(&mut self, id: SurfaceId) -> DragResult<Box<dyn Surface<T>>> {
        if self.bundle.is_some() {
            return Err(DragError::SessionActive);
        }
        self.coordinator.unregister(id)
    }

    pub fn handle(&mut self, sample: PointerSample) -> Vec<DragUpdate> {
        match sample.phase {
            GesturePhase::Began => {
                if self.bundle.is_some() {
                    warn!("Ignoring began while a drag is active");
                    return Vec::new();
                }
                let Some(mut bundle) = self.coordinator.begin_if_eligible(sample.position) else {
                    trace!(x = sample.position.x, y = sample.position.y, "Nothing draggable under pointer");
                    return Vec::new();
                };
                bundle.arm_ticker(sample.timestamp);
                let updates = self.coordinator.start(&mut bundle);
                self.bundle = Some(bundle);
                updates
            }
            GesturePhase::Changed => match self.bundle.as_mut() {
                Some(bundle) => self.coordinator.on_move(bundle, sample.position),
                None => Vec::new(),
            },
            GesturePhase::Ended => match self.bundle.take() {
                Some(bundle) => self.coordinator.on_end(bundle, sample.position),
                None => Vec::new(),
            },
            GesturePhase::Cancelled | GesturePhase::Failed => match self.bundle.take() {
                Some(bundle) => self.coordinator.on_cancel(bundle),
                None => Vec::new(),
            },
        }
    }

    /// Drive the edge-scroll timer. No-op when idle.
    pub fn tick(&mut self, now: Instant) -> Vec<DragUpdate> {
        match self.bundle.as_mut() {
            Some(bundle) => self.coordinator.tick(bundle, now),
            None => Vec::new(),
        }
    }
}
