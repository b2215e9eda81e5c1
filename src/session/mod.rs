//! Drag session: coordinator, gesture driver and the state they share.
//!
//! - `coordinator` - surface registry and per-sample routing
//! - `driver` - maps gesture phases onto coordinator operations
//! - `bundle` - state of the active drag
//! - `observer` - session notifications

mod bundle;
mod coordinator;
mod driver;
mod observer;

pub use bundle::{AutoScrollTicker, DragBundle};
pub use coordinator::DragCoordinator;
pub use driver::{GestureDriver, GesturePhase, PointerSample};
pub use observer::{CallbackObserver, DragObserver, NoopObserver};

pub use crate::types::SurfaceId;

use crate::geometry::{Point, Rect};
use crate::surface::ViewUpdate;
use serde::{Deserialize, Serialize};

/// Something the renderer has to play, in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragUpdate {
    Surface {
        surface: SurfaceId,
        update: ViewUpdate,
    },
    Ghost(GhostUpdate),
    Finished(DropOutcome),
}

/// Floating snapshot changes, canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GhostUpdate {
    Lifted { frame: Rect },
    Moved { frame: Rect },
    /// Animate the ghost back to `to`, then discard it
    SnapBack { to: Point },
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Landed in a surface other than the source
    Dropped { surface: SurfaceId },
    /// Stayed in (or returned to) the source
    Settled { surface: SurfaceId },
    Deleted,
    Cancelled,
}

/// Keep only the view updates addressed to `surface`.
pub fn updates_for(updates: &[DragUpdate], surface: SurfaceId) -> Vec<ViewUpdate> {
    updates
        .iter()
        .filter_map(|update| match update {
            DragUpdate::Surface { surface: id, update } if *id == surface => Some(*update),
            _ => None,
        })
        .collect()
}

/// Final outcome in a batch of updates, if the session ended.
pub fn outcome_of(updates: &[DragUpdate]) -> Option<DropOutcome> {
    updates.iter().find_map(|update| match update {
        DragUpdate::Finished(outcome) => Some(*outcome),
        _ => None,
    })
}
