//! Gridshift - drag items between scrollable grid and list surfaces.
//!
//! The crate is UI-agnostic. A host feeds canvas-space pointer input in and
//! plays back the [`DragUpdate`](session::DragUpdate) values it gets out.
//!
//! ## Modules
//!
//! - `session` - coordinator, gesture driver, active drag state
//! - `surface` - the surface contract and a flow-laid-out collection surface
//! - `gesture` - long-press recognition
//! - `spatial_index` - R-tree hit-testing over visible cells
//! - `geometry` - points, sizes, rects
//! - `config` / `error` / `constants` / `types` - shared plumbing
//! - `perf` - timing and the `profile_scope!` macro

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod perf;
pub mod session;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use config::DragConfig;
pub use error::{DragError, DragResult};
pub use geometry::{Point, Rect, Size};
pub use session::{DragCoordinator, DragUpdate, GestureDriver, GesturePhase, PointerSample};
pub use surface::{CollectionSurface, FlowLayout, VecDataSource};
pub use types::{DragItem, Orientation, SlotIndex, SurfaceId};
