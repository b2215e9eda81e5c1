//! Surfaces: scrollable containers taking part in drag and drop.
//!
//! A surface exposes its canvas frame and content offset, and opts into the
//! two capability sets the coordinator drives:
//!
//! - [`Draggable`] - items can be picked up from it
//! - [`Droppable`] - items can hover over and land in it
//!
//! Capabilities are looked up through [`Surface::as_draggable`] and
//! [`Surface::as_droppable`]. Mutations are reported back as [`ViewUpdate`]
//! values drained with [`Surface::take_updates`]; the renderer plays them.
//!
//! ## Modules
//!
//! - `collection` - flow-laid-out surface backed by a data source
//! - `data_source` - the data source contract and an in-memory implementation
//! - `layout` - cell geometry
//! - `autoscroll` - edge scrolling

mod autoscroll;
mod collection;
mod data_source;
mod layout;

pub use autoscroll::EdgeScroll;
pub use collection::CollectionSurface;
pub use data_source::{SharedDataSource, SurfaceDataSource, VecDataSource};
pub use layout::FlowLayout;

use crate::geometry::{Point, Rect};
use crate::types::SlotIndex;
use serde::{Deserialize, Serialize};

/// Geometry snapshot of the item being lifted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    /// Frame in the coordinates the snapshot was taken in
    pub frame: Rect,
    /// Slot the snapshot was rendered from
    pub slot: SlotIndex,
}

/// View change a surface asks the renderer to perform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewUpdate {
    Insert { slot: SlotIndex },
    Delete { slot: SlotIndex },
    Move { from: SlotIndex, to: SlotIndex },
    /// Hide the cell standing in for the airborne item
    Hide { slot: SlotIndex },
    Reveal { slot: SlotIndex },
    ScrollTo { offset: Point },
    /// A drop landed; the data source has been told
    DropFinished,
    Reload,
}

/// Items can be picked up from this surface. Points are surface-local.
pub trait Draggable<T> {
    fn can_drag_at(&self, point: Point) -> bool;

    fn representation_at(&self, point: Point) -> Option<Ghost>;

    fn data_item_at(&self, point: Point) -> Option<T>;

    /// Remove `item` wherever it currently sits; no-op if absent.
    fn drag_data_item(&mut self, item: &T);

    fn start_dragging(&mut self, _point: Point) {}

    fn stop_dragging(&mut self) {}
}

/// Items can be dropped onto this surface. Rects are surface-local.
pub trait Droppable<T> {
    fn can_drop_at_rect(&self, rect: &Rect) -> bool;

    /// Insert `item` at the slot under `rect` unless already present.
    fn will_move_item(&mut self, item: &T, rect: &Rect);

    /// Move `item` to the slot under `rect` when that slot differs.
    fn did_move_item(&mut self, item: &T, rect: &Rect);

    /// Remove `item` if present and forget the hover state.
    fn did_move_out_item(&mut self, item: &T);

    fn drop_data_item(&mut self, item: &T, rect: &Rect);

    /// Local origin of the hidden slot, for the snap-back animation.
    fn dragging_origin_of_cell(&self) -> Option<Point>;

    /// Put `item` back at `slot` after a cancelled drag, moving it if it is
    /// still present elsewhere.
    fn restore_item(&mut self, _item: &T, _slot: SlotIndex) {}

    /// One edge-scroll check. Surfaces that do not scroll ignore it.
    fn scroll_near_edges(&mut self, _scroll: &EdgeScroll) {}
}

/// A container registered with the coordinator.
pub trait Surface<T> {
    /// Frame in canvas coordinates.
    fn frame(&self) -> Rect;

    fn content_offset(&self) -> Point {
        Point::zero()
    }

    fn as_draggable(&mut self) -> Option<&mut dyn Draggable<T>> {
        None
    }

    fn as_droppable(&mut self) -> Option<&mut dyn Droppable<T>> {
        None
    }

    fn is_droppable(&self) -> bool;

    /// Drain the view updates queued since the last call.
    fn take_updates(&mut self) -> Vec<ViewUpdate> {
        Vec::new()
    }

    /// Canvas point to surface-local (content) coordinates.
    fn to_local(&self, point: Point) -> Point {
        point - self.frame().origin + self.content_offset()
    }

    fn rect_to_local(&self, rect: &Rect) -> Rect {
        rect.with_origin(self.to_local(rect.origin))
    }

    fn to_canvas(&self, point: Point) -> Point {
        point - self.content_offset() + self.frame().origin
    }

    fn rect_to_canvas(&self, rect: &Rect) -> Rect {
        rect.with_origin(self.to_canvas(rect.origin))
    }
}
