//! Collection surface - a scrollable flow of cells backed by a data source.
//!
//! ## Hidden slot
//!
//! While an item is airborne, the cell standing in for it (its origin slot,
//! or the slot it was inserted into on entering) is hidden. Every path that
//! ends the hover (leaving, dropping, stopping) reveals it again.
//!
//! ## Hover rect
//!
//! `will_move_item` and `did_move_item` record the latest ghost rect. The
//! edge-scroll timer reads it, so it is always written before a tick can see
//! it and cleared when the item leaves or lands.

use super::autoscroll::EdgeScroll;
use super::data_source::SurfaceDataSource;
use super::layout::FlowLayout;
use super::{Draggable, Droppable, Ghost, Surface, ViewUpdate};
use crate::geometry::{Point, Rect, Size};
use crate::spatial_index::SlotIndexTree;
use crate::types::{DragItem, SlotIndex};
use std::marker::PhantomData;
use tracing::{debug, trace};

pub struct CollectionSurface<T, D> {
    frame: Rect,
    layout: FlowLayout,
    data_source: D,
    content_offset: Point,
    /// External paging in progress; suppresses edge scrolling
    paging: bool,
    /// Slot hidden while its item is airborne
    dragging_slot: Option<SlotIndex>,
    /// Latest hover rect in content coordinates
    current_rect: Option<Rect>,
    edge_scroll_armed: bool,
    cells: SlotIndexTree,
    updates: Vec<ViewUpdate>,
    _item: PhantomData<fn() -> T>,
}

impl<T, D> CollectionSurface<T, D>
where
    T: DragItem,
    D: SurfaceDataSource<T>,
{
    pub fn new(frame: Rect, layout: FlowLayout, data_source: D) -> Self {
        let mut surface = Self {
            frame,
            layout,
            data_source,
            content_offset: Point::zero(),
            paging: false,
            dragging_slot: None,
            current_rect: None,
            edge_scroll_armed: false,
            cells: SlotIndexTree::new(),
            updates: Vec::new(),
            _item: PhantomData,
        };
        surface.reindex();
        surface
    }

    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    pub fn viewport_size(&self) -> Size {
        self.frame.size
    }

    pub fn content_size(&self) -> Size {
        self.layout
            .content_size(self.data_source.count(), self.viewport_size())
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.reindex();
    }

    /// Scroll without animation, clamped to the content.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = self.clamp_offset(offset);
        self.reindex();
    }

    pub fn set_paging(&mut self, paging: bool) {
        self.paging = paging;
    }

    pub fn is_paging(&self) -> bool {
        self.paging
    }

    /// Slot currently hidden from rendering, if any.
    pub fn hidden_slot(&self) -> Option<SlotIndex> {
        self.dragging_slot
    }

    pub fn hover_rect(&self) -> Option<Rect> {
        self.current_rect
    }

    pub fn is_edge_scroll_armed(&self) -> bool {
        self.edge_scroll_armed
    }

    /// Frame of the cell at `slot` in content coordinates.
    pub fn frame_for(&self, slot: SlotIndex) -> Option<Rect> {
        (slot.row < self.data_source.count())
            .then(|| self.layout.frame_for(slot.row, self.viewport_size()))
    }

    fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.viewport_size())
    }

    fn clamp_offset(&self, offset: Point) -> Point {
        let content = self.content_size();
        let viewport = self.viewport_size();
        Point::new(
            offset.x.clamp(0.0, (content.width - viewport.width).max(0.0)),
            offset.y.clamp(0.0, (content.height - viewport.height).max(0.0)),
        )
    }

    /// Rebuild the visible cell index. Content may have shrunk since the
    /// last call, so the offset is pulled back inside it first.
    fn reindex(&mut self) {
        let clamped = self.clamp_offset(self.content_offset);
        if clamped != self.content_offset {
            self.content_offset = clamped;
            self.updates.push(ViewUpdate::ScrollTo { offset: clamped });
        }

        let visible = self.visible_rect();
        let cells = self
            .layout
            .visible_cells(self.data_source.count(), self.viewport_size(), &visible);
        self.cells.rebuild(cells);
    }

    fn slot_at(&self, point: Point) -> Option<SlotIndex> {
        self.cells.slot_at(point)
    }

    /// Slot that a drop at `rect` resolves to.
    ///
    /// An empty surface accepts slot 0, a rect past the end of the content
    /// resolves to the last slot, and otherwise the visible cell with the
    /// largest overlap wins (earliest slot on ties).
    pub fn slot_overlapping_rect(&self, rect: &Rect) -> Option<SlotIndex> {
        let count = self.data_source.count();
        if count == 0 {
            return Some(SlotIndex::row(0));
        }

        let content = self.content_size();
        let past_end = if self.layout.orientation.is_horizontal() {
            rect.min_x() > content.width
        } else {
            rect.min_y() > content.height
        };
        if past_end {
            return Some(SlotIndex::row(count - 1));
        }

        self.cells.max_overlap(rect)
    }

    fn remove_present(&mut self, item: &T) -> Option<SlotIndex> {
        let slot = self.data_source.index_of(item)?;
        self.data_source.delete_item(slot);
        self.updates.push(ViewUpdate::Delete { slot });
        self.reindex();
        Some(slot)
    }

    fn reveal_hidden(&mut self) {
        if let Some(slot) = self.dragging_slot.take() {
            self.updates.push(ViewUpdate::Reveal { slot });
        }
    }

    fn hide(&mut self, slot: SlotIndex) {
        if self.dragging_slot != Some(slot) {
            self.dragging_slot = Some(slot);
            self.updates.push(ViewUpdate::Hide { slot });
        }
    }

    /// Row an entering item is inserted at. Never past the append slot,
    /// and never in front of a pinned first row or behind a pinned last row.
    fn insertion_row(&self, row: usize) -> usize {
        let count = self.data_source.count();
        let mut row = row.min(count);
        if count > 0 && self.data_source.anchor_last() {
            row = row.min(count - 1);
        }
        if count > 0 && self.data_source.anchor_first() {
            row = row.max(1);
        }
        row
    }

    fn is_anchored(&self, slot: SlotIndex) -> bool {
        let count = self.data_source.count();
        let is_first = slot.row == 0;
        let is_last = count > 0 && slot.row == count - 1;
        (is_first && self.data_source.anchor_first()) || (is_last && self.data_source.anchor_last())
    }
}

impl<T, D> Surface<T> for CollectionSurface<T, D>
where
    T: DragItem,
    D: SurfaceDataSource<T>,
{
    fn frame(&self) -> Rect {
        self.frame
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn as_draggable(&mut self) -> Option<&mut dyn Draggable<T>> {
        Some(self)
    }

    fn as_droppable(&mut self) -> Option<&mut dyn Droppable<T>> {
        Some(self)
    }

    fn is_droppable(&self) -> bool {
        true
    }

    fn take_updates(&mut self) -> Vec<ViewUpdate> {
        std::mem::take(&mut self.updates)
    }
}

impl<T, D> Draggable<T> for CollectionSurface<T, D>
where
    T: DragItem,
    D: SurfaceDataSource<T>,
{
    fn can_drag_at(&self, point: Point) -> bool {
        self.slot_at(point)
            .is_some_and(|slot| self.data_source.is_draggable(slot))
    }

    fn representation_at(&self, point: Point) -> Option<Ghost> {
        let slot = self.slot_at(point)?;
        let frame = self.frame_for(slot)?;
        Some(Ghost { frame, slot })
    }

    fn data_item_at(&self, point: Point) -> Option<T> {
        let slot = self.slot_at(point)?;
        self.data_source.item_at(slot)
    }

    fn drag_data_item(&mut self, item: &T) {
        if let Some(slot) = self.remove_present(item) {
            debug!(slot = %slot, "Removed dragged item from source");
        }
    }

    fn start_dragging(&mut self, point: Point) {
        if let Some(slot) = self.slot_at(point) {
            self.hide(slot);
        }
        self.edge_scroll_armed = true;
    }

    fn stop_dragging(&mut self) {
        self.reveal_hidden();
        self.current_rect = None;
        self.edge_scroll_armed = false;
        self.updates.push(ViewUpdate::Reload);
    }
}

impl<T, D> Droppable<T> for CollectionSurface<T, D>
where
    T: DragItem,
    D: SurfaceDataSource<T>,
{
    fn can_drop_at_rect(&self, rect: &Rect) -> bool {
        self.slot_overlapping_rect(rect).is_some()
    }

    fn will_move_item(&mut self, item: &T, rect: &Rect) {
        if self.data_source.index_of(item).is_some() {
            return;
        }

        if let Some(slot) = self.slot_overlapping_rect(rect) {
            let slot = SlotIndex::new(slot.section, self.insertion_row(slot.row));
            self.data_source.insert_item(item.clone(), slot);
            self.updates.push(ViewUpdate::Insert { slot });
            self.reindex();
            self.dragging_slot = Some(slot);
            self.updates.push(ViewUpdate::Hide { slot });
            debug!(slot = %slot, "Item entered surface");
        }

        self.current_rect = Some(*rect);
    }

    fn did_move_item(&mut self, item: &T, rect: &Rect) {
        let existing = self.data_source.index_of(item);
        let target = self.slot_overlapping_rect(rect);

        if let (Some(from), Some(to)) = (existing, target) {
            if from.row != to.row && !self.is_anchored(from) && !self.is_anchored(to) {
                self.data_source.move_item(from, to);
                self.updates.push(ViewUpdate::Move { from, to });
                self.reindex();
                self.dragging_slot = Some(to);
                trace!(from = %from, to = %to, "Moved hovering item");
            }
        }

        self.current_rect = Some(*rect);
    }

    fn did_move_out_item(&mut self, item: &T) {
        if let Some(slot) = self.remove_present(item) {
            debug!(slot = %slot, "Item left surface");
        }
        self.reveal_hidden();
        self.current_rect = None;
    }

    fn drop_data_item(&mut self, _item: &T, _rect: &Rect) {
        self.reveal_hidden();
        self.current_rect = None;
        self.data_source.did_drop_item();
        self.updates.push(ViewUpdate::DropFinished);
        self.updates.push(ViewUpdate::Reload);
    }

    fn restore_item(&mut self, item: &T, slot: SlotIndex) {
        let count = self.data_source.count();
        let slot = match self.data_source.index_of(item) {
            Some(current) => {
                let target = SlotIndex::new(current.section, slot.row.min(count.saturating_sub(1)));
                if current != target {
                    self.data_source.move_item(current, target);
                    self.updates.push(ViewUpdate::Move {
                        from: current,
                        to: target,
                    });
                }
                target
            }
            None => {
                let target = SlotIndex::new(slot.section, slot.row.min(count));
                self.data_source.insert_item(item.clone(), target);
                self.updates.push(ViewUpdate::Insert { slot: target });
                target
            }
        };
        self.reindex();
        self.hide(slot);
        debug!(slot = %slot, "Restored item after cancel");
    }

    fn dragging_origin_of_cell(&self) -> Option<Point> {
        let slot = self.dragging_slot?;
        self.frame_for(slot).map(|frame| frame.origin)
    }

    fn scroll_near_edges(&mut self, scroll: &EdgeScroll) {
        if self.paging {
            return;
        }
        let Some(rect) = self.current_rect else {
            return;
        };

        let in_viewport = rect.translate(Point::zero() - self.content_offset);
        let next = scroll.next_offset(
            &in_viewport,
            self.layout.orientation,
            self.viewport_size(),
            self.content_size(),
            self.content_offset,
        );

        if let Some(offset) = next {
            trace!(x = offset.x, y = offset.y, "Edge scroll");
            self.content_offset = offset;
            self.reindex();
            self.updates.push(ViewUpdate::ScrollTo { offset });
        }
    }
}
