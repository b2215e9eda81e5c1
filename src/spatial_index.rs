//! Spatial Index Module
//!
//! R-tree over the frames of a surface's visible cells. Answers the two
//! questions the drag path asks on every sample: which cell is under a point,
//! and which cell overlaps a rect the most.

use crate::geometry::{Point, Rect};
use crate::types::SlotIndex;
use rstar::{AABB, RTree, RTreeObject};

/// A visible cell's frame in content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CellEntry {
    pub slot: SlotIndex,
    pub frame: Rect,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.frame.min_x(), self.frame.min_y()],
            [self.frame.max_x(), self.frame.max_y()],
        )
    }
}

impl PartialEq for CellEntry {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// Spatial index over visible cells.
#[derive(Default)]
pub struct SlotIndexTree {
    tree: RTree<CellEntry>,
    len: usize,
}

impl SlotIndexTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(slot, frame)` pairs.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (SlotIndex, Rect)>,
    {
        let entries: Vec<CellEntry> = cells
            .into_iter()
            .map(|(slot, frame)| CellEntry { slot, frame })
            .collect();
        let len = entries.len();

        Self {
            tree: RTree::bulk_load(entries),
            len,
        }
    }

    pub fn rebuild<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (SlotIndex, Rect)>,
    {
        *self = Self::from_cells(cells);
    }

    /// First slot (in slot order) whose frame contains `point`.
    pub fn slot_at(&self, point: Point) -> Option<SlotIndex> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.frame.contains(point))
            .map(|entry| entry.slot)
            .min()
    }

    /// Slot with the strictly largest overlap against `rect`. Equal areas
    /// keep the earlier slot.
    pub fn max_overlap(&self, rect: &Rect) -> Option<SlotIndex> {
        let envelope = AABB::from_corners(
            [rect.min_x(), rect.min_y()],
            [rect.max_x(), rect.max_y()],
        );

        let mut candidates: Vec<&CellEntry> =
            self.tree.locate_in_envelope_intersecting(&envelope).collect();
        candidates.sort_by_key(|entry| entry.slot);

        let mut best_area = 0.0_f32;
        let mut best = None;
        for entry in candidates {
            let area = entry.frame.intersection_area(rect);
            if area > best_area {
                best_area = area;
                best = Some(entry.slot);
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.len = 0;
    }
}
