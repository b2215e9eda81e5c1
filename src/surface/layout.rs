//! Flow layout: fixed-size cells laid out along the scroll axis, wrapping
//! across the cross axis when the viewport has room for more than one line.

use crate::constants::{DEFAULT_ITEM_SIZE, DEFAULT_ITEM_SPACING};
use crate::geometry::{Rect, Size};
use crate::types::{Orientation, SlotIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLayout {
    pub orientation: Orientation,
    pub item_size: Size,
    /// Gap between neighbouring cells on both axes
    pub spacing: f32,
    /// Uniform padding around the content
    pub inset: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            item_size: Size::new(DEFAULT_ITEM_SIZE.0, DEFAULT_ITEM_SIZE.1),
            spacing: DEFAULT_ITEM_SPACING,
            inset: 0.0,
        }
    }
}

impl FlowLayout {
    pub fn horizontal(item_size: Size, spacing: f32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            item_size,
            spacing,
            inset: 0.0,
        }
    }

    pub fn vertical(item_size: Size, spacing: f32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            item_size,
            spacing,
            inset: 0.0,
        }
    }

    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    /// (main-axis, cross-axis) extent of one cell.
    fn cell_extents(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (self.item_size.width, self.item_size.height),
            Orientation::Vertical => (self.item_size.height, self.item_size.width),
        }
    }

    fn cross_extent(&self, viewport: Size) -> f32 {
        match self.orientation {
            Orientation::Horizontal => viewport.height,
            Orientation::Vertical => viewport.width,
        }
    }

    /// Cells per line across the cross axis; never zero.
    pub fn items_per_line(&self, viewport: Size) -> usize {
        let (_, cell_cross) = self.cell_extents();
        let available = self.cross_extent(viewport) - 2.0 * self.inset + self.spacing;
        let stride = cell_cross + self.spacing;
        if stride <= 0.0 || available <= 0.0 {
            return 1;
        }
        ((available / stride).floor() as usize).max(1)
    }

    /// Frame of the cell at `row`, in content coordinates.
    pub fn frame_for(&self, row: usize, viewport: Size) -> Rect {
        let per_line = self.items_per_line(viewport);
        let line = row / per_line;
        let position = row % per_line;
        let (cell_main, cell_cross) = self.cell_extents();

        let main = self.inset + line as f32 * (cell_main + self.spacing);
        let cross = self.inset + position as f32 * (cell_cross + self.spacing);

        match self.orientation {
            Orientation::Horizontal => {
                Rect::new(main, cross, self.item_size.width, self.item_size.height)
            }
            Orientation::Vertical => {
                Rect::new(cross, main, self.item_size.width, self.item_size.height)
            }
        }
    }

    /// Total scrollable extent for `count` cells. The cross axis always
    /// matches the viewport.
    pub fn content_size(&self, count: usize, viewport: Size) -> Size {
        let per_line = self.items_per_line(viewport);
        let lines = count.div_ceil(per_line);
        let (cell_main, _) = self.cell_extents();

        let mut main = 2.0 * self.inset;
        if lines > 0 {
            main += lines as f32 * cell_main + (lines - 1) as f32 * self.spacing;
        }

        match self.orientation {
            Orientation::Horizontal => Size::new(main, viewport.height),
            Orientation::Vertical => Size::new(viewport.width, main),
        }
    }

    /// Slots and frames of every cell intersecting `visible` (content coordinates).
    pub fn visible_cells(&self, count: usize, viewport: Size, visible: &Rect) -> Vec<(SlotIndex, Rect)> {
        (0..count)
            .map(|row| (SlotIndex::row(row), self.frame_for(row, viewport)))
            .filter(|(_, frame)| frame.intersects(visible))
            .collect()
    }
}
