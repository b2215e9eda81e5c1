//! Core types shared between the coordinator and surfaces.

use crate::constants::PRIMARY_SECTION;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can ride a drag: cloned into the bundle and located in a
/// data source by equality.
pub trait DragItem: Clone + PartialEq + fmt::Debug {}

impl<T: Clone + PartialEq + fmt::Debug> DragItem for T {}

/// Identifies a registered surface. Assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Position within a surface's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex {
    pub section: usize,
    pub row: usize,
}

impl SlotIndex {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Slot `row` in the only section flow layouts populate.
    pub const fn row(row: usize) -> Self {
        Self::new(PRIMARY_SECTION, row)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// Scroll axis of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}
