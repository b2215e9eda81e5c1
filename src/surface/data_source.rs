//! Data source collaborator bound to every surface.
//!
//! A surface cannot be built without one, so every drag operation can reach
//! the backing sequence. Mutations are infallible from the surface's point of
//! view; slots out of range are ignored or clamped.

use crate::types::SlotIndex;
use parking_lot::Mutex;
use std::sync::Arc;

/// Backing sequence of a surface, addressed by slot.
pub trait SurfaceDataSource<T> {
    fn count(&self) -> usize;

    /// Current slot of `item`, found by identity.
    fn index_of(&self, item: &T) -> Option<SlotIndex>;

    fn item_at(&self, slot: SlotIndex) -> Option<T>;

    fn move_item(&mut self, from: SlotIndex, to: SlotIndex);

    fn insert_item(&mut self, item: T, at: SlotIndex);

    fn delete_item(&mut self, at: SlotIndex);

    fn is_draggable(&self, _slot: SlotIndex) -> bool {
        true
    }

    /// Pin the first slot: nothing moves into or out of it.
    fn anchor_first(&self) -> bool {
        false
    }

    /// Pin the last slot.
    fn anchor_last(&self) -> bool {
        false
    }

    /// Called once a drop onto this surface completes.
    fn did_drop_item(&mut self) {}
}

/// In-memory data source over a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct VecDataSource<T> {
    items: Vec<T>,
    locked: Vec<T>,
    anchor_first: bool,
    anchor_last: bool,
    drops: usize,
}

/// A data source the host keeps a handle to while the surface owns a clone.
pub type SharedDataSource<T> = Arc<Mutex<VecDataSource<T>>>;

impl<T: Clone + PartialEq> VecDataSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            locked: Vec::new(),
            anchor_first: false,
            anchor_last: false,
            drops: 0,
        }
    }

    pub fn shared(items: Vec<T>) -> SharedDataSource<T> {
        Arc::new(Mutex::new(Self::new(items)))
    }

    /// Mark `item` as not draggable.
    pub fn with_locked(mut self, item: T) -> Self {
        self.locked.push(item);
        self
    }

    pub fn with_anchors(mut self, first: bool, last: bool) -> Self {
        self.anchor_first = first;
        self.anchor_last = last;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of completed drops reported to this source.
    pub fn drop_count(&self) -> usize {
        self.drops
    }
}

impl<T: Clone + PartialEq> SurfaceDataSource<T> for VecDataSource<T> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn index_of(&self, item: &T) -> Option<SlotIndex> {
        self.items.iter().position(|i| i == item).map(SlotIndex::row)
    }

    fn item_at(&self, slot: SlotIndex) -> Option<T> {
        self.items.get(slot.row).cloned()
    }

    fn move_item(&mut self, from: SlotIndex, to: SlotIndex) {
        if from.row >= self.items.len() {
            return;
        }
        let item = self.items.remove(from.row);
        let to = to.row.min(self.items.len());
        self.items.insert(to, item);
    }

    fn insert_item(&mut self, item: T, at: SlotIndex) {
        let at = at.row.min(self.items.len());
        self.items.insert(at, item);
    }

    fn delete_item(&mut self, at: SlotIndex) {
        if at.row < self.items.len() {
            self.items.remove(at.row);
        }
    }

    fn is_draggable(&self, slot: SlotIndex) -> bool {
        self.items
            .get(slot.row)
            .is_some_and(|item| !self.locked.contains(item))
    }

    fn anchor_first(&self) -> bool {
        self.anchor_first
    }

    fn anchor_last(&self) -> bool {
        self.anchor_last
    }

    fn did_drop_item(&mut self) {
        self.drops += 1;
    }
}

impl<T, D> SurfaceDataSource<T> for Arc<Mutex<D>>
where
    D: SurfaceDataSource<T>,
{
    fn count(&self) -> usize {
        self.lock().count()
    }

    fn index_of(&self, item: &T) -> Option<SlotIndex> {
        self.lock().index_of(item)
    }

    fn item_at(&self, slot: SlotIndex) -> Option<T> {
        self.lock().item_at(slot)
    }

    fn move_item(&mut self, from: SlotIndex, to: SlotIndex) {
        self.lock().move_item(from, to)
    }

    fn insert_item(&mut self, item: T, at: SlotIndex) {
        self.lock().insert_item(item, at)
    }

    fn delete_item(&mut self, at: SlotIndex) {
        self.lock().delete_item(at)
    }

    fn is_draggable(&self, slot: SlotIndex) -> bool {
        self.lock().is_draggable(slot)
    }

    fn anchor_first(&self) -> bool {
        self.lock().anchor_first()
    }

    fn anchor_last(&self) -> bool {
        self.lock().anchor_last()
    }

    fn did_drop_item(&mut self) {
        self.lock().did_drop_item()
    }
}
