//! Drag coordinator - owns the surface registry and drives one session at a time.
//!
//! ## Per-sample flow
//!
//! ```text
//! pointer -> ghost origin (pointer - offset)
//!         -> surface with the largest ghost overlap (strict >, registration order)
//!         -> can_drop_at_rect? -> leave previous / enter new -> did_move_item
//!         -> delete zone edge detection
//! ```
//!
//! Every mutation goes through the surface contract. Surfaces queue view
//! updates; each operation drains them, tags them with the surface id and
//! returns them to the caller.

use super::bundle::{AutoScrollTicker, DragBundle};
use super::observer::{DragObserver, NoopObserver};
use super::{DragUpdate, DropOutcome, GhostUpdate};
use crate::config::DragConfig;
use crate::error::{DragError, DragResult};
use crate::geometry::{Point, Rect};
use crate::perf::{OperationStats, ScopedTimer};
use crate::profile_scope;
use crate::surface::{Draggable, Droppable, EdgeScroll, Ghost, Surface};
use crate::types::{DragItem, SurfaceId};
use std::time::Instant;
use tracing::{debug, info, trace};

pub struct DragCoordinator<T> {
    surfaces: Vec<(SurfaceId, Box<dyn Surface<T>>)>,
    next_id: u32,
    config: DragConfig,
    edge_scroll: EdgeScroll,
    observer: Box<dyn DragObserver>,
    move_stats: OperationStats,
}

impl<T: DragItem> DragCoordinator<T> {
    pub fn new(config: DragConfig) -> DragResult<Self> {
        config.validate()?;
        Ok(Self {
            surfaces: Vec::new(),
            next_id: 0,
            edge_scroll: EdgeScroll::from(&config),
            config,
            observer: Box::new(NoopObserver),
            move_stats: OperationStats::default(),
        })
    }

    pub fn with_observer(mut self, observer: impl DragObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl DragObserver + 'static) {
        self.observer = Box::new(observer);
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Timing of `on_move` calls so far.
    pub fn move_stats(&self) -> &OperationStats {
        &self.move_stats
    }

    /// Add a surface. Registration order decides eligibility order and
    /// overlap ties.
    pub fn register(&mut self, surface: impl Surface<T> + 'static) -> DragResult<SurfaceId> {
        let mut surface: Box<dyn Surface<T>> = Box::new(surface);

        let frame = surface.frame();
        if frame.is_degenerate() {
            return Err(DragError::InvalidSurface(format!(
                "frame {:?} has no area",
                frame
            )));
        }
        if surface.is_droppable() && surface.as_droppable().is_none() {
            return Err(DragError::InvalidSurface(
                "surface claims to be droppable but exposes no drop capability".to_string(),
            ));
        }

        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.push((id, surface));
        debug!(surface = %id, "Registered surface");
        Ok(id)
    }

    pub fn unregister(&mut self, id: SurfaceId) -> DragResult<Box<dyn Surface<T>>> {
        let position = self
            .surfaces
            .iter()
            .position(|(sid, _)| *sid == id)
            .ok_or(DragError::UnknownSurface(id))?;
        Ok(self.surfaces.remove(position).1)
    }

    pub fn surface_ids(&self) -> Vec<SurfaceId> {
        self.surfaces.iter().map(|(id, _)| *id).collect()
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&dyn Surface<T>> {
        self.surfaces
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, surface)| surface.as_ref())
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut (dyn Surface<T> + 'static)> {
        self.surfaces
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, surface)| surface.as_mut())
    }

    fn draggable(&mut self, id: SurfaceId) -> Option<&mut dyn Draggable<T>> {
        self.surface_mut(id)?.as_draggable()
    }

    fn droppable(&mut self, id: SurfaceId) -> Option<&mut dyn Droppable<T>> {
        self.surface_mut(id)?.as_droppable()
    }

    fn local_rect(&self, id: SurfaceId, canvas_rect: &Rect) -> Option<Rect> {
        self.surface(id).map(|surface| surface.rect_to_local(canvas_rect))
    }

    /// Surface with the strictly largest overlap against `frame` (canvas
    /// coordinates). Equal areas keep the earlier-registered surface; no
    /// overlap at all yields `None`.
    pub fn surface_under(&self, frame: &Rect) -> Option<SurfaceId> {
        let mut best_area = 0.0_f32;
        let mut best = None;

        for (id, surface) in &self.surfaces {
            let area = frame.intersection_area(&surface.frame());
            if area > best_area {
                best_area = area;
                best = Some(*id);
            }
        }
        best
    }

    /// Find the first draggable surface with an eligible item under `point`
    /// and build a session for it. No side effects on any surface.
    pub fn begin_if_eligible(&mut self, point: Point) -> Option<DragBundle<T>> {
        let period = self.config.auto_scroll_period();

        for (id, surface) in self.surfaces.iter_mut() {
            let local = surface.to_local(point);
            let source_droppable = surface.is_droppable();

            let Some(draggable) = surface.as_draggable() else {
                continue;
            };
            if !draggable.can_drag_at(local) {
                continue;
            }
            let Some(representation) = draggable.representation_at(local) else {
                continue;
            };
            let Some(item) = draggable.data_item_at(local) else {
                continue;
            };

            let ghost = Ghost {
                frame: surface.rect_to_canvas(&representation.frame),
                slot: representation.slot,
            };
            let offset = point - ghost.frame.origin;

            debug!(surface = %id, slot = %ghost.slot, ?item, "Drag eligible");
            return Some(DragBundle {
                offset,
                source: *id,
                over: source_droppable.then_some(*id),
                ghost,
                item,
                start_point: point,
                current_rect: None,
                over_delete_zone: false,
                ticker: AutoScrollTicker::new(period),
            });
        }

        None
    }

    /// Lift the item: hide its source slot and arm edge scrolling.
    pub fn start(&mut self, bundle: &mut DragBundle<T>) -> Vec<DragUpdate> {
        let source = bundle.source;
        if let Some(surface) = self.surface_mut(source) {
            let local = surface.to_local(bundle.start_point);
            if let Some(draggable) = surface.as_draggable() {
                draggable.start_dragging(local);
            }
        }
        self.observer.drag_began();
        info!(surface = %source, item = ?bundle.item, "Drag began");

        let mut updates = vec![DragUpdate::Ghost(GhostUpdate::Lifted {
            frame: bundle.ghost.frame,
        })];
        self.drain_updates(&mut updates);
        updates
    }

    pub fn on_move(&mut self, bundle: &mut DragBundle<T>, point: Point) -> Vec<DragUpdate> {
        profile_scope!("on_move");
        let timer = ScopedTimer::for_sample("on_move");

        bundle.move_ghost_to(point);
        let frame = bundle.ghost.frame;
        let mut updates = vec![DragUpdate::Ghost(GhostUpdate::Moved { frame })];

        if let Some(winner) = self.surface_under(&frame) {
            let accepted = self.surface_mut(winner).and_then(|surface| {
                let rect = surface.rect_to_local(&frame);
                let droppable = surface.as_droppable()?;
                droppable.can_drop_at_rect(&rect).then_some(rect)
            });

            if let Some(rect) = accepted {
                if bundle.over != Some(winner) {
                    if let Some(previous) = bundle.over {
                        if let Some(droppable) = self.droppable(previous) {
                            droppable.did_move_out_item(&bundle.item);
                        }
                        debug!(surface = %previous, "Left surface");
                    }
                    if let Some(droppable) = self.droppable(winner) {
                        droppable.will_move_item(&bundle.item, &rect);
                    }
                    debug!(surface = %winner, "Entered surface");
                }

                bundle.over = Some(winner);
                bundle.current_rect = Some(rect);

                if let Some(droppable) = self.droppable(winner) {
                    droppable.did_move_item(&bundle.item, &rect);
                }
            }
        }

        self.update_delete_zone(bundle);
        self.drain_updates(&mut updates);

        self.move_stats.record(timer.elapsed_ms());
        trace!(x = point.x, y = point.y, over = ?bundle.over, "Drag sample");

        updates
    }

    fn update_delete_zone(&mut self, bundle: &mut DragBundle<T>) {
        let Some(zone) = self.config.delete_zone else {
            return;
        };

        let inside = zone.contains(bundle.ghost.frame.center());
        if inside == bundle.over_delete_zone {
            return;
        }

        bundle.over_delete_zone = inside;
        if inside {
            debug!("Entered delete zone");
            self.observer.entered_delete_zone();
        } else {
            debug!("Left delete zone");
            self.observer.left_delete_zone();
        }
    }

    /// Finish the session at `point`, committing the drop.
    pub fn on_end(&mut self, mut bundle: DragBundle<T>, point: Point) -> Vec<DragUpdate> {
        bundle.move_ghost_to(point);
        let frame = bundle.ghost.frame;
        let source = bundle.source;
        let mut updates = Vec::new();

        if bundle.over_delete_zone {
            if let Some(draggable) = self.draggable(source) {
                draggable.drag_data_item(&bundle.item);
            }
            if let Some(over) = bundle.over {
                let rect = self.local_rect(over, &frame).unwrap_or(frame);
                if let Some(droppable) = self.droppable(over) {
                    if over != source {
                        droppable.did_move_out_item(&bundle.item);
                    }
                    droppable.drop_data_item(&bundle.item, &rect);
                }
            }
            self.stop_source(source);

            info!(surface = %source, item = ?bundle.item, "Dropped into delete zone");
            self.observer.dropped_into_delete_zone();

            self.drain_updates(&mut updates);
            updates.push(DragUpdate::Ghost(GhostUpdate::Removed));
            updates.push(DragUpdate::Finished(DropOutcome::Deleted));
            return updates;
        }

        let mut outcome = DropOutcome::Settled { surface: source };
        if let Some(over) = bundle.over.filter(|over| *over != source) {
            let rect = self.local_rect(over, &frame).unwrap_or(frame);
            if self.droppable(over).is_some() {
                if let Some(draggable) = self.draggable(source) {
                    draggable.drag_data_item(&bundle.item);
                }
                if let Some(droppable) = self.droppable(over) {
                    droppable.drop_data_item(&bundle.item, &rect);
                }
                info!(from = %source, to = %over, item = ?bundle.item, "Dropped into surface");
                outcome = DropOutcome::Dropped { surface: over };
            }
        }

        let snap_back = self.snap_back_point(source);
        self.stop_source(source);
        self.observer.drag_ended();

        self.drain_updates(&mut updates);
        updates.push(DragUpdate::Ghost(match snap_back {
            Some(to) => GhostUpdate::SnapBack { to },
            None => GhostUpdate::Removed,
        }));
        updates.push(DragUpdate::Finished(outcome));
        updates
    }

    /// Abandon the session. Staged hover mutations are rolled back so no
    /// surface keeps a phantom slot and the item returns to its origin.
    pub fn on_cancel(&mut self, bundle: DragBundle<T>) -> Vec<DragUpdate> {
        let source = bundle.source;
        let mut updates = Vec::new();

        if let Some(over) = bundle.over.filter(|over| *over != source) {
            if let Some(droppable) = self.droppable(over) {
                droppable.did_move_out_item(&bundle.item);
            }
        }
        if let Some(droppable) = self.droppable(source) {
            droppable.restore_item(&bundle.item, bundle.ghost.slot);
        }

        let snap_back = self.snap_back_point(source);
        self.stop_source(source);
        self.observer.drag_ended();
        info!(surface = %source, item = ?bundle.item, "Drag cancelled");

        self.drain_updates(&mut updates);
        updates.push(DragUpdate::Ghost(match snap_back {
            Some(to) => GhostUpdate::SnapBack { to },
            None => GhostUpdate::Removed,
        }));
        updates.push(DragUpdate::Finished(DropOutcome::Cancelled));
        updates
    }

    /// Advance the edge-scroll timer; on a fire, the surface the item is
    /// over gets one edge check.
    ///
    /// The ghost stays put on the canvas while the content scrolls under it,
    /// so its local rect is refreshed before each check. A held pointer keeps
    /// scrolling until the content end.
    pub fn tick(&mut self, bundle: &mut DragBundle<T>, now: Instant) -> Vec<DragUpdate> {
        let mut updates = Vec::new();
        if !bundle.ticker.poll(now) {
            return updates;
        }

        if let Some(over) = bundle.over {
            let frame = bundle.ghost.frame;
            let edge_scroll = self.edge_scroll;
            if let Some(surface) = self.surface_mut(over) {
                let rect = surface.rect_to_local(&frame);
                if let Some(droppable) = surface.as_droppable() {
                    if droppable.can_drop_at_rect(&rect) {
                        droppable.did_move_item(&bundle.item, &rect);
                        bundle.current_rect = Some(rect);
                    }
                    droppable.scroll_near_edges(&edge_scroll);
                }
            }
        }

        self.drain_updates(&mut updates);
        updates
    }

    fn snap_back_point(&mut self, source: SurfaceId) -> Option<Point> {
        let origin = self.droppable(source)?.dragging_origin_of_cell()?;
        self.surface(source).map(|surface| surface.to_canvas(origin))
    }

    fn stop_source(&mut self, source: SurfaceId) {
        if let Some(draggable) = self.draggable(source) {
            draggable.stop_dragging();
        }
    }

    fn drain_updates(&mut self, out: &mut Vec<DragUpdate>) {
        for (id, surface) in self.surfaces.iter_mut() {
            out.extend(
                surface
                    .take_updates()
                    .into_iter()
                    .map(|update| DragUpdate::Surface {
                        surface: *id,
                        update,
                    }),
            );
        }
    }
}
