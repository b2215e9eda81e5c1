//! Session observer callbacks. Fire-and-forget; every method defaults to a no-op.

pub trait DragObserver {
    fn drag_began(&mut self) {}

    fn drag_ended(&mut self) {}

    fn dropped_into_delete_zone(&mut self) {}

    fn entered_delete_zone(&mut self) {}

    fn left_delete_zone(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DragObserver for NoopObserver {}

type Callback = Box<dyn FnMut()>;

/// Observer built from optional closures.
#[derive(Default)]
pub struct CallbackObserver {
    on_drag_began: Option<Callback>,
    on_drag_ended: Option<Callback>,
    on_dropped_into_delete_zone: Option<Callback>,
    on_entered_delete_zone: Option<Callback>,
    on_left_delete_zone: Option<Callback>,
}

impl CallbackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_drag_began(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_began = Some(Box::new(f));
        self
    }

    pub fn on_drag_ended(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_ended = Some(Box::new(f));
        self
    }

    pub fn on_dropped_into_delete_zone(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_dropped_into_delete_zone = Some(Box::new(f));
        self
    }

    pub fn on_entered_delete_zone(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_entered_delete_zone = Some(Box::new(f));
        self
    }

    pub fn on_left_delete_zone(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_left_delete_zone = Some(Box::new(f));
        self
    }
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(f) = callback {
        f();
    }
}

impl DragObserver for CallbackObserver {
    fn drag_began(&mut self) {
        fire(&mut self.on_drag_began);
    }

    fn drag_ended(&mut self) {
        fire(&mut self.on_drag_ended);
    }

    fn dropped_into_delete_zone(&mut self) {
        fire(&mut self.on_dropped_into_delete_zone);
    }

    fn entered_delete_zone(&mut self) {
        fire(&mut self.on_entered_delete_zone);
    }

    fn left_delete_zone(&mut self) {
        fire(&mut self.on_left_delete_zone);
    }
}
