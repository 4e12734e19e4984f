// Recording doubles for the surface and host, shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trail_core::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DrawRecord {
    pub frame: u64,
    pub age: u32,
    pub opacity: f32,
    pub size: f32,
}

pub struct RecordingSurface {
    viewport: Rc<Cell<Viewport>>,
    pub size: Viewport,
    pub resize_calls: u32,
    pub clear_calls: u64,
    pub draws: Vec<DrawRecord>,
}

impl RecordingSurface {
    pub fn new(viewport: Rc<Cell<Viewport>>) -> Self {
        Self {
            viewport,
            size: Viewport::default(),
            resize_calls: 0,
            clear_calls: 0,
            draws: Vec::new(),
        }
    }

    pub fn draws_in_frame(&self, frame: u64) -> usize {
        self.draws.iter().filter(|d| d.frame == frame).count()
    }
}

impl RenderSurface for RecordingSurface {
    fn resize_to_viewport(&mut self) {
        self.size = self.viewport.get();
        self.resize_calls += 1;
    }

    fn clear(&mut self) {
        self.clear_calls += 1;
    }

    fn draw_particle(&mut self, particle: &Particle) {
        self.draws.push(DrawRecord {
            frame: self.clear_calls,
            age: particle.age(),
            opacity: particle.opacity(),
            size: particle.size(),
        });
    }
}

pub struct MockListeners {
    pub id: u32,
}

#[derive(Default)]
pub struct MockHost {
    viewport: Rc<Cell<Viewport>>,
    input: Option<InputBridge>,
    surface: Option<Rc<RefCell<RecordingSurface>>>,
    next_handle: u32,
    pub pending: Option<u32>,
    pub requested: u32,
    pub cancelled: Vec<u32>,
    pub attached: u32,
    pub detached: u32,
    pub fail_attach: bool,
    pub fail_request: bool,
}

impl MockHost {
    pub fn new(viewport: Rc<Cell<Viewport>>) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn listeners_attached(&self) -> bool {
        self.input.is_some()
    }

    /// Deliver a pointer move; false when no listener is registered.
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        match &self.input {
            Some(input) => {
                input.pointer_moved(x, y);
                true
            }
            None => false,
        }
    }

    pub fn resize(&self, width: u32, height: u32) -> bool {
        self.viewport.set(Viewport { width, height });
        match &self.surface {
            Some(surface) => {
                surface.borrow_mut().resize_to_viewport();
                true
            }
            None => false,
        }
    }

    /// Consume the pending frame as the display refresh would.
    pub fn fire(&mut self) -> Option<u32> {
        self.pending.take()
    }
}

impl Host<RecordingSurface> for MockHost {
    type FrameHandle = u32;
    type Listeners = MockListeners;

    fn attach(
        &mut self,
        input: InputBridge,
        surface: Rc<RefCell<RecordingSurface>>,
    ) -> TrailResult<MockListeners> {
        if self.fail_attach {
            return Err(TrailError::ListenerRegistration {
                event: "pointermove",
                reason: "mock refused".into(),
            });
        }
        self.input = Some(input);
        self.surface = Some(surface);
        self.attached += 1;
        Ok(MockListeners { id: self.attached })
    }

    fn detach(&mut self, _listeners: MockListeners) {
        self.input = None;
        self.surface = None;
        self.detached += 1;
    }

    fn request_frame(&mut self) -> TrailResult<u32> {
        if self.fail_request {
            return Err(TrailError::FrameRequest("mock refused".into()));
        }
        assert!(self.pending.is_none(), "two frames pending at once");
        self.next_handle += 1;
        self.requested += 1;
        self.pending = Some(self.next_handle);
        Ok(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

pub type Trail = AnimationLoop<RecordingSurface, MockHost>;

pub fn trail_with(config: TrailConfig) -> Trail {
    let viewport = Rc::new(Cell::new(Viewport {
        width: 1280,
        height: 720,
    }));
    let surface = RecordingSurface::new(viewport.clone());
    let host = MockHost::new(viewport);
    AnimationLoop::new(surface, host, config.with_seed(7)).expect("valid config")
}

pub fn trail() -> Trail {
    trail_with(TrailConfig::default())
}

/// Fire the pending display refresh and run the tick it triggers.
pub fn run_frame(trail: &mut Trail) -> TickStats {
    assert!(
        trail.host_mut().fire().is_some(),
        "no frame pending; loop is not scheduled"
    );
    trail.tick().expect("tick")
}

pub fn run_frames(trail: &mut Trail, n: usize) {
    for _ in 0..n {
        run_frame(trail);
    }
}
