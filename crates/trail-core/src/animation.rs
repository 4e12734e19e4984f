use crate::config::TrailConfig;
use crate::error::{TrailError, TrailResult};
use crate::host::Host;
use crate::input::InputBridge;
use crate::particles::ParticleSet;
use crate::surface::RenderSurface;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Scheduling state of an [`AnimationLoop`].
pub enum LoopState<F, L> {
    Idle,
    /// One frame is pending and both listeners are attached.
    Running { pending: F, listeners: L },
}

/// Counters produced by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub drawn: usize,
    pub live: usize,
}

/// Per-frame driver of the trail.
///
/// Owns the particle set and the drawing surface for one mounted session and
/// shares them with the host's listeners through `Rc<RefCell<_>>`. Each tick
/// clears the surface, advances and draws the live particles, prunes the dead
/// ones and asks the host for the next display refresh.
pub struct AnimationLoop<S, H: Host<S>> {
    particles: Rc<RefCell<ParticleSet>>,
    surface: Rc<RefCell<S>>,
    host: H,
    state: LoopState<H::FrameHandle, H::Listeners>,
    spawn_per_move: usize,
    ticks: u64,
}

impl<S: RenderSurface, H: Host<S>> AnimationLoop<S, H> {
    pub fn new(surface: S, host: H, config: TrailConfig) -> TrailResult<Self> {
        let spawn_per_move = config.spawn_per_move;
        let particles = ParticleSet::new(config)?;
        Ok(Self {
            particles: Rc::new(RefCell::new(particles)),
            surface: Rc::new(RefCell::new(surface)),
            host,
            state: LoopState::Idle,
            spawn_per_move,
            ticks: 0,
        })
    }

    /// Idle -> Running: attach listeners, size the surface, schedule a tick.
    ///
    /// Calling it while running is a no-op. On failure everything attached so
    /// far is released and the loop stays idle.
    pub fn start(&mut self) -> TrailResult<()> {
        if self.is_running() {
            return Ok(());
        }
        let input = InputBridge::new(self.particles.clone(), self.spawn_per_move);
        let listeners = self.host.attach(input, self.surface.clone())?;
        self.surface.borrow_mut().resize_to_viewport();
        let pending = match self.host.request_frame() {
            Ok(handle) => handle,
            Err(e) => {
                self.host.detach(listeners);
                return Err(e);
            }
        };
        self.state = LoopState::Running { pending, listeners };
        log::info!("cursor trail started");
        Ok(())
    }

    /// Body of one display-refresh callback.
    pub fn tick(&mut self) -> TrailResult<TickStats> {
        if !self.is_running() {
            return Err(TrailError::NotRunning);
        }
        let drawn = {
            let mut surface = self.surface.borrow_mut();
            surface.clear();
            self.particles
                .borrow_mut()
                .advance_and_prune(|p| surface.draw_particle(p))
        };
        self.ticks += 1;

        match self.host.request_frame() {
            Ok(next) => {
                if let LoopState::Running { pending, .. } = &mut self.state {
                    *pending = next;
                }
            }
            Err(e) => {
                // the frame we are running in has already fired; nothing to cancel
                if let LoopState::Running { listeners, .. } =
                    std::mem::replace(&mut self.state, LoopState::Idle)
                {
                    self.release(listeners);
                }
                log::error!("cursor trail halted: {e}");
                return Err(e);
            }
        }

        Ok(TickStats {
            drawn,
            live: self.particles.borrow().len(),
        })
    }
}

impl<S, H: Host<S>> AnimationLoop<S, H> {
    /// Running -> Idle: cancel the pending frame, detach listeners and discard
    /// all particles. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let LoopState::Running { pending, listeners } =
            std::mem::replace(&mut self.state, LoopState::Idle)
        {
            self.host.cancel_frame(pending);
            self.release(listeners);
            log::info!("cursor trail stopped after {} ticks", self.ticks);
        }
    }

    fn release(&mut self, listeners: H::Listeners) {
        self.host.detach(listeners);
        self.particles.borrow_mut().clear();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    pub fn state(&self) -> &LoopState<H::FrameHandle, H::Listeners> {
        &self.state
    }

    pub fn particle_count(&self) -> usize {
        self.particles.borrow().len()
    }

    pub fn particles(&self) -> Ref<'_, ParticleSet> {
        self.particles.borrow()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Ticks executed over the loop's lifetime, across restarts.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<S, H: Host<S>> Drop for AnimationLoop<S, H> {
    fn drop(&mut self) {
        self.stop();
    }
}
