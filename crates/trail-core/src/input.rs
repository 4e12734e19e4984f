use crate::particles::ParticleSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Turns pointer-move notifications into spawn requests.
///
/// Shares the loop's particle set; it only ever appends, never draws.
#[derive(Clone)]
pub struct InputBridge {
    particles: Rc<RefCell<ParticleSet>>,
    spawn_per_move: usize,
}

impl InputBridge {
    pub fn new(particles: Rc<RefCell<ParticleSet>>, spawn_per_move: usize) -> Self {
        Self {
            particles,
            spawn_per_move,
        }
    }

    /// No throttling: every event spawns a full batch.
    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.particles
            .borrow_mut()
            .spawn(x, y, self.spawn_per_move);
    }

    pub fn spawn_per_move(&self) -> usize {
        self.spawn_per_move
    }
}
