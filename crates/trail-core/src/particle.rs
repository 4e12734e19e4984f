use crate::config::TrailConfig;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A single short-lived trail particle.
///
/// Size, heading and speed are fixed at spawn; only position, age and
/// opacity change afterwards. Opacity falls linearly from 1 to 0 over
/// `max_age` updates.
#[derive(Debug, PartialEq)]
pub struct Particle {
    position: Vec2,
    size: f32,
    angle: f32,
    speed: f32,
    age: u32,
    max_age: u32,
    opacity: f32,
}

impl Particle {
    /// Spawn at `origin` with randomised size, heading and speed.
    ///
    /// `config` must have passed [`TrailConfig::validate`]; empty ranges panic.
    pub fn spawn<R: Rng + ?Sized>(origin: Vec2, rng: &mut R, config: &TrailConfig) -> Self {
        Self {
            position: origin,
            size: rng.gen_range(config.size_range.clone()),
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(config.speed_range.clone()),
            age: 0,
            max_age: config.max_age,
            opacity: 1.0,
        }
    }

    /// Advance one frame along the fixed heading and fade.
    pub fn update(&mut self) {
        self.position += self.velocity();
        self.age = self.age.saturating_add(1);
        self.opacity = opacity_at(self.age, self.max_age);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.age >= self.max_age
    }

    /// Per-frame displacement, `(cos θ, sin θ) * speed`.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.speed
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[inline]
fn opacity_at(age: u32, max_age: u32) -> f32 {
    (1.0 - age as f32 / max_age as f32).clamp(0.0, 1.0)
}
