use crate::config::TrailConfig;
use crate::error::ConfigError;
use crate::particle::Particle;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Live particles of one trail session, in spawn order.
pub struct ParticleSet {
    particles: Vec<Particle>,
    config: TrailConfig,
    rng: StdRng,
    evicted: u64,
}

impl ParticleSet {
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            particles: Vec::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
            evicted: 0,
        })
    }

    /// Append `count` fresh particles at `(x, y)`.
    ///
    /// Coordinates are not validated; points outside the viewport simply draw
    /// off-canvas. With a `max_live` cap the oldest particles make room.
    pub fn spawn(&mut self, x: f32, y: f32, count: usize) {
        let origin = Vec2::new(x, y);
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(origin, &mut self.rng, &self.config);
            self.particles.push(p);
        }
        if let Some(cap) = self.config.max_live {
            let excess = self.particles.len().saturating_sub(cap);
            if excess > 0 {
                self.particles.drain(..excess);
                self.evicted += excess as u64;
                log::debug!("trail cap {cap} reached, evicted {excess} oldest particles");
            }
        }
    }

    /// Update and draw every particle, then drop the dead ones.
    ///
    /// A particle already dead on entry is neither updated nor drawn. The update
    /// that takes a particle to `max_age` is still followed by a draw, at
    /// opacity 0, so each particle gets exactly `max_age` draws before it is
    /// pruned in the same pass. Survivors keep their relative order. Returns
    /// how many particles were drawn.
    pub fn advance_and_prune<F>(&mut self, mut draw: F) -> usize
    where
        F: FnMut(&Particle),
    {
        let mut drawn = 0;
        for p in self.particles.iter_mut() {
            if p.is_dead() {
                continue;
            }
            p.update();
            draw(p);
            drawn += 1;
        }
        self.particles.retain(|p| !p.is_dead());
        drawn
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Discard every particle, keeping the RNG stream.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Particles dropped by the `max_live` cap since creation.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
