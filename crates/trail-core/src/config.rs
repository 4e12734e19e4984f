use crate::constants::*;
use crate::error::ConfigError;
use std::ops::Range;

/// Tunables for one trail session.
///
/// Defaults reproduce the stock trail: four particles per pointer move, a
/// sixty-frame lifetime, no cap on the live particle count.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub spawn_per_move: usize,
    pub max_age: u32,
    pub size_range: Range<f32>,
    pub speed_range: Range<f32>,
    pub glow_blur: f64,
    pub glow_alpha: f64,
    /// Hard cap on live particles. Oldest particles are evicted first.
    pub max_live: Option<usize>,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            spawn_per_move: SPAWN_PER_MOVE,
            max_age: MAX_AGE_FRAMES,
            size_range: SIZE_MIN_PX..SIZE_MAX_PX,
            speed_range: SPEED_MIN_PX..SPEED_MAX_PX,
            glow_blur: GLOW_BLUR_PX,
            glow_alpha: GLOW_ALPHA,
            max_live: None,
            seed: None,
        }
    }
}

impl TrailConfig {
    pub fn with_spawn_per_move(mut self, count: usize) -> Self {
        self.spawn_per_move = count;
        self
    }

    pub fn with_max_age(mut self, frames: u32) -> Self {
        self.max_age = frames;
        self
    }

    pub fn with_max_live(mut self, cap: Option<usize>) -> Self {
        self.max_live = cap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_per_move == 0 {
            return Err(ConfigError::ZeroSpawnCount);
        }
        if self.max_age == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        check_range("size", &self.size_range)?;
        check_range("speed", &self.speed_range)?;
        if self.max_live == Some(0) {
            return Err(ConfigError::ZeroCap);
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: &Range<f32>) -> Result<(), ConfigError> {
    // NaN bounds fail both comparisons; rand rejects an infinite span
    let valid = range.start >= 0.0 && range.start < range.end && range.end.is_finite();
    if !valid {
        return Err(ConfigError::InvalidRange {
            name,
            min: range.start,
            max: range.end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TrailConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_values() {
        let cfg = TrailConfig::default().with_spawn_per_move(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSpawnCount));

        let cfg = TrailConfig::default().with_max_age(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMaxAge));

        let cfg = TrailConfig::default().with_max_live(Some(0));
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCap));

        let cfg = TrailConfig {
            speed_range: 2.0..2.0,
            ..TrailConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "speed", .. })
        ));

        let cfg = TrailConfig {
            size_range: -1.0..3.0,
            ..TrailConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "size", .. })
        ));

        let cfg = TrailConfig {
            size_range: 2.0..f32::INFINITY,
            ..TrailConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "size", .. })
        ));

        let cfg = TrailConfig {
            speed_range: 0.5..f32::INFINITY,
            ..TrailConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "speed", .. })
        ));

        let cfg = TrailConfig {
            speed_range: 0.5..f32::NAN,
            ..TrailConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "speed", .. })
        ));
    }
}
