//! Headless soak run of the trail simulation.
//!
//! Drives the core loop with a synthetic pointer sweeping a circle and
//! reports how the live particle count behaves, so spawn rates and caps can
//! be sized without a browser.
//!
//! ```text
//! RUST_LOG=debug trail-native --frames 600 --moves-per-frame 8 --cap 1500
//! ```

use anyhow::bail;
use clap::Parser;
use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use trail_core::{
    AnimationLoop, Host, InputBridge, Particle, RenderSurface, TrailConfig, TrailResult, Viewport,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "trail-native", about = "Headless cursor-trail soak run")]
struct Args {
    /// Display refreshes to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Pointer-move events delivered between two refreshes
    #[arg(long, default_value_t = 4)]
    moves_per_frame: u32,

    /// Hard cap on live particles
    #[arg(long)]
    cap: Option<usize>,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Surface that only counts work and tracks the particle extent.
#[derive(Default)]
struct CountingSurface {
    viewport: Viewport,
    clears: u64,
    draws: u64,
    offscreen_draws: u64,
}

impl RenderSurface for CountingSurface {
    fn resize_to_viewport(&mut self) {
        // fixed virtual 1080p display
        self.viewport = Viewport {
            width: 1920,
            height: 1080,
        };
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_particle(&mut self, particle: &Particle) {
        self.draws += 1;
        let p = particle.position();
        let (w, h) = (self.viewport.width as f32, self.viewport.height as f32);
        if p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
            self.offscreen_draws += 1;
        }
    }
}

/// Frame queue standing in for the display refresh.
#[derive(Default)]
struct SoakHost {
    input: Option<InputBridge>,
    queue: VecDeque<u64>,
    next: u64,
}

impl SoakHost {
    fn pointer_move(&self, at: Vec2) {
        if let Some(input) = &self.input {
            input.pointer_moved(at.x, at.y);
        }
    }

    fn fire(&mut self) -> bool {
        self.queue.pop_front().is_some()
    }
}

impl Host<CountingSurface> for SoakHost {
    type FrameHandle = u64;
    type Listeners = ();

    fn attach(
        &mut self,
        input: InputBridge,
        _surface: Rc<RefCell<CountingSurface>>,
    ) -> TrailResult<()> {
        self.input = Some(input);
        Ok(())
    }

    fn detach(&mut self, _listeners: ()) {
        self.input = None;
    }

    fn request_frame(&mut self) -> TrailResult<u64> {
        self.next += 1;
        self.queue.push_back(self.next);
        Ok(self.next)
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.queue.retain(|&h| h != handle);
    }
}

/// Point on the circle swept by the synthetic pointer for move `m` of `frame`.
fn sweep_point(center: Vec2, frame: u32, m: u32, moves_per_frame: u32) -> Vec2 {
    let step = frame as u64 * moves_per_frame as u64 + m as u64;
    // the sweep repeats every 2π / 0.05 steps, so fold before going to f32
    let phase = (step as f64 * 0.05) % std::f64::consts::TAU;
    center + Vec2::from_angle(phase as f32) * 300.0
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let params = Args::parse();

    let config = TrailConfig::default()
        .with_max_live(params.cap)
        .with_seed(params.seed);
    let max_age = config.max_age;
    let spawn_per_move = config.spawn_per_move;
    let mut trail = AnimationLoop::new(CountingSurface::default(), SoakHost::default(), config)?;
    trail.start()?;

    let center = Vec2::new(960.0, 540.0);
    let mut peak = 0usize;
    for frame in 0..params.frames {
        for m in 0..params.moves_per_frame {
            trail
                .host()
                .pointer_move(sweep_point(center, frame, m, params.moves_per_frame));
        }
        peak = peak.max(trail.particle_count());
        if !trail.host_mut().fire() {
            bail!("loop stopped scheduling at frame {}", frame);
        }
        let stats = trail.tick()?;
        log::debug!("frame {frame}: drawn {} live {}", stats.drawn, stats.live);
    }

    let bound = params.moves_per_frame as usize * spawn_per_move * max_age as usize;
    let bound = params.cap.map_or(bound, |cap| bound.min(cap));
    let evicted = trail.particles().evicted();
    {
        let surface = trail.surface();
        log::info!(
            "{} frames: {} draws ({} off-screen), peak live {} (bound {}), evicted {}",
            surface.clears,
            surface.draws,
            surface.offscreen_draws,
            peak,
            bound,
            evicted
        );
    }
    if peak > bound {
        bail!("peak live count {} exceeded bound {}", peak, bound);
    }

    trail.stop();
    if trail.particle_count() != 0 || !trail.host().queue.is_empty() {
        bail!("stop left work behind");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::try_parse_from(["trail-native"]).expect("parse");
        assert_eq!(args.frames, 600);
        assert_eq!(args.moves_per_frame, 4);
        assert_eq!(args.cap, None);
        assert_eq!(args.seed, 42);
    }

    #[test]
    fn named_flags_are_parsed() {
        let args = Args::try_parse_from([
            "trail-native",
            "--frames",
            "10",
            "--moves-per-frame",
            "8",
            "--cap",
            "1500",
            "--seed",
            "7",
        ])
        .expect("parse");
        assert_eq!(args.frames, 10);
        assert_eq!(args.moves_per_frame, 8);
        assert_eq!(args.cap, Some(1500));
        assert_eq!(args.seed, 7);
    }

    #[test]
    fn help_and_bad_values_are_reported_by_clap() {
        let err = Args::try_parse_from(["trail-native", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["trail-native", "--frames", "lots"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn sweep_point_handles_extreme_frame_counts() {
        let center = Vec2::new(960.0, 540.0);
        let p = sweep_point(center, u32::MAX, u32::MAX, u32::MAX);
        assert!(p.is_finite());
        assert!(((p - center).length() - 300.0).abs() < 1e-2);
    }
}
