// Trail tuning constants shared by the web and native front-ends.

// Lifetime
pub const MAX_AGE_FRAMES: u32 = 60; // frames until a particle is retired

// Spawning
pub const SPAWN_PER_MOVE: usize = 4; // particles per pointer-move event

// Per-particle randomisation (half-open ranges)
pub const SIZE_MIN_PX: f32 = 2.0;
pub const SIZE_MAX_PX: f32 = 7.0;
pub const SPEED_MIN_PX: f32 = 0.5; // px per frame
pub const SPEED_MAX_PX: f32 = 2.0;

// Glow
pub const GLOW_BLUR_PX: f64 = 20.0;
pub const GLOW_ALPHA: f64 = 0.8;

// Overlay stacking order; keeps the trail above the questionnaire
pub const OVERLAY_Z_INDEX: i32 = 9999;
