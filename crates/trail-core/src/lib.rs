//! Platform-free core of the cursor trail.
//!
//! Nothing here touches the DOM: the web front-end supplies a
//! [`RenderSurface`] and a [`Host`], tests and the headless driver supply
//! their own.

pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod particle;
pub mod particles;
pub mod surface;

pub use animation::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use host::*;
pub use input::*;
pub use particle::*;
pub use particles::*;
pub use surface::*;
