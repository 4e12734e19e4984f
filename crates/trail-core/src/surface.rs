use crate::particle::Particle;

/// Pixel dimensions of the host viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Drawing target for the trail.
///
/// Implementations keep no particle state between calls; the only state they
/// own is their current pixel size.
pub trait RenderSurface {
    /// Match the backing pixel size to the current viewport.
    fn resize_to_viewport(&mut self);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Radial-gradient disc at the particle position with a soft glow.
    /// Alpha at the centre is the particle opacity, 0 at `size`.
    fn draw_particle(&mut self, particle: &Particle);
}
