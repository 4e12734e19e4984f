use crate::dom;
use anyhow::anyhow;
use std::f64::consts::TAU;
use trail_core::{Particle, RenderSurface, TrailConfig, TrailError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trail renderer over a 2D canvas context.
pub struct CanvasSurface {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    glow_blur: f64,
    glow_color: String,
}

impl CanvasSurface {
    /// Fails when the canvas cannot hand out a 2D context.
    pub fn new(
        window: web::Window,
        canvas: web::HtmlCanvasElement,
        config: &TrailConfig,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| TrailError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            window,
            canvas,
            ctx,
            glow_blur: config.glow_blur,
            glow_color: format!("rgba(255, 255, 255, {})", config.glow_alpha),
        })
    }
}

impl RenderSurface for CanvasSurface {
    fn resize_to_viewport(&mut self) {
        let vp = dom::viewport(&self.window);
        self.canvas.set_width(vp.width);
        self.canvas.set_height(vp.height);
        log::debug!("trail canvas resized to {}x{}", vp.width, vp.height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn draw_particle(&mut self, particle: &Particle) {
        let pos = particle.position();
        let (x, y) = (pos.x as f64, pos.y as f64);
        let radius = particle.size() as f64;

        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        let core = format!("rgba(255, 255, 255, {})", particle.opacity());
        _ = gradient.add_color_stop(0.0, &core);
        _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");

        self.ctx.begin_path();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.set_shadow_color(&self.glow_color);
        self.ctx.set_shadow_blur(self.glow_blur);
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
