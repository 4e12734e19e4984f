#![cfg(target_arch = "wasm32")]
//! Cursor-trail overlay for the questionnaire page.
//!
//! The page mounts one [`CursorTrail`] when the animated view becomes visible
//! and calls `stop()` (or `unmount()`) when it is torn down.

use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{AnimationLoop, TrailConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod host;
mod surface;

use host::{BrowserHost, TickSlot};
use surface::CanvasSurface;

type Trail = AnimationLoop<CanvasSurface, BrowserHost>;

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trail-web loaded");
    Ok(())
}

#[inline]
fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// One mounted trail session.
#[wasm_bindgen]
pub struct CursorTrail {
    trail: Rc<RefCell<Trail>>,
    tick: TickSlot,
    canvas: web::HtmlCanvasElement,
    owns_canvas: bool,
}

#[wasm_bindgen]
impl CursorTrail {
    /// Create a full-page overlay canvas and bind a trail to it.
    pub fn mount() -> Result<CursorTrail, JsValue> {
        Self::mount_config(TrailConfig::default()).map_err(to_js)
    }

    /// Like `mount()`, with a custom spawn count, lifetime and optional cap.
    #[wasm_bindgen(js_name = mountWithOptions)]
    pub fn mount_with_options(
        spawn_per_move: u32,
        max_age: u32,
        max_live: Option<u32>,
    ) -> Result<CursorTrail, JsValue> {
        let config = TrailConfig::default()
            .with_spawn_per_move(spawn_per_move as usize)
            .with_max_age(max_age)
            .with_max_live(max_live.map(|n| n as usize));
        Self::mount_config(config).map_err(to_js)
    }

    /// Bind a trail to a canvas the page already owns.
    pub fn attach(canvas: web::HtmlCanvasElement) -> Result<CursorTrail, JsValue> {
        Self::build(canvas, false, TrailConfig::default()).map_err(to_js)
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.trail.borrow_mut().start().map_err(to_js)
    }

    pub fn stop(&self) {
        self.trail.borrow_mut().stop();
    }

    /// Stop and remove the canvas if `mount()` created it.
    pub fn unmount(self) {
        // Drop does the stopping
        if self.owns_canvas {
            self.canvas.remove();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.trail.borrow().is_running()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.trail.borrow().particle_count() as u32
    }
}

impl CursorTrail {
    fn mount_config(config: TrailConfig) -> anyhow::Result<CursorTrail> {
        let (_, document) = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let canvas = dom::create_overlay_canvas(&document)?;
        match Self::build(canvas.clone(), true, config) {
            Ok(trail) => Ok(trail),
            Err(e) => {
                canvas.remove();
                Err(e)
            }
        }
    }

    fn build(
        canvas: web::HtmlCanvasElement,
        owns_canvas: bool,
        config: TrailConfig,
    ) -> anyhow::Result<CursorTrail> {
        config.validate()?;
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        dom::apply_overlay_style(&canvas)?;

        let surface = CanvasSurface::new(window.clone(), canvas.clone(), &config)?;
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let host = BrowserHost::new(window, document, tick.clone());
        let trail = Rc::new(RefCell::new(AnimationLoop::new(surface, host, config)?));

        let weak = Rc::downgrade(&trail);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            let Some(trail) = weak.upgrade() else {
                return;
            };
            let mut trail = trail.borrow_mut();
            if !trail.is_running() {
                return;
            }
            if let Err(e) = trail.tick() {
                log::error!("cursor trail tick failed: {}", e);
            }
        }) as Box<dyn FnMut(f64)>));

        Ok(CursorTrail {
            trail,
            tick,
            canvas,
            owns_canvas,
        })
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.trail.borrow_mut().stop();
        self.tick.borrow_mut().take();
    }
}
