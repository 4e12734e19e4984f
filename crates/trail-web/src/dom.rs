use anyhow::anyhow;
use trail_core::{Viewport, OVERLAY_Z_INDEX};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current layout viewport in CSS pixels; 0 when the host reports nonsense.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|d| d.is_finite())
            .map(|d| d.max(0.0) as u32)
            .unwrap_or(0)
    };
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
    }
}

/// Pin the canvas over the whole page without intercepting input.
pub fn apply_overlay_style(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let style = format!(
        "position:fixed;top:0;left:0;pointer-events:none;z-index:{}",
        OVERLAY_Z_INDEX
    );
    canvas
        .set_attribute("style", &style)
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Create a canvas and append it to `<body>`.
pub fn create_overlay_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}
