use crate::events::EventListener;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{Host, InputBridge, RenderSurface, TrailError, TrailResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the requestAnimationFrame callback; filled once the loop exists.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Id returned by `requestAnimationFrame`.
pub struct FrameHandle(i32);

pub struct BrowserListeners {
    _pointer: EventListener,
    _resize: EventListener,
}

/// Browser event and display-refresh plumbing for the trail.
pub struct BrowserHost {
    window: web::Window,
    document: web::Document,
    tick: TickSlot,
}

impl BrowserHost {
    pub fn new(window: web::Window, document: web::Document, tick: TickSlot) -> Self {
        Self {
            window,
            document,
            tick,
        }
    }
}

impl Host<CanvasSurface> for BrowserHost {
    type FrameHandle = FrameHandle;
    type Listeners = BrowserListeners;

    fn attach(
        &mut self,
        input: InputBridge,
        surface: Rc<RefCell<CanvasSurface>>,
    ) -> TrailResult<BrowserListeners> {
        let pointer = EventListener::new(self.document.as_ref(), "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                input.pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
            }
        })?;
        let resize = EventListener::new(self.window.as_ref(), "resize", move |_| {
            surface.borrow_mut().resize_to_viewport();
        })?;
        Ok(BrowserListeners {
            _pointer: pointer,
            _resize: resize,
        })
    }

    fn detach(&mut self, listeners: BrowserListeners) {
        drop(listeners);
    }

    fn request_frame(&mut self) -> TrailResult<FrameHandle> {
        let slot = self.tick.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| TrailError::FrameRequest("tick callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| TrailError::FrameRequest(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}
