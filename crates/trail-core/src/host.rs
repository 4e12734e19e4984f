use crate::error::TrailResult;
use crate::input::InputBridge;
use std::cell::RefCell;
use std::rc::Rc;

/// Environment hooks the animation loop needs from its host page.
///
/// All callbacks run on one thread; a host must never invoke the pointer or
/// resize hooks re-entrantly from inside `request_frame` or `cancel_frame`.
pub trait Host<S> {
    /// Token for one pending display-refresh callback.
    type FrameHandle;
    /// Registered pointer-move and resize listeners.
    type Listeners;

    /// Register a document-scoped pointer-move listener feeding `input` and a
    /// viewport resize listener calling `resize_to_viewport` on `surface`.
    fn attach(
        &mut self,
        input: InputBridge,
        surface: Rc<RefCell<S>>,
    ) -> TrailResult<Self::Listeners>;

    fn detach(&mut self, listeners: Self::Listeners);

    /// Schedule one tick on the next display refresh.
    fn request_frame(&mut self) -> TrailResult<Self::FrameHandle>;

    fn cancel_frame(&mut self, handle: Self::FrameHandle);
}
