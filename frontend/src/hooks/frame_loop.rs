use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Runs `tick` on every animation frame until it returns `false`.
/// Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        // weak so the closure does not keep itself alive
        let next = Rc::downgrade(&callback);
        let frame = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            frame.set(None);
            if !tick(timestamp) {
                return;
            }
            if let Some(callback) = next.upgrade() {
                if let Some(callback) = callback.borrow().as_ref() {
                    frame.set(request_frame(callback));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(first) = callback.borrow().as_ref() {
            pending.set(request_frame(first));
        }

        Self { callback, pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.callback.borrow_mut().take();
    }
}
