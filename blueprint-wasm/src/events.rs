use blueprint::ViewportState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget, WheelEvent};

/// Imperatively registered wheel listener. The browser only honors
/// `preventDefault` from a non-passive handler, so this cannot go through the
/// declarative event layer; the closure is kept alive here and the listener
/// is removed when the hook is dropped.
pub struct WheelHook {
    target: EventTarget,
    closure: Closure<dyn FnMut(WheelEvent)>,
}

impl WheelHook {
    pub fn attach(target: EventTarget, viewport: Rc<RefCell<ViewportState>>) -> Option<WheelHook> {
        let closure = Closure::<dyn FnMut(WheelEvent)>::new(move |ev: WheelEvent| {
            ev.prevent_default();
            viewport.borrow_mut().wheel(ev.delta_y() as f32);
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(WheelHook { target, closure })
    }
}

impl Drop for WheelHook {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("wheel", self.closure.as_ref().unchecked_ref());
    }
}
