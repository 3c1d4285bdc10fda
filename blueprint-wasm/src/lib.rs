use wasm_bindgen::prelude::*;

mod api;
mod error;
mod events;
mod interop;

use blueprint::{RenderOptions, RenderSession, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;

#[wasm_bindgen]
pub struct BlueprintView {
    pub(crate) session: RenderSession,
    pub(crate) viewport: Rc<RefCell<ViewportState>>,
    pub(crate) wheel: Option<events::WheelHook>,
}

impl BlueprintView {
    pub fn rs_new(options: RenderOptions) -> BlueprintView {
        BlueprintView {
            session: RenderSession::new(options),
            viewport: Rc::new(RefCell::new(ViewportState::new())),
            wheel: None,
        }
    }
}
