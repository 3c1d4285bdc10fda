use crate::error;
use crate::events::WheelHook;
use crate::interop::{new_obj, set_kv};
use crate::BlueprintView;
use blueprint::{input_from_value, JobPhase, OutlineGeometry, RawBlueprintInput, RenderOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Convert whatever the host hands us into one of the accepted input shapes.
// A direct geometry deserialization runs first so non-finite coordinates
// survive the crossing; everything else goes through the JSON classifier.
fn input_from_js(value: &JsValue) -> RawBlueprintInput {
    if value.is_undefined() || value.is_null() {
        return RawBlueprintInput::Absent;
    }
    if let Some(s) = value.as_string() {
        return RawBlueprintInput::Text(s);
    }
    if let Ok(geometry) = serde_wasm_bindgen::from_value::<OutlineGeometry>(value.clone()) {
        if !geometry.vertices.is_empty() {
            return RawBlueprintInput::Canonical(geometry);
        }
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value.clone()) {
        Ok(v) => input_from_value(v),
        Err(_) => RawBlueprintInput::Absent,
    }
}

#[wasm_bindgen]
impl BlueprintView {
    #[wasm_bindgen(constructor)]
    pub fn new(fallback_width: Option<f32>, fallback_height: Option<f32>) -> BlueprintView {
        let defaults = RenderOptions::default();
        BlueprintView::rs_new(RenderOptions {
            fallback_width: fallback_width
                .filter(|w| w.is_finite() && *w > 0.0)
                .unwrap_or(defaults.fallback_width),
            fallback_height: fallback_height
                .filter(|h| h.is_finite() && *h > 0.0)
                .unwrap_or(defaults.fallback_height),
        })
    }

    /// Replace the blueprint input; returns whether the geometry pipeline
    /// actually reran (unchanged input is memoized away).
    pub fn set_input(&mut self, value: JsValue) -> bool {
        self.session.set_input(input_from_js(&value))
    }

    pub fn set_input_res(&mut self, value: JsValue) -> JsValue {
        let changed = self.session.set_input(input_from_js(&value));
        let o = new_obj();
        set_kv(&o, "changed", &JsValue::from_bool(changed));
        set_kv(
            &o,
            "outcome",
            &JsValue::from_str(self.session.outcome().code()),
        );
        error::ok(o.into())
    }

    /// Unknown phase strings leave the current phase untouched.
    pub fn set_phase(&mut self, phase: &str) -> bool {
        match JobPhase::parse(phase) {
            Some(p) => {
                self.session.set_phase(p);
                true
            }
            None => false,
        }
    }

    pub fn set_phase_res(&mut self, phase: &str) -> JsValue {
        match JobPhase::parse(phase) {
            Some(p) => {
                self.session.set_phase(p);
                error::ok(JsValue::from_str(p.as_str()))
            }
            None => error::invalid_phase(phase),
        }
    }

    pub fn phase(&self) -> String {
        self.session.phase().as_str().to_string()
    }

    /// Render the current state to an SVG document string.
    pub fn svg(&self) -> String {
        self.session.render(&self.viewport.borrow())
    }

    pub fn outcome_code(&self) -> String {
        self.session.outcome().code().to_string()
    }

    /// `{code, title, message}` for an invalid outcome, `null` when valid.
    pub fn outcome_detail(&self) -> JsValue {
        match self.session.outcome() {
            blueprint::ValidationOutcome::Valid(_) => JsValue::NULL,
            blueprint::ValidationOutcome::Invalid(reason) => {
                let o = new_obj();
                set_kv(&o, "code", &JsValue::from_str(reason.code()));
                set_kv(&o, "title", &JsValue::from_str(reason.title()));
                set_kv(&o, "message", &JsValue::from_str(reason.message()));
                o.into()
            }
        }
    }

    // Interaction events. Each maps to one pure viewport transition.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.viewport.borrow_mut().pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.viewport.borrow_mut().pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.viewport.borrow_mut().pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.viewport.borrow_mut().pointer_leave();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.viewport.borrow_mut().wheel(delta_y);
    }

    pub fn wheel_res(&mut self, delta_y: f32) -> JsValue {
        if !delta_y.is_finite() {
            return error::non_finite("delta_y");
        }
        self.viewport.borrow_mut().wheel(delta_y);
        error::ok(JsValue::from_f64(self.zoom() as f64))
    }

    pub fn zoom_in(&mut self) {
        self.viewport.borrow_mut().zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.borrow_mut().zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.borrow_mut().reset();
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.borrow().zoom
    }

    pub fn dragging(&self) -> bool {
        self.viewport.borrow().dragging
    }

    /// Register the non-passive wheel listener on the render surface.
    /// Replaces any previous registration; `detach_wheel` (or dropping the
    /// view) removes it again.
    pub fn attach_wheel(&mut self, target: web_sys::EventTarget) -> bool {
        self.wheel = WheelHook::attach(target, self.viewport.clone());
        self.wheel.is_some()
    }

    pub fn detach_wheel(&mut self) {
        self.wheel = None;
    }
}
