use crate::interop::{new_obj, set_kv};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err(
        "non_finite",
        format!("parameter '{}' must be finite", param),
        Some(d.into()),
    )
}

#[inline]
pub fn invalid_phase(got: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "got", &JsValue::from_str(got));
    err(
        "invalid_phase",
        "phase must be one of capturing, processing, complete, failed",
        Some(d.into()),
    )
}
