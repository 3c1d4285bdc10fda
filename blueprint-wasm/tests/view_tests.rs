use blueprint_wasm::BlueprintView;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED)
}

fn canonical_input() -> JsValue {
    serde_wasm_bindgen::to_value(&serde_json::json!({
        "vertices": [
            {"x": 0.0, "y": 0.0},
            {"x": 100.0, "y": 0.0},
            {"x": 100.0, "y": 50.0},
        ],
        "dimensions": {"width": 100.0, "height": 50.0},
        "scale": 1.0
    }))
    .unwrap()
}

#[wasm_bindgen_test]
fn canonical_object_input_renders() {
    let mut view = BlueprintView::new(None, None);
    assert!(view.set_input(canonical_input()));
    assert_eq!(view.outcome_code(), "valid");
    view.set_phase("complete");
    let svg = view.svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("url(#bp-grid)"));
}

#[wasm_bindgen_test]
fn markup_string_input_renders() {
    let mut view = BlueprintView::new(None, None);
    let markup = "<svg><path d=\"M 0 0 L 100 0 L 100 50 L 0 50 Z\"/></svg>";
    assert!(view.set_input(JsValue::from_str(markup)));
    assert_eq!(view.outcome_code(), "valid");
}

#[wasm_bindgen_test]
fn null_input_is_no_data_with_detail() {
    let mut view = BlueprintView::new(None, None);
    view.set_input(JsValue::NULL);
    assert_eq!(view.outcome_code(), "no-data");
    let detail = view.outcome_detail();
    assert_eq!(get(&detail, "code").as_string().as_deref(), Some("no-data"));
    assert!(get(&detail, "title").as_string().is_some());
    assert!(get(&detail, "message").as_string().is_some());
}

#[wasm_bindgen_test]
fn unchanged_input_reports_no_recompute() {
    let mut view = BlueprintView::new(None, None);
    assert!(view.set_input(canonical_input()));
    assert!(!view.set_input(canonical_input()));
}

#[wasm_bindgen_test]
fn wheel_and_buttons_stay_clamped() {
    let mut view = BlueprintView::new(None, None);
    for _ in 0..100 {
        view.wheel(120.0);
    }
    assert_eq!(view.zoom(), 0.5);
    for _ in 0..100 {
        view.zoom_in();
    }
    assert_eq!(view.zoom(), 3.0);
    view.reset_view();
    assert_eq!(view.zoom(), 1.0);
}

#[wasm_bindgen_test]
fn wheel_res_rejects_non_finite_deltas() {
    let mut view = BlueprintView::new(None, None);
    let r = view.wheel_res(f32::NAN);
    assert_eq!(get(&r, "ok").as_bool(), Some(false));
    let code = get(&get(&r, "error"), "code");
    assert_eq!(code.as_string().as_deref(), Some("non_finite"));
}

#[wasm_bindgen_test]
fn unknown_phase_keeps_the_previous_one() {
    let mut view = BlueprintView::new(None, None);
    assert!(view.set_phase("processing"));
    assert!(!view.set_phase("paused"));
    assert_eq!(view.phase(), "processing");
    let r = view.set_phase_res("paused");
    assert_eq!(get(&r, "ok").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn processing_phase_renders_the_placeholder() {
    let mut view = BlueprintView::new(None, None);
    view.set_input(canonical_input());
    view.set_phase("processing");
    assert!(view.svg().contains("Processing blueprint"));
}

#[wasm_bindgen_test]
fn pointer_drag_pans_the_content_group() {
    let mut view = BlueprintView::new(None, None);
    view.set_input(canonical_input());
    view.pointer_down(10.0, 10.0);
    assert!(view.dragging());
    view.pointer_move(25.0, 16.0);
    view.pointer_up();
    assert!(view.svg().contains("translate(15px, 6px)"));
}

#[wasm_bindgen_test]
fn fallback_dimensions_shape_placeholder_viewbox() {
    let mut view = BlueprintView::new(Some(640.0), Some(480.0));
    view.set_input(JsValue::NULL);
    view.set_phase("complete");
    assert!(view.svg().contains("viewBox=\"0 0 640 480\""));
}
