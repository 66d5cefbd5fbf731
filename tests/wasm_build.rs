//! WASM build test
//!
//! This module tests that the WASM module can be built and the exported
//! API round-trips values through JavaScript.

#![cfg(target_arch = "wasm32")]

use matchup_layout_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get_number(value: &JsValue, key: &str) -> f64 {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::NAN)
}

#[wasm_bindgen_test]
fn test_classify_viewport() {
    let result = classify_viewport(375.0, 667.0).unwrap();
    let breakpoint = js_sys::Reflect::get(&result, &JsValue::from_str("breakpoint")).unwrap();
    assert_eq!(breakpoint.as_string().as_deref(), Some("mobile"));
    let orientation = js_sys::Reflect::get(&result, &JsValue::from_str("orientation")).unwrap();
    assert_eq!(orientation.as_string().as_deref(), Some("portrait"));
}

#[wasm_bindgen_test]
fn test_calculate_pagination() {
    let plan = calculate_pagination(30, 375.0, 667.0, 0).unwrap();
    assert_eq!(get_number(&plan, "itemsPerPage"), 25.0);
    assert_eq!(get_number(&plan, "totalPages"), 2.0);
}

#[wasm_bindgen_test]
fn test_pagination_override() {
    let plan = calculate_pagination_with_override(20, 375.0, 667.0, 0, Some(7)).unwrap();
    assert_eq!(get_number(&plan, "itemsPerPage"), 7.0);
    assert_eq!(get_number(&plan, "totalPages"), 3.0);
}

#[wasm_bindgen_test]
fn test_compute_layout_unknown_mode_falls_back() {
    let layout = compute_layout(1024.0, 768.0, 42, 10).unwrap();
    let mode = js_sys::Reflect::get(&layout, &JsValue::from_str("mode")).unwrap();
    assert_eq!(mode.as_string().as_deref(), Some("mixed"));
    assert_eq!(get_number(&layout, "cols"), 3.0);
}

#[wasm_bindgen_test]
fn test_page_range() {
    let range = page_range(30, 25, 5);
    assert_eq!(range.get(0).as_f64(), Some(25.0));
    assert_eq!(range.get(1).as_f64(), Some(30.0));
}

#[wasm_bindgen_test]
fn test_margin_config_update_and_reset() {
    assert!(update_margin_config("card.maxSpacing", 30.0).is_ok());
    assert!(update_margin_config("card.unknown", 30.0).is_err());

    let dump = get_margin_config_debug().unwrap();
    assert!(dump.contains("\"maxSpacing\": 30.0"));

    reset_margin_config().unwrap();
    let dump = get_margin_config_debug().unwrap();
    assert!(dump.contains("\"maxSpacing\": 20.0"));
}

#[wasm_bindgen_test]
fn test_oversized_margin_rejected() {
    assert!(update_margin_config("container.topRatio", 1e300).is_err());
    assert!(load_margin_config_json(r#"{"frame": {"padding": 1e300}}"#).is_err());
    let dump = get_margin_config_debug().unwrap();
    assert!(!dump.contains("inf"));
}

#[wasm_bindgen_test]
fn test_performance_summary() {
    calculate_pagination(10, 800.0, 600.0, 1).unwrap();
    let summary = get_performance_summary().unwrap();
    assert!(js_sys::Array::is_array(&summary));
}
