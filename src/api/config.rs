//! Margin configuration API
//!
//! Developer-facing tuning hooks. Changes apply to every subsequent layout
//! computed by the shared engine.

use wasm_bindgen::prelude::*;
use crate::layout::MarginConfig;
use crate::{wasm_info, wasm_warn};
use super::helpers::{deserialize, serialize, to_js_error, with_engine};

/// Set one numeric margin setting by dotted path, e.g. `"container.topRatio"`
#[wasm_bindgen(js_name = updateMarginConfig)]
pub fn update_margin_config(path: &str, value: f64) -> Result<(), JsValue> {
    with_engine(|engine| engine.update_margin(path, value))?.map_err(to_js_error)?;
    wasm_info!("updateMarginConfig: {} = {}", path, value);
    Ok(())
}

#[wasm_bindgen(js_name = resetMarginConfig)]
pub fn reset_margin_config() -> Result<(), JsValue> {
    with_engine(|engine| engine.reset_config())?;
    wasm_warn!("Margin config reset to defaults");
    Ok(())
}

/// Replace the margin configuration from a JSON preset string
#[wasm_bindgen(js_name = loadMarginConfigJson)]
pub fn load_margin_config_json(json: &str) -> Result<(), JsValue> {
    let config = MarginConfig::from_json(json).map_err(to_js_error)?;
    with_engine(|engine| engine.replace_config(config))?.map_err(to_js_error)
}

/// Replace the margin configuration from a plain JavaScript object
#[wasm_bindgen(js_name = loadMarginConfig)]
pub fn load_margin_config(config_js: JsValue) -> Result<(), JsValue> {
    let config: MarginConfig = deserialize(config_js, "Margin config deserialization error")?;
    with_engine(|engine| engine.replace_config(config))?.map_err(to_js_error)
}

/// Current configuration as a JavaScript object
#[wasm_bindgen(js_name = getMarginConfig)]
pub fn get_margin_config() -> Result<JsValue, JsValue> {
    let config = with_engine(|engine| engine.config().clone())?;
    serialize(&config, "Margin config serialization error")
}

/// Pretty-printed configuration for console debugging
#[wasm_bindgen(js_name = getMarginConfigDebug)]
pub fn get_margin_config_debug() -> Result<String, JsValue> {
    with_engine(|engine| engine.config_debug())
}

/// Pixel margins for a container of `container_height`
#[wasm_bindgen(js_name = getMargins)]
pub fn get_margins(container_height: f64) -> Result<JsValue, JsValue> {
    let margins = with_engine(|engine| engine.margins(container_height as f32))?;
    serialize(&margins, "Margins serialization error")
}
