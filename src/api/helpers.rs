//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization, console logging,
//! engine access and argument conversion across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;
use lazy_static::lazy_static;
use crate::layout::LayoutEngine;
use crate::models::LayoutMode;
use crate::utils::PerformanceMonitor;

// ============================================================================
// Shared State
// ============================================================================

lazy_static! {
    /// Process-wide engine; the mutex serializes margin tuning with layout
    static ref ENGINE: Mutex<LayoutEngine> = Mutex::new(LayoutEngine::new());

    static ref MONITOR: Mutex<PerformanceMonitor> = Mutex::new(PerformanceMonitor::new());
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        wasm_error!("{}: {}", error_context, e);
        JsValue::from_str(&format!("{}: {}", error_context, e))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        wasm_error!("{}: {}", error_context, e);
        JsValue::from_str(&format!("{}: {}", error_context, e))
    })
}

/// Log an error and convert it for the JavaScript caller
pub fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    let msg = err.to_string();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Engine Access
// ============================================================================

/// Run `f` with the shared engine locked
pub fn with_engine<R>(f: impl FnOnce(&mut LayoutEngine) -> R) -> Result<R, JsValue> {
    let mut engine = ENGINE
        .lock()
        .map_err(|e| to_js_error(format!("Failed to lock layout engine: {}", e)))?;
    Ok(f(&mut engine))
}

/// Run `f` and record how long it took under `operation`
pub fn timed<R>(operation: &str, f: impl FnOnce() -> R) -> R {
    let start = now_ms();
    let result = f();
    let elapsed = now_ms() - start;

    match MONITOR.lock() {
        Ok(mut monitor) => monitor.record_measurement(operation, elapsed),
        Err(e) => log_warn(&format!("Performance monitor unavailable: {}", e)),
    }
    result
}

pub fn with_monitor<R>(f: impl FnOnce(&mut PerformanceMonitor) -> R) -> Result<R, JsValue> {
    let mut monitor = MONITOR
        .lock()
        .map_err(|e| to_js_error(format!("Failed to lock performance monitor: {}", e)))?;
    Ok(f(&mut monitor))
}

/// High-resolution timestamp, falling back to Date.now() outside a window
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

// ============================================================================
// Argument Conversion
// ============================================================================

/// Convert layout mode number to enum (0=Mixed, 1=Separated)
pub fn layout_mode_from_u8(mode: u8) -> LayoutMode {
    LayoutMode::try_from(mode).unwrap_or_else(|unknown| {
        log_warn(&format!("Unknown layout mode {}, falling back to mixed", unknown));
        LayoutMode::Mixed
    })
}
