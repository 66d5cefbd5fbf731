//! Layout and pagination API
//!
//! Entry points the game scene calls from its resize, orientation and
//! page-navigation handlers.

use wasm_bindgen::prelude::*;
use crate::layout::{label_font_size, PaginationPlan};
use crate::layout::font_size::text_length;
use crate::models::Viewport;
use crate::{wasm_info, wasm_log};
use super::helpers::{layout_mode_from_u8, serialize, timed, with_engine, with_monitor};

/// Classify a viewport into breakpoint and compactness flags
///
/// # Returns
/// `{ breakpoint, flags: { isMobileDevice, isLandscapeMobile, isTinyHeight }, isCompactMode }`
#[wasm_bindgen(js_name = classifyViewport)]
pub fn classify_viewport(width: f64, height: f64) -> Result<JsValue, JsValue> {
    let viewport = Viewport::from_css(width, height);
    let classification = with_engine(|engine| engine.classify(&viewport))?;
    serialize(&classification, "Classification serialization error")
}

/// Compute the card layout for the active page
///
/// # Parameters
/// - `width`, `height`: viewport size in CSS pixels
/// - `mode`: 0=mixed, 1=separated
/// - `visible_items`: pairs shown on the active page (centres separated frames)
///
/// # Returns
/// Layout object tagged with `mode: "mixed" | "separated"`
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout(width: f64, height: f64, mode: u8, visible_items: usize) -> Result<JsValue, JsValue> {
    let viewport = Viewport::from_css(width, height);
    let mode = layout_mode_from_u8(mode);

    let layout = timed("computeLayout", || {
        with_engine(|engine| engine.compute(&viewport, mode, visible_items))
    })?;

    wasm_log!(
        "computeLayout {}x{} {:?}: {} cols x {} rows ({})",
        viewport.width, viewport.height, mode, layout.cols(), layout.rows(), layout.breakpoint()
    );
    serialize(&layout, "Layout serialization error")
}

/// Split `total_pairs` into pages for the current viewport
///
/// # Returns
/// `{ itemsPerPage, totalPages, enablePagination, totalItems }`
#[wasm_bindgen(js_name = calculatePagination)]
pub fn calculate_pagination(total_pairs: usize, width: f64, height: f64, mode: u8) -> Result<JsValue, JsValue> {
    calculate_pagination_with_override(total_pairs, width, height, mode, None)
}

/// Like `calculatePagination`, but an explicit `items_per_page` (the
/// activity's `itemsPerPage` URL parameter) replaces the layout capacity
#[wasm_bindgen(js_name = calculatePaginationWithOverride)]
pub fn calculate_pagination_with_override(
    total_pairs: usize,
    width: f64,
    height: f64,
    mode: u8,
    items_per_page: Option<u32>,
) -> Result<JsValue, JsValue> {
    let viewport = Viewport::from_css(width, height);
    let mode = layout_mode_from_u8(mode);
    let forced = items_per_page.map(|n| n as usize);

    let plan = timed("calculatePagination", || {
        with_engine(|engine| engine.plan_pagination_with_override(total_pairs, &viewport, mode, forced))
    })?;

    wasm_info!(
        "calculatePagination: {} pairs, {} per page, {} pages, pagination {}",
        total_pairs,
        plan.items_per_page,
        plan.total_pages,
        if plan.enable_pagination { "on" } else { "off" }
    );
    serialize(&plan, "Pagination serialization error")
}

/// Item index range `[start, end)` shown on `page` (0-based, clamped)
#[wasm_bindgen(js_name = pageRange)]
pub fn page_range(total_pairs: usize, items_per_page: usize, page: usize) -> js_sys::Array {
    let range = PaginationPlan::new(total_pairs, items_per_page).page_range(page);
    let bounds = js_sys::Array::new();
    bounds.push(&JsValue::from(range.start as u32));
    bounds.push(&JsValue::from(range.end as u32));
    bounds
}

/// Font size for a definition label under a card of `card_height`
#[wasm_bindgen(js_name = labelFontSize)]
pub fn label_font_size_for_text(card_height: f32, text: &str) -> f32 {
    label_font_size(card_height, text_length(text))
}

/// Timing summary for all API calls since the last reset
#[wasm_bindgen(js_name = getPerformanceSummary)]
pub fn get_performance_summary() -> Result<JsValue, JsValue> {
    let summary = with_monitor(|monitor| monitor.summary())?;
    serialize(&summary, "Performance summary serialization error")
}

#[wasm_bindgen(js_name = resetPerformanceSummary)]
pub fn reset_performance_summary() -> Result<(), JsValue> {
    with_monitor(|monitor| monitor.clear())
}
