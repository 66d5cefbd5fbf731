//! Match-up layout WASM API
//!
//! This module provides the JavaScript-facing API for the layout engine.
//!
//! # Module Structure
//!
//! - `helpers`: shared engine instance, serialization, logging, argument conversion
//! - `layout`: viewport classification, layout and pagination
//! - `config`: runtime margin tuning

pub mod helpers;
pub mod layout;
pub mod config;

pub use layout::{
    classify_viewport,
    compute_layout,
    calculate_pagination,
    calculate_pagination_with_override,
    page_range,
    label_font_size_for_text,
    get_performance_summary,
    reset_performance_summary,
};
pub use config::{
    update_margin_config,
    reset_margin_config,
    load_margin_config,
    load_margin_config_json,
    get_margin_config,
    get_margin_config_debug,
    get_margins,
};
