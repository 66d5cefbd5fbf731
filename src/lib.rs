//! Match-Up Layout WASM Module
//!
//! Responsive layout and pagination engine for the match-up card game.
//! Given a viewport, a layout mode and a number of term/definition pairs it
//! computes card grids or dual-panel positions and splits the pairs into
//! pages, recomputed on every resize or rotation.

pub mod error;
pub mod models;
pub mod layout;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use error::LayoutError;
pub use models::viewport::*;
pub use models::layout::*;
pub use layout::{LayoutEngine, MarginConfig, PageCursor, PaginationPlan};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when the host page already installed a logger
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Match-up layout WASM module initialized");
}
