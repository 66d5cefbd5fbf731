//! Responsive Layout Engine
//!
//! This module computes card grids, dual-panel positions and page splits
//! for the match-up game. Every calculation is a pure function of the
//! viewport, the item count and the margin configuration.

pub mod breakpoint;
pub mod font_size;
pub mod margins;
pub mod grid;
pub mod separated;
pub mod pagination;
pub mod engine;

pub use breakpoint::{classify, breakpoint_for_width, compactness};
pub use font_size::{font_size_by_width, label_font_size};
pub use margins::{dynamic_margin, dynamic_spacing, total_card_height, MarginConfig, Margins};
pub use grid::{compute_mixed_layout, mixed_columns};
pub use separated::{compute_separated_layout, separated_columns};
pub use pagination::{PageCursor, PaginationPlan};
pub use engine::LayoutEngine;
