//! Mixed-mode grid layout
//!
//! One grid holds term cards with their definition labels underneath.
//! The column count is a two-valued switch on compactness; the row count is
//! whatever fits between the button zones.

use crate::models::{ButtonZones, CardSize, CompactnessFlags, GridLayout, Viewport};
use super::breakpoint::classify;
use super::font_size::{font_size_by_width, label_font_size};
use super::margins::{finite_or_zero, MarginConfig};

/// Columns in the mixed grid on compact viewports
pub const COMPACT_COLUMNS: usize = 5;

/// Columns in the mixed grid everywhere else
pub const REGULAR_COLUMNS: usize = 3;

/// Baseline card height used for capacity planning
pub const CARD_HEIGHT_BASELINE: f32 = 67.0;

/// Height reserved for the definition label under each card
pub const LABEL_HEIGHT: f32 = 20.0;

/// Vertical spacing as a share of the available height
pub const CARD_SPACING_RATIO: f32 = 0.02;
pub const CARD_SPACING_MIN: f32 = 5.0;
pub const CARD_SPACING_MAX: f32 = 20.0;

/// Mixed-mode column strategy: denser grid when compact
pub fn mixed_columns(flags: &CompactnessFlags) -> usize {
    if flags.is_compact_mode() {
        COMPACT_COLUMNS
    } else {
        REGULAR_COLUMNS
    }
}

/// Height between the top and bottom button zones
pub fn available_grid_height(viewport: &Viewport, zones: &ButtonZones) -> f32 {
    viewport.height_f32() - zones.total()
}

/// Row gap: 2% of the available height, clamped to 5..=20 px
pub fn card_spacing_for_height(available_height: f32) -> f32 {
    let spacing = finite_or_zero(available_height) * CARD_SPACING_RATIO;
    spacing.clamp(CARD_SPACING_MIN, CARD_SPACING_MAX)
}

/// Rows of card + label units that fit; never less than 1
pub fn rows_that_fit(available_height: f32, spacing: f32) -> usize {
    let unit = CARD_HEIGHT_BASELINE + LABEL_HEIGHT + spacing;
    let rows = ((finite_or_zero(available_height) - spacing) / unit).floor();
    if rows.is_finite() && rows >= 1.0 {
        rows as usize
    } else {
        1
    }
}

/// Row count used for page capacity in both layout modes
pub fn max_rows(viewport: &Viewport, flags: &CompactnessFlags) -> usize {
    let zones = ButtonZones::for_compactness(flags);
    let available = available_grid_height(viewport, &zones);
    rows_that_fit(available, card_spacing_for_height(available))
}

/// Compute the mixed grid for `viewport`
pub fn compute_mixed_layout(viewport: &Viewport, config: &MarginConfig) -> GridLayout {
    let classification = classify(viewport);
    let flags = classification.flags;

    let cols = mixed_columns(&flags);
    let zones = ButtonZones::for_compactness(&flags);
    let available_height = available_grid_height(viewport, &zones);
    let spacing = card_spacing_for_height(available_height);
    let rows = rows_that_fit(available_height, spacing);

    let usable_width = viewport.width_f32()
        - 2.0 * config.container.side_px
        - (cols - 1) as f32 * spacing;
    let card_width = (usable_width / cols as f32).max(1.0);

    log::debug!(
        "mixed layout {}x{}: {} cols x {} rows, spacing {:.1}, available {:.0}",
        viewport.width, viewport.height, cols, rows, spacing, available_height
    );

    GridLayout {
        breakpoint: classification.breakpoint,
        cols,
        rows,
        card_size: CardSize { width: card_width, height: CARD_HEIGHT_BASELINE },
        font_size_px: font_size_by_width(viewport.width),
        label_font_size_px: label_font_size(CARD_HEIGHT_BASELINE, 0),
        card_spacing_px: spacing,
        button_zones: zones,
        available_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breakpoint;

    fn layout(width: u32, height: u32) -> GridLayout {
        compute_mixed_layout(&Viewport::new(width, height), &MarginConfig::default())
    }

    #[test]
    fn test_compact_phone_portrait() {
        let grid = layout(375, 667);
        assert_eq!(grid.breakpoint, Breakpoint::Mobile);
        assert_eq!(grid.cols, 5);
        // available 567, spacing 11.34, unit 98.34 -> 5 rows
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.capacity(), 25);
        assert_eq!(grid.button_zones.top_px, 50.0);
    }

    #[test]
    fn test_landscape_phone() {
        let grid = layout(812, 375);
        assert_eq!(grid.cols, 5);
        // available 275, spacing 5.5, unit 92.5 -> 2 rows
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.capacity(), 10);
    }

    #[test]
    fn test_regular_desktop() {
        let grid = layout(1440, 900);
        assert_eq!(grid.breakpoint, Breakpoint::Wide);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.button_zones.bottom_px, 60.0);
        // available 780, spacing 15.6, unit 102.6 -> 7 rows
        assert_eq!(grid.rows, 7);
        assert!((grid.card_spacing_px - 15.6).abs() < 1e-4);
    }

    #[test]
    fn test_spacing_clamped() {
        assert_eq!(card_spacing_for_height(0.0), 5.0);
        assert_eq!(card_spacing_for_height(-100.0), 5.0);
        assert_eq!(card_spacing_for_height(5000.0), 20.0);
        assert_eq!(card_spacing_for_height(f32::NAN), 5.0);
    }

    #[test]
    fn test_degenerate_viewport_has_one_row() {
        let grid = layout(0, 0);
        assert_eq!(grid.cols, 5);
        assert_eq!(grid.rows, 1);
        assert!(grid.card_size.width >= 1.0);
        assert!(grid.available_height < 0.0);
    }

    #[test]
    fn test_capacity_at_least_cols() {
        for (w, h) in [(1, 1), (320, 480), (768, 1024), (2560, 1440), (400, 120)] {
            let grid = layout(w, h);
            assert!(grid.capacity() >= grid.cols);
        }
    }

    #[test]
    fn test_cols_two_valued() {
        for (w, h) in [(375, 667), (812, 375), (1024, 768), (1920, 1080), (1280, 350)] {
            let grid = layout(w, h);
            assert!(grid.cols == COMPACT_COLUMNS || grid.cols == REGULAR_COLUMNS);
        }
    }
}
