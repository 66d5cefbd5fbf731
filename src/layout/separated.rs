//! Separated-mode dual-panel layout
//!
//! Term cards stack in a left frame, definition cards in a right frame.
//! Unlike the mixed grid, the column count grows continuously with width
//! since each panel must fit proportionally sized cards on its own.

use crate::models::{ButtonZones, CardSize, ContainerPositions, Point, SeparatedLayout, Viewport};
use super::breakpoint::classify;
use super::font_size::font_size_by_width;
use super::grid::max_rows;
use super::margins::{stacked_rows, MarginConfig};

/// Side margin subtracted twice before counting columns
pub const SIDE_MARGIN: u32 = 20;

/// Narrowest card the column count allows for
pub const MIN_COLUMN_WIDTH: u32 = 150;

pub const CARD_WIDTH_RATIO: f32 = 0.2;
pub const CARD_WIDTH_MIN: f32 = 120.0;
pub const CARD_WIDTH_MAX: f32 = 250.0;

pub const CARD_HEIGHT_RATIO: f32 = 0.1;
pub const CARD_HEIGHT_MIN: f32 = 40.0;
pub const CARD_HEIGHT_MAX: f32 = 80.0;

/// Separated-mode column strategy: one column per 150px of usable width
pub fn separated_columns(width: u32) -> usize {
    let usable = width.saturating_sub(2 * SIDE_MARGIN);
    ((usable / MIN_COLUMN_WIDTH) as usize).max(1)
}

/// Card size for a panel: proportional to the viewport, within fixed bounds
pub fn panel_card_size(viewport: &Viewport, available_height: f32) -> CardSize {
    CardSize {
        width: (viewport.width_f32() * CARD_WIDTH_RATIO).clamp(CARD_WIDTH_MIN, CARD_WIDTH_MAX),
        height: (available_height.max(0.0) * CARD_HEIGHT_RATIO).clamp(CARD_HEIGHT_MIN, CARD_HEIGHT_MAX),
    }
}

/// Anchors for the two panels, mirrored about the horizontal centre
pub fn container_positions(viewport: &Viewport, card_width: f32, side_px: f32, top_y: f32) -> ContainerPositions {
    let inset = side_px + card_width / 2.0;
    ContainerPositions {
        left: Point { x: inset, y: top_y },
        right: Point { x: viewport.width_f32() - inset, y: top_y },
    }
}

/// Compute the dual-panel layout for `visible_items` pairs on the active page
pub fn compute_separated_layout(
    viewport: &Viewport,
    config: &MarginConfig,
    visible_items: usize,
) -> SeparatedLayout {
    let classification = classify(viewport);
    let flags = classification.flags;

    let cols = separated_columns(viewport.width);
    let rows = max_rows(viewport, &flags);

    let height = viewport.height_f32();
    let available_height = config.available_height(height);
    let card_size = panel_card_size(viewport, available_height);

    let stacked = stacked_rows(visible_items).max(1);
    let spacing = config.fill_spacing(available_height, stacked, card_size.height);
    let top_y = config.top_offset_for_separated(height, visible_items, card_size.height, spacing);
    let positions = container_positions(viewport, card_size.width, config.container.side_px, top_y);

    log::debug!(
        "separated layout {}x{}: {} cols x {} rows, card {:.0}x{:.0}, top {:.1}",
        viewport.width, viewport.height, cols, rows, card_size.width, card_size.height, top_y
    );

    SeparatedLayout {
        breakpoint: classification.breakpoint,
        cols,
        rows,
        card_size,
        card_spacing_px: spacing,
        font_size_px: font_size_by_width(viewport.width),
        positions,
        frame_height_px: config.frame_height(visible_items, card_size.height, spacing),
        button_zones: ButtonZones::for_compactness(&flags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u32, height: u32, items: usize) -> SeparatedLayout {
        compute_separated_layout(&Viewport::new(width, height), &MarginConfig::default(), items)
    }

    #[test]
    fn test_columns_grow_with_width() {
        assert_eq!(separated_columns(0), 1);
        assert_eq!(separated_columns(189), 1);
        assert_eq!(separated_columns(340), 2);
        assert_eq!(separated_columns(768), 4);
        assert_eq!(separated_columns(1920), 12);

        let mut last = 0;
        for width in (0..4000).step_by(13) {
            let cols = separated_columns(width);
            assert!(cols >= last);
            last = cols;
        }
    }

    #[test]
    fn test_tablet_portrait_capacity() {
        let panels = layout(768, 1024, 10);
        assert_eq!(panels.cols, 4);
        // available 904, spacing 18.08, unit 105.08 -> 8 rows
        assert_eq!(panels.rows, 8);
        assert_eq!(panels.capacity(), 32);
    }

    #[test]
    fn test_positions_symmetric() {
        let panels = layout(1024, 768, 5);
        let centre = 1024.0 / 2.0;
        let left_gap = centre - panels.positions.left.x;
        let right_gap = panels.positions.right.x - centre;
        assert!((left_gap - right_gap).abs() < 1e-3);
        assert_eq!(panels.positions.left.y, panels.positions.right.y);
        // side 20 + half of 204.8 wide cards
        assert!((panels.positions.left.x - 122.4).abs() < 1e-3);
    }

    #[test]
    fn test_anchor_below_header_band() {
        let config = MarginConfig::default();
        for (w, h, n) in [(375, 667, 5), (812, 375, 20), (1920, 1080, 3), (300, 200, 12)] {
            let panels = layout(w, h, n);
            assert!(panels.positions.left.y >= config.band_top(h as f32));
        }
    }

    #[test]
    fn test_card_size_bounds() {
        let small = layout(320, 300, 4);
        assert_eq!(small.card_size.width, CARD_WIDTH_MIN);
        assert_eq!(small.card_size.height, CARD_HEIGHT_MIN);

        let huge = layout(3000, 2000, 4);
        assert_eq!(huge.card_size.width, CARD_WIDTH_MAX);
        assert_eq!(huge.card_size.height, CARD_HEIGHT_MAX);
    }

    #[test]
    fn test_single_item_frame() {
        let panels = layout(1024, 768, 1);
        let config = MarginConfig::default();
        let expected = config.frame.top_padding + panels.card_size.height + config.frame.padding;
        assert!((panels.frame_height_px - expected).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_viewport() {
        let panels = layout(0, 0, 0);
        assert_eq!(panels.cols, 1);
        assert_eq!(panels.rows, 1);
        assert_eq!(panels.capacity(), 1);
        assert!(panels.positions.left.y.is_finite());
    }
}
