//! Margin and spacing calculation
//!
//! `MarginConfig` is the one piece of layout state that outlives a single
//! resize event. It is tunable at runtime through dotted key paths
//! (`"container.topRatio"`) so margins can be adjusted live while debugging.
//!
//! The free functions here are density rules shared by both layout modes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::LayoutError;

/// Density rules never shrink a base value below this share of it
pub const MIN_DENSITY_FACTOR: f32 = 0.25;

/// Item count up to which margins keep their full base value
pub const MARGIN_KNEE_ITEMS: usize = 4;

/// Item count up to which spacing keeps its full base value
pub const SPACING_KNEE_ITEMS: usize = 6;

/// Default minimum card height for `fill_spacing`
pub const DEFAULT_MIN_CARD_HEIGHT: f32 = 60.0;

/// Container margins as ratios of the container height
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMargins {
    pub top_ratio: f32,
    pub bottom_ratio: f32,
    pub side_px: f32,
}

/// Padding inside the frame drawn around a column of cards
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FramePadding {
    pub padding: f32,
    pub top_padding: f32,
}

/// Bounds for the gap between stacked cards
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSpacing {
    pub min_spacing: f32,
    pub max_spacing: f32,
}

/// Fixed band at the top of the scene kept clear for the timer/header
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBand {
    pub reserved_top_px: f32,
}

/// Tunable margin configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarginConfig {
    pub container: ContainerMargins,
    pub frame: FramePadding,
    pub card: CardSpacing,
    pub header: HeaderBand,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            container: ContainerMargins {
                top_ratio: 0.1,
                bottom_ratio: 0.1,
                side_px: 20.0,
            },
            frame: FramePadding {
                padding: 10.0,
                top_padding: 15.0,
            },
            card: CardSpacing {
                min_spacing: 5.0,
                max_spacing: 20.0,
            },
            header: HeaderBand {
                reserved_top_px: 50.0,
            },
        }
    }
}

/// Pixel margins for a concrete container height
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub container_top_px: f32,
    pub container_bottom_px: f32,
    pub container_side_px: f32,
    pub frame_padding_px: f32,
    pub frame_top_padding_px: f32,
    pub card_min_spacing_px: f32,
    pub card_max_spacing_px: f32,
}

impl MarginConfig {
    /// Parse a (possibly partial) JSON preset; missing groups keep defaults
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that stopped being finite once stored as `f32`
    /// (e.g. `1e300` narrows to infinity)
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("container.topRatio", self.container.top_ratio),
            ("container.bottomRatio", self.container.bottom_ratio),
            ("container.sidePx", self.container.side_px),
            ("frame.padding", self.frame.padding),
            ("frame.topPadding", self.frame.top_padding),
            ("card.minSpacing", self.card.min_spacing),
            ("card.maxSpacing", self.card.max_spacing),
            ("header.reservedTopPx", self.header.reserved_top_px),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((path, value)) => Err(LayoutError::NonFinite {
                path: path.to_string(),
                value: f64::from(*value),
            }),
            None => Ok(()),
        }
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }

    /// Scale the ratios to a container of `container_height` px
    pub fn margins(&self, container_height: f32) -> Margins {
        let h = finite_or_zero(container_height);
        Margins {
            container_top_px: h * self.container.top_ratio,
            container_bottom_px: h * self.container.bottom_ratio,
            container_side_px: self.container.side_px,
            frame_padding_px: self.frame.padding,
            frame_top_padding_px: self.frame.top_padding,
            card_min_spacing_px: self.card.min_spacing,
            card_max_spacing_px: self.card.max_spacing,
        }
    }

    /// Height left after the top and bottom container margins.
    ///
    /// Ratios summing to 1 or more yield zero or negative; callers clamp rows.
    pub fn available_height(&self, container_height: f32) -> f32 {
        let h = finite_or_zero(container_height);
        h - h * self.container.top_ratio - h * self.container.bottom_ratio
    }

    /// Gap between stacked cards that spreads `item_count` cards of
    /// `min_card_height` over `available_height`, clamped to the card spacing
    /// bounds.
    pub fn fill_spacing(&self, available_height: f32, item_count: usize, min_card_height: f32) -> f32 {
        let available = finite_or_zero(available_height);
        let gaps = item_count.saturating_sub(1).max(1) as f32;
        let spare = available - item_count as f32 * finite_or_zero(min_card_height);
        clamp_spacing(spare / gaps, self.card.min_spacing, self.card.max_spacing)
    }

    /// Frame around a column: top padding, the stacked cards, bottom padding
    pub fn frame_height(&self, item_count: usize, card_height: f32, spacing: f32) -> f32 {
        self.frame.top_padding + total_card_height(item_count, card_height, spacing) + self.frame.padding
    }

    /// Top edge of the band cards may occupy: below the header band and the
    /// container top margin, whichever is lower on screen
    pub fn band_top(&self, container_height: f32) -> f32 {
        let margins = self.margins(container_height);
        self.header.reserved_top_px.max(margins.container_top_px)
    }

    pub fn band_bottom(&self, container_height: f32) -> f32 {
        let h = finite_or_zero(container_height);
        h - self.margins(h).container_bottom_px
    }

    /// Vertical centre of the button-free band
    pub fn frame_center_y(&self, container_height: f32) -> f32 {
        let top = self.band_top(container_height);
        let bottom = self.band_bottom(container_height).max(top);
        top + (bottom - top) / 2.0
    }

    /// Y of the first card so the dual-panel frame is centred in the band.
    ///
    /// A frame taller than the band is pinned to the band top instead of
    /// sliding under the header.
    pub fn top_offset_for_separated(
        &self,
        container_height: f32,
        item_count: usize,
        card_height: f32,
        spacing: f32,
    ) -> f32 {
        let frame_height = self.frame_height(item_count, card_height, spacing);
        let offset = self.frame_center_y(container_height) - frame_height / 2.0;
        offset.max(self.band_top(container_height))
    }

    /// Set a numeric field by dotted camelCase path, e.g. `"card.maxSpacing"`
    pub fn set_by_path(&mut self, path: &str, value: f64) -> Result<(), LayoutError> {
        if !value.is_finite() {
            return Err(LayoutError::NonFinite { path: path.to_string(), value });
        }

        let mut tree = serde_json::to_value(&*self)?;
        let slot = path
            .split('.')
            .try_fold(&mut tree, |node, segment| node.get_mut(segment))
            .ok_or_else(|| LayoutError::UnknownKey(path.to_string()))?;

        if !slot.is_number() {
            return Err(LayoutError::NotNumeric(path.to_string()));
        }
        *slot = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| LayoutError::NonFinite { path: path.to_string(), value })?;

        let updated: Self = serde_json::from_value(tree)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

/// Margin for `item_count` items; non-increasing, floored at 25% of base
pub fn dynamic_margin(base: f32, item_count: usize) -> f32 {
    scale_by_density(base, item_count, MARGIN_KNEE_ITEMS)
}

/// Spacing for `item_count` items; non-increasing, floored at 25% of base
pub fn dynamic_spacing(base: f32, item_count: usize) -> f32 {
    scale_by_density(base, item_count, SPACING_KNEE_ITEMS)
}

fn scale_by_density(base: f32, item_count: usize, knee: usize) -> f32 {
    let base = finite_or_zero(base).max(0.0);
    if item_count <= knee {
        return base;
    }
    let scaled = base * knee as f32 / item_count as f32;
    scaled.max(base * MIN_DENSITY_FACTOR)
}

/// Rows the separated frame stacks for `item_count` cards.
///
/// The tiers are fixed by existing fixtures: up to 5 items stack one per row,
/// 6 to 10 use two rows, more than 10 use two per row.
pub fn stacked_rows(item_count: usize) -> usize {
    match item_count {
        0..=5 => item_count,
        6..=10 => 2,
        _ => (item_count + 1) / 2,
    }
}

/// Height of the stacked cards including the gaps between rows
pub fn total_card_height(item_count: usize, card_height: f32, spacing: f32) -> f32 {
    let rows = stacked_rows(item_count);
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * card_height + (rows - 1) as f32 * spacing
}

fn clamp_spacing(value: f32, min: f32, max: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}
