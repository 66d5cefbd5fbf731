//! Viewport snapshot and the values derived from it
//!
//! A `Viewport` is recreated for every resize/orientation event pushed by the
//! windowing layer. Everything else in this module is derived from it and is
//! never stored between events.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Immutable viewport snapshot in CSS pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a viewport from raw JavaScript numbers.
    ///
    /// NaN, infinities and negative values collapse to 0 so the layout code
    /// only ever sees finite, non-negative dimensions.
    pub fn from_css(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Width / height, or 0.0 for a zero-height viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

fn sanitize_dimension(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.round() as u32
    }
}

/// Named viewport-width bucket
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Breakpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Wide => "wide",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Conditions that force the denser compact layouts
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompactnessFlags {
    /// Narrow viewport (phone width)
    pub is_mobile_device: bool,

    /// Landscape phone: wider than tall with a short height
    pub is_landscape_mobile: bool,

    /// Very short viewport regardless of width
    pub is_tiny_height: bool,
}

impl CompactnessFlags {
    pub fn is_compact_mode(&self) -> bool {
        self.is_mobile_device || self.is_landscape_mobile || self.is_tiny_height
    }
}

/// Card arrangement chosen by the activity, never derived from the viewport
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum LayoutMode {
    /// Single grid mingling term and definition cards
    #[default]
    Mixed = 0,

    /// Terms in the left column, definitions in the right column
    Separated = 1,
}

impl TryFrom<u8> for LayoutMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LayoutMode::Mixed),
            1 => Ok(LayoutMode::Separated),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_css_rejects_non_finite() {
        assert_eq!(Viewport::from_css(f64::NAN, 600.0), Viewport::new(0, 600));
        assert_eq!(Viewport::from_css(f64::INFINITY, -3.0), Viewport::new(0, 0));
        assert_eq!(Viewport::from_css(375.4, 666.6), Viewport::new(375, 667));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Viewport::new(375, 667).orientation(), Orientation::Portrait);
        assert_eq!(Viewport::new(812, 375).orientation(), Orientation::Landscape);
        // Square counts as portrait
        assert_eq!(Viewport::new(500, 500).orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_aspect_ratio_zero_height() {
        assert_eq!(Viewport::new(100, 0).aspect_ratio(), 0.0);
        assert!((Viewport::new(1920, 1080).aspect_ratio() - 1.777).abs() < 0.01);
    }

    #[test]
    fn test_compact_mode_is_or_of_flags() {
        let none = CompactnessFlags::default();
        assert!(!none.is_compact_mode());

        let tiny = CompactnessFlags { is_tiny_height: true, ..Default::default() };
        assert!(tiny.is_compact_mode());
    }

    #[test]
    fn test_layout_mode_parsing() {
        assert_eq!(LayoutMode::try_from(0u8), Ok(LayoutMode::Mixed));
        assert_eq!(LayoutMode::try_from(1u8), Ok(LayoutMode::Separated));
        assert_eq!(LayoutMode::try_from(7u8), Err(7));
        assert_eq!(LayoutMode::default(), LayoutMode::Mixed);
    }

    #[test]
    fn test_layout_mode_serializes_as_number() {
        let json = serde_json::to_string(&LayoutMode::Separated).unwrap();
        assert_eq!(json, "1");
    }
}
