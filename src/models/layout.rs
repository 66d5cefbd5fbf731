//! Layout output structures
//!
//! These are the values handed to the render layer. They carry every
//! position and size the scene needs so JavaScript never does layout math.

use serde::{Deserialize, Serialize};
use super::viewport::{Breakpoint, CompactnessFlags, Orientation};

/// Width and height of a single card
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct CardSize {
    pub width: f32,
    pub height: f32,
}

/// Anchor point in viewport coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Height reserved above and below the cards for game chrome (timer, buttons)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ButtonZones {
    pub top_px: f32,
    pub bottom_px: f32,
}

impl ButtonZones {
    pub fn for_compactness(flags: &CompactnessFlags) -> Self {
        if flags.is_compact_mode() {
            Self { top_px: 50.0, bottom_px: 50.0 }
        } else {
            Self { top_px: 60.0, bottom_px: 60.0 }
        }
    }

    pub fn total(&self) -> f32 {
        self.top_px + self.bottom_px
    }
}

/// Result of breakpoint classification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub breakpoint: Breakpoint,
    pub flags: CompactnessFlags,
    pub is_compact_mode: bool,

    /// Diagnostics only; no layout rule reads these
    pub orientation: Orientation,
    pub aspect_ratio: f32,
}

/// Single-grid ("mixed") layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub breakpoint: Breakpoint,
    pub cols: usize,
    pub rows: usize,
    pub card_size: CardSize,
    pub font_size_px: f32,

    /// Font size for the definition label drawn under each card
    pub label_font_size_px: f32,

    pub card_spacing_px: f32,
    pub button_zones: ButtonZones,

    /// Height between the button zones
    pub available_height: f32,
}

impl GridLayout {
    /// Cards that fit on one page; always at least 1
    pub fn capacity(&self) -> usize {
        (self.cols * self.rows).max(1)
    }
}

/// Left and right column anchors for the separated layout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ContainerPositions {
    pub left: Point,
    pub right: Point,
}

/// Dual-panel ("separated") layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeparatedLayout {
    pub breakpoint: Breakpoint,
    pub cols: usize,
    pub rows: usize,
    pub card_size: CardSize,
    pub card_spacing_px: f32,
    pub font_size_px: f32,
    pub positions: ContainerPositions,

    /// Height of the frame drawn around each column
    pub frame_height_px: f32,

    pub button_zones: ButtonZones,
}

impl SeparatedLayout {
    pub fn capacity(&self) -> usize {
        (self.cols * self.rows).max(1)
    }
}

/// Layout produced for whichever mode the activity asked for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LayoutResult {
    Mixed(GridLayout),
    Separated(SeparatedLayout),
}

impl LayoutResult {
    pub fn capacity(&self) -> usize {
        match self {
            LayoutResult::Mixed(grid) => grid.capacity(),
            LayoutResult::Separated(panels) => panels.capacity(),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        match self {
            LayoutResult::Mixed(grid) => grid.breakpoint,
            LayoutResult::Separated(panels) => panels.breakpoint,
        }
    }

    pub fn cols(&self) -> usize {
        match self {
            LayoutResult::Mixed(grid) => grid.cols,
            LayoutResult::Separated(panels) => panels.cols,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            LayoutResult::Mixed(grid) => grid.rows,
            LayoutResult::Separated(panels) => panels.rows,
        }
    }
}
