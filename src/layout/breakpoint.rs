//! Breakpoint classification
//!
//! Maps a viewport to its width bucket and the compactness conditions that
//! decide between the dense and the roomy grids.

use crate::models::{Breakpoint, Classification, CompactnessFlags, Viewport};

/// Width at which tablets start
pub const TABLET_MIN_WIDTH: u32 = 768;

/// Width at which desktops start
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Width at which wide screens start
pub const WIDE_MIN_WIDTH: u32 = 1440;

/// Landscape viewports shorter than this are treated as phones on their side
pub const LANDSCAPE_MOBILE_MAX_HEIGHT: u32 = 500;

/// Viewports shorter than this are compact regardless of width
pub const TINY_HEIGHT: u32 = 400;

/// Width-only bucketing; height never influences the label
pub fn breakpoint_for_width(width: u32) -> Breakpoint {
    if width < TABLET_MIN_WIDTH {
        Breakpoint::Mobile
    } else if width < DESKTOP_MIN_WIDTH {
        Breakpoint::Tablet
    } else if width < WIDE_MIN_WIDTH {
        Breakpoint::Desktop
    } else {
        Breakpoint::Wide
    }
}

pub fn compactness(viewport: &Viewport) -> CompactnessFlags {
    CompactnessFlags {
        is_mobile_device: viewport.width < TABLET_MIN_WIDTH,
        is_landscape_mobile: viewport.is_landscape()
            && viewport.height < LANDSCAPE_MOBILE_MAX_HEIGHT,
        is_tiny_height: viewport.height < TINY_HEIGHT,
    }
}

pub fn classify(viewport: &Viewport) -> Classification {
    let flags = compactness(viewport);
    Classification {
        breakpoint: breakpoint_for_width(viewport.width),
        flags,
        is_compact_mode: flags.is_compact_mode(),
        orientation: viewport.orientation(),
        aspect_ratio: viewport.aspect_ratio(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;

    #[test]
    fn test_reference_viewports() {
        assert_eq!(classify(&Viewport::new(375, 667)).breakpoint, Breakpoint::Mobile);
        assert_eq!(classify(&Viewport::new(768, 1024)).breakpoint, Breakpoint::Tablet);
        assert_eq!(classify(&Viewport::new(1024, 768)).breakpoint, Breakpoint::Desktop);
        assert_eq!(classify(&Viewport::new(1440, 900)).breakpoint, Breakpoint::Wide);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(breakpoint_for_width(767), Breakpoint::Mobile);
        assert_eq!(breakpoint_for_width(768), Breakpoint::Tablet);
        assert_eq!(breakpoint_for_width(1023), Breakpoint::Tablet);
        assert_eq!(breakpoint_for_width(1024), Breakpoint::Desktop);
        assert_eq!(breakpoint_for_width(1439), Breakpoint::Desktop);
        assert_eq!(breakpoint_for_width(1440), Breakpoint::Wide);
    }

    #[test]
    fn test_height_does_not_change_label() {
        for height in [0, 200, 399, 500, 2000] {
            assert_eq!(classify(&Viewport::new(1200, height)).breakpoint, Breakpoint::Desktop);
        }
    }

    #[test]
    fn test_landscape_phone_is_compact() {
        let c = classify(&Viewport::new(812, 375));
        assert_eq!(c.breakpoint, Breakpoint::Tablet);
        assert!(!c.flags.is_mobile_device);
        assert!(c.flags.is_landscape_mobile);
        assert!(c.flags.is_tiny_height);
        assert!(c.is_compact_mode);
    }

    #[test]
    fn test_short_landscape_desktop_window() {
        // Wide but only 450px tall: landscape-mobile without tiny height
        let c = classify(&Viewport::new(1280, 450));
        assert!(c.flags.is_landscape_mobile);
        assert!(!c.flags.is_tiny_height);
        assert!(c.is_compact_mode);
    }

    #[test]
    fn test_classification_reports_orientation() {
        let c = classify(&Viewport::new(812, 375));
        assert_eq!(c.orientation, Orientation::Landscape);
        assert!((c.aspect_ratio - 812.0 / 375.0).abs() < 1e-4);

        let empty = classify(&Viewport::new(0, 0));
        assert_eq!(empty.orientation, Orientation::Portrait);
        assert_eq!(empty.aspect_ratio, 0.0);
        assert_eq!(empty.breakpoint, Breakpoint::Mobile);
        assert!(empty.is_compact_mode);
    }

    #[test]
    fn test_tablet_portrait_not_compact() {
        let c = classify(&Viewport::new(768, 1024));
        assert!(!c.is_compact_mode);
        assert_eq!(c.flags, CompactnessFlags::default());
    }

    #[test]
    fn test_zero_viewport_is_mobile_and_compact() {
        let c = classify(&Viewport::new(0, 0));
        assert_eq!(c.breakpoint, Breakpoint::Mobile);
        assert!(c.is_compact_mode);
    }
}
