//! Viewport classification and layout choice

use serde::Serialize;

use crate::config::LayoutConfig;

/// Viewport width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    Mobile,
    Tablet,
    Desktop,
}

impl ScreenSize {
    /// Classify a viewport width in CSS pixels
    pub fn from_width(width: u32, breakpoints: &LayoutConfig) -> Self {
        if width < breakpoints.tablet_min_width {
            ScreenSize::Mobile
        } else if width < breakpoints.desktop_min_width {
            ScreenSize::Tablet
        } else {
            ScreenSize::Desktop
        }
    }

    /// Tablets and phones share the condensed layout
    pub fn is_compact(self) -> bool {
        self != ScreenSize::Desktop
    }
}

/// How the summary panel is arranged next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsArrangement {
    /// Two-column grid under the chart
    Grid,
    /// Single column beside the chart
    Stacked,
}

/// Layout decisions for one screen size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub screen: ScreenSize,
    /// Label every n-th x-axis tick (the last tick is always labelled)
    pub label_stride: usize,
    /// Whether table dates carry the year
    pub show_year: bool,
    pub stats: StatsArrangement,
}

impl Layout {
    /// Layout for a screen size
    pub fn for_screen(screen: ScreenSize) -> Self {
        if screen.is_compact() {
            Self {
                screen,
                label_stride: 10,
                show_year: false,
                stats: StatsArrangement::Grid,
            }
        } else {
            Self {
                screen,
                label_stride: 5,
                show_year: true,
                stats: StatsArrangement::Stacked,
            }
        }
    }

    /// Layout for a viewport width
    pub fn for_width(width: u32, breakpoints: &LayoutConfig) -> Self {
        Self::for_screen(ScreenSize::from_width(width, breakpoints))
    }
}
