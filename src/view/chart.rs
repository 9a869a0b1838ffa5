//! Chart scaling
//!
//! Maps prices onto bar heights and onto a 1000x300 line-plot viewbox. A flat
//! series (zero range) is drawn at mid-scale instead of dividing by zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::history::PriceSeries;
use crate::stats::SummaryStatistics;

/// Left edge of the plot area in viewbox units
const PLOT_LEFT: Decimal = dec!(50);
/// Width of the plot area
const PLOT_WIDTH: Decimal = dec!(900);
/// Baseline (lowest price) in viewbox units
const PLOT_BOTTOM: Decimal = dec!(280);
/// Height of the plot area
const PLOT_HEIGHT: Decimal = dec!(260);

/// A point on the line plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPoint {
    pub x: Decimal,
    pub y: Decimal,
}

/// How a bar is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// Most recent price
    Current,
    /// Priced at the series minimum
    Lowest,
    Normal,
}

/// Value range of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartScale {
    min: Decimal,
    max: Decimal,
}

impl ChartScale {
    /// Scale spanning the summary's min and max
    pub fn from_summary(summary: &SummaryStatistics) -> Self {
        Self {
            min: summary.min,
            max: summary.max,
        }
    }

    /// `max - min`
    pub fn range(&self) -> Decimal {
        self.max - self.min
    }

    /// Bar height in percent of the chart: 10..=90, or 50 for a flat series
    pub fn bar_height_percent(&self, price: Decimal) -> Decimal {
        let range = self.range();
        if range.is_zero() {
            return dec!(50);
        }
        (price - self.min) / range * dec!(80) + dec!(10)
    }

    /// Vertical viewbox coordinate: 280 at the minimum, 20 at the maximum
    pub fn plot_y(&self, price: Decimal) -> Decimal {
        let range = self.range();
        if range.is_zero() {
            return PLOT_BOTTOM - PLOT_HEIGHT / dec!(2);
        }
        PLOT_BOTTOM - (price - self.min) / range * PLOT_HEIGHT
    }

    /// Line plot coordinates for every point of a series
    pub fn plot(&self, series: &PriceSeries) -> Vec<PlotPoint> {
        let spacing = match series.len() {
            0 | 1 => Decimal::ZERO,
            n => PLOT_WIDTH / Decimal::from(n - 1),
        };

        series
            .prices()
            .enumerate()
            .map(|(i, price)| PlotPoint {
                x: PLOT_LEFT + spacing * Decimal::from(i),
                y: self.plot_y(price),
            })
            .collect()
    }

    /// SVG `points` attribute for the line plot
    pub fn polyline(&self, series: &PriceSeries) -> String {
        self.plot(series)
            .iter()
            .map(|p| format!("{},{}", p.x.round_dp(2).normalize(), p.y.round_dp(2).normalize()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Y-axis labels, top to bottom: max, midpoint, min
    pub fn axis_labels(&self) -> [Decimal; 3] {
        [self.max, (self.max + self.min) / dec!(2), self.min]
    }
}

/// Highlight for the bar at `index` of `series`
pub fn bar_kind(series: &PriceSeries, summary: &SummaryStatistics, index: usize) -> BarKind {
    if index + 1 == series.len() {
        BarKind::Current
    } else if series.points().get(index).map(|p| p.price) == Some(summary.min) {
        BarKind::Lowest
    } else {
        BarKind::Normal
    }
}

/// Indices of labelled x-axis ticks: every `stride`-th point plus the last
pub fn tick_indices(len: usize, stride: usize) -> Vec<usize> {
    let stride = stride.max(1);
    (0..len)
        .filter(|&i| i % stride == 0 || i + 1 == len)
        .collect()
}
