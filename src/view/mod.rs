//! Display-surface policies
//!
//! Everything here consumes the core's result shapes (series, summary, delta
//! rows) and never fabricates prices itself: viewport layout, chart scaling,
//! tr-TR formatting, dashboard alerts and terminal reports.

pub mod alerts;
pub mod chart;
pub mod format;
pub mod layout;
pub mod report;

pub use alerts::{biggest_drops, biggest_rises, filter_by_platform, PriceAlert, ALL_PLATFORMS};
pub use chart::{bar_kind, tick_indices, BarKind, ChartScale, PlotPoint};
pub use format::Direction;
pub use layout::{Layout, ScreenSize, StatsArrangement};
pub use report::{render_alerts, render_history, render_store_search, render_watchlist};
