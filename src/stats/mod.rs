//! Statistics reducer
//!
//! Pure reductions over a price series: a summary bundle and a
//! day-over-day change table. Both allocate fresh outputs on every call.

mod delta;
mod summary;

pub use delta::{tabulate, DeltaRow};
pub use summary::{summarize, SummaryStatistics};
