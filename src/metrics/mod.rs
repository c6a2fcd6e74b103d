pub mod summary;
pub mod timeseries;

pub use summary::{round_to, SummaryMetrics};
pub use timeseries::{monthly_series, series_to_result, yearly_series, PeriodPoint};
