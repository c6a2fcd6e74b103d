pub mod aggregation;
pub mod filter;
pub mod group;
pub mod result;

pub use aggregation::{AggregationEngine, StartupProfile};
pub use filter::{investor_filter, startup_filter, InvestorMatch};
pub use group::{group_by, period_label, Dimension, Measure};
pub use result::{AggregationResult, Entry};
