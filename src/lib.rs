//a Rust-based analytics engine for startup funding datasets

pub mod config;
pub mod data;
pub mod engine;
pub mod metrics;
pub mod report;
pub mod session;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{AnalysisConfiguration, TopNConfig};
    pub use crate::data::{load_csv, load_from_reader, DataError, Dataset, FundingRecord};
    pub use crate::engine::{
        group_by, investor_filter, AggregationEngine, AggregationResult, Dimension, Entry,
        InvestorMatch, Measure, StartupProfile,
    };
    pub use crate::metrics::{monthly_series, yearly_series, PeriodPoint, SummaryMetrics};
    pub use crate::report::{
        investor::InvestorReport, overall::OverallReport, startup::StartupReport, InvestmentRow,
        Report,
    };
    pub use crate::session::Session;
}
