pub mod analysis_config;

pub use analysis_config::{AnalysisConfiguration, TopNConfig};
