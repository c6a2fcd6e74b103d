use crate::config::AnalysisConfiguration;
use crate::data::{load_csv, Dataset};
use crate::engine::{AggregationEngine, InvestorMatch, Measure};
use crate::report::investor::InvestorReport;
use crate::report::overall::OverallReport;
use crate::report::startup::StartupReport;
use anyhow::{Context, Result};

//one analysis run: the loaded dataset and the settings it is viewed with
#[derive(Debug, Clone)]
pub struct Session {
    config: AnalysisConfiguration,
    dataset: Dataset,
}

impl Session {
    pub fn new(config: AnalysisConfiguration, dataset: Dataset) -> Self {
        Session { config, dataset }
    }

    //loads the dataset named in the configuration; a bad row aborts the session
    pub fn open(config: AnalysisConfiguration) -> Result<Self> {
        let dataset = load_csv(&config.data_path)
            .context(format!("Failed to start session from {:?}", config.data_path))?;
        Ok(Session::new(config, dataset))
    }

    pub fn config(&self) -> &AnalysisConfiguration {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn engine(&self) -> AggregationEngine<'_> {
        AggregationEngine::new(&self.dataset)
    }

    pub fn overall_report(&self, trend_measure: Measure, year: Option<i32>) -> OverallReport {
        OverallReport::build(&self.engine(), &self.config.top_n, trend_measure, year)
    }

    //uses the configured match mode unless one is given
    pub fn investor_report(&self, investor: &str, mode: Option<InvestorMatch>) -> InvestorReport {
        let mode = mode.unwrap_or(self.config.investor_match);
        InvestorReport::build(&self.engine(), investor, mode, &self.config.top_n)
    }

    pub fn startup_report(&self, startup: &str) -> StartupReport {
        StartupReport::build(&self.engine(), startup)
    }

    //selectable investor names
    pub fn investor_names(&self) -> Vec<String> {
        self.dataset.investor_names()
    }

    //selectable startup names
    pub fn startup_names(&self) -> Vec<String> {
        self.dataset.startup_names()
    }
}
