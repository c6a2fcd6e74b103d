use crate::engine::InvestorMatch;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

//how many rows each ranked table keeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopNConfig {
    pub sectors: usize,
    pub cities: usize,
    pub rounds: usize,
    pub startups_per_year: usize,
    pub startups_overall: usize,
    pub investors: usize,
    pub recent_investments: usize,
    pub biggest_investments: usize,
}

impl Default for TopNConfig {
    fn default() -> Self {
        TopNConfig {
            sectors: 5,
            cities: 5,
            rounds: 5,
            startups_per_year: 5,
            startups_overall: 10,
            investors: 10,
            recent_investments: 5,
            biggest_investments: 5,
        }
    }
}

//complete analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfiguration {
    //data
    pub data_path: PathBuf,

    //investor view
    pub investor_match: InvestorMatch,

    //table sizes
    pub top_n: TopNConfig,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        AnalysisConfiguration {
            data_path: PathBuf::from("startup_cleaned.csv"),
            investor_match: InvestorMatch::Substring,
            top_n: TopNConfig::default(),
        }
    }
}

impl AnalysisConfiguration {
    //load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file {:?}", path))?;
        let config: AnalysisConfiguration = serde_json::from_str(&contents)
            .context(format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).context(format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}
