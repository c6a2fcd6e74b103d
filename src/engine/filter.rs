use crate::data::FundingRecord;
use serde::{Deserialize, Serialize};

//how an investor name is matched against a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorMatch {
    //substring of the raw investor text; "Seq" matches "Sequoia, Tiger"
    #[default]
    Substring,
    //exactly one of the listed investor names
    Exact,
}

impl InvestorMatch {
    //parse match mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "substring" | "contains" | "legacy" => Some(InvestorMatch::Substring),
            "exact" => Some(InvestorMatch::Exact),
            _ => None,
        }
    }

    pub fn matches(&self, record: &FundingRecord, investor: &str) -> bool {
        match self {
            InvestorMatch::Substring => record.investors_contain(investor),
            InvestorMatch::Exact => record.has_investor(investor),
        }
    }
}

//records backed by the given investor, in original row order
pub fn investor_filter<'a, I>(records: I, investor: &str, mode: InvestorMatch) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    records
        .into_iter()
        .filter(|record| mode.matches(record, investor))
        .collect()
}

//records of the given startup, in original row order
pub fn startup_filter<'a, I>(records: I, startup: &str) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    records
        .into_iter()
        .filter(|record| record.startup == startup)
        .collect()
}
