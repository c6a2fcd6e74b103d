use crate::data::FundingRecord;
use crate::engine::result::{AggregationResult, Entry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

//column a dataset can be grouped on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Startup,
    Vertical,
    Subvertical,
    City,
    Round,
    Year,
    Month,

    //the raw comma-joined investor text, one group per distinct string
    Investors,

    //each listed investor separately, a record counts toward all of them
    Investor,
}

impl Dimension {
    //parse dimension from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startup" | "startups" => Some(Dimension::Startup),
            "vertical" | "sector" | "industry" => Some(Dimension::Vertical),
            "subvertical" | "sub-vertical" => Some(Dimension::Subvertical),
            "city" => Some(Dimension::City),
            "round" => Some(Dimension::Round),
            "year" => Some(Dimension::Year),
            "month" => Some(Dimension::Month),
            "investors" => Some(Dimension::Investors),
            "investor" => Some(Dimension::Investor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Startup => "startup",
            Dimension::Vertical => "vertical",
            Dimension::Subvertical => "subvertical",
            Dimension::City => "city",
            Dimension::Round => "round",
            Dimension::Year => "year",
            Dimension::Month => "month",
            Dimension::Investors => "investors",
            Dimension::Investor => "investor",
        }
    }

    //group keys of a record; empty when the field is missing
    pub fn keys(&self, record: &FundingRecord) -> Vec<String> {
        match self {
            Dimension::Startup => vec![record.startup.clone()],
            Dimension::Vertical => record.vertical.iter().cloned().collect(),
            Dimension::Subvertical => record.subvertical.iter().cloned().collect(),
            Dimension::City => record.city.iter().cloned().collect(),
            Dimension::Round => record.round.iter().cloned().collect(),
            Dimension::Year => vec![record.year().to_string()],
            Dimension::Month => vec![period_label(record.year(), record.month())],
            Dimension::Investors => record.investors_raw.iter().cloned().collect(),
            Dimension::Investor => record.investors.clone(),
        }
    }
}

//reduction applied to each group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measure {
    //sum of amounts
    Total,
    //number of records
    Count,
    //largest single amount
    Max,
}

impl Measure {
    //parse measure from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "total" | "sum" | "amount" => Some(Measure::Total),
            "count" | "records" => Some(Measure::Count),
            "max" => Some(Measure::Max),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Measure::Total => "Amount (Cr)",
            Measure::Count => "Count",
            Measure::Max => "Max Amount (Cr)",
        }
    }
}

//running reduction state for one group
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
    max: Option<f64>,
}

impl Accumulator {
    fn push(&mut self, amount: Option<f64>) {
        self.count += 1;

        //missing amounts only count as records
        if let Some(amount) = amount {
            self.sum += amount;
            self.max = Some(self.max.map_or(amount, |m| m.max(amount)));
        }
    }

    fn finish(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::Total => Some(self.sum),
            Measure::Count => Some(self.count as f64),
            Measure::Max => self.max,
        }
    }
}

//labels a month bucket as "<month>-<year>"
pub fn period_label(year: i32, month: u32) -> String {
    format!("{}-{}", month, year)
}

//groups records on a dimension and reduces each group
//groups are ordered by first appearance in the input
pub fn group_by<'a, I>(records: I, dimension: Dimension, measure: Measure) -> AggregationResult
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut groups: IndexMap<String, Accumulator> = IndexMap::new();

    for record in records {
        for key in dimension.keys(record) {
            groups.entry(key).or_default().push(record.amount);
        }
    }

    let entries = groups
        .into_iter()
        .filter_map(|(key, acc)| acc.finish(measure).map(|value| Entry::new(key, value)))
        .collect();

    AggregationResult::new(
        format!("{} by {}", measure.label(), dimension.label()),
        entries,
    )
}
