use crate::data::{Dataset, FundingRecord};
use crate::engine::filter::{investor_filter, startup_filter, InvestorMatch};
use crate::engine::group::{group_by, Dimension, Measure};
use crate::engine::result::{AggregationResult, Entry};
use crate::metrics::timeseries::{monthly_series, series_to_result, yearly_series};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

//descriptive fields of a startup, taken from its first record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupProfile {
    pub startup: String,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub city: Option<String>,
}

//runs aggregation queries over a borrowed set of records
//all queries are pure; nothing is cached between calls
#[derive(Debug, Clone)]
pub struct AggregationEngine<'a> {
    records: Vec<&'a FundingRecord>,
}

impl<'a> AggregationEngine<'a> {
    //creates an engine over the whole dataset
    pub fn new(dataset: &'a Dataset) -> Self {
        AggregationEngine {
            records: dataset.iter().collect(),
        }
    }

    //creates an engine over an already selected subset
    pub fn from_records(records: Vec<&'a FundingRecord>) -> Self {
        AggregationEngine { records }
    }

    pub fn records(&self) -> &[&'a FundingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &'a FundingRecord> + '_ {
        self.records.iter().copied()
    }

    //sum of every reported amount
    pub fn total_invested(&self) -> f64 {
        self.iter().filter_map(|record| record.amount).sum()
    }

    //largest per-startup maximum; ties go to the startup seen first
    pub fn max_single_raise(&self) -> Option<Entry> {
        group_by(self.iter(), Dimension::Startup, Measure::Max)
            .sorted_desc()
            .entries
            .into_iter()
            .next()
    }

    //mean of per-startup totals, NaN when there are no startups
    pub fn average_raise_per_startup(&self) -> f64 {
        let totals = group_by(self.iter(), Dimension::Startup, Measure::Total).values();
        totals.mean()
    }

    pub fn distinct_startup_count(&self) -> usize {
        group_by(self.iter(), Dimension::Startup, Measure::Count).len()
    }

    //per-month totals or counts, ascending by (year, month)
    pub fn monthly_trend(&self, measure: Measure) -> AggregationResult {
        let name = match measure {
            Measure::Count => "Month wise number of fundings",
            _ => "Month wise investment",
        };
        series_to_result(name, &monthly_series(self.iter(), measure))
    }

    //full grouping on a dimension, in first-appearance order
    pub fn group(&self, dimension: Dimension, measure: Measure) -> AggregationResult {
        group_by(self.iter(), dimension, measure)
    }

    //largest n groups, descending; equal values keep first-appearance order
    pub fn top_n(&self, dimension: Dimension, n: usize, measure: Measure) -> AggregationResult {
        self.group(dimension, measure).sorted_desc().head(n)
    }

    //startups with the largest single raise within one year
    pub fn top_startups_for_year(&self, year: i32, n: usize) -> AggregationResult {
        let in_year = self.iter().filter(|record| record.year() == year);

        group_by(in_year, Dimension::Startup, Measure::Max)
            .sorted_desc()
            .head(n)
            .with_name(format!("Top startups of {}", year))
    }

    //per-key totals ordered by key
    pub fn breakdown(&self, dimension: Dimension) -> AggregationResult {
        self.group(dimension, Measure::Total).sorted_by_key()
    }

    //yearly totals, ascending by year
    pub fn year_over_year(&self) -> AggregationResult {
        series_to_result(
            "Year over year investment",
            &yearly_series(self.iter(), Measure::Total),
        )
    }

    //narrows to the records backed by an investor
    pub fn investor_filter(&self, investor: &str, mode: InvestorMatch) -> AggregationEngine<'a> {
        AggregationEngine::from_records(investor_filter(self.iter(), investor, mode))
    }

    //narrows to the records of a single startup
    pub fn startup_filter(&self, startup: &str) -> AggregationEngine<'a> {
        AggregationEngine::from_records(startup_filter(self.iter(), startup))
    }

    //first n records in row order
    pub fn head(&self, n: usize) -> Vec<&'a FundingRecord> {
        self.iter().take(n).collect()
    }

    //profile of a startup from its first record, none when unknown
    pub fn startup_profile(&self, startup: &str) -> Option<StartupProfile> {
        let records = startup_filter(self.iter(), startup);
        let first = records.first()?;

        let consistent = records
            .iter()
            .all(|r| r.vertical == first.vertical && r.city == first.city);
        if !consistent {
            log::debug!(
                "{} has conflicting vertical/city across {} records, using the first",
                startup,
                records.len()
            );
        }

        Some(StartupProfile {
            startup: first.startup.clone(),
            industry: first.vertical.clone(),
            sub_industry: first.subvertical.clone(),
            city: first.city.clone(),
        })
    }

    //distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        yearly_series(self.iter(), Measure::Count)
            .into_iter()
            .map(|point| point.year)
            .collect()
    }
}
