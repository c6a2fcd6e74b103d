use crate::data::FundingRecord;
use crate::engine::group::{period_label, Measure};
use crate::engine::result::{AggregationResult, Entry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

//a point in a calendar series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPoint {
    pub year: i32,
    //none for yearly points
    pub month: Option<u32>,
    pub value: f64,
}

impl PeriodPoint {
    pub fn label(&self) -> String {
        match self.month {
            Some(month) => period_label(self.year, month),
            None => self.year.to_string(),
        }
    }
}

fn reduce(amounts: &[Option<f64>], measure: Measure) -> Option<f64> {
    match measure {
        Measure::Total => Some(amounts.iter().flatten().sum()),
        Measure::Count => Some(amounts.len() as f64),
        Measure::Max => amounts.iter().flatten().copied().reduce(f64::max),
    }
}

//reduces records per (year, month), ascending
pub fn monthly_series<'a, I>(records: I, measure: Measure) -> Vec<PeriodPoint>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut buckets: BTreeMap<(i32, u32), Vec<Option<f64>>> = BTreeMap::new();
    for record in records {
        buckets
            .entry((record.year(), record.month()))
            .or_default()
            .push(record.amount);
    }

    buckets
        .into_iter()
        .filter_map(|((year, month), amounts)| {
            reduce(&amounts, measure).map(|value| PeriodPoint {
                year,
                month: Some(month),
                value,
            })
        })
        .collect()
}

//reduces records per year, ascending
pub fn yearly_series<'a, I>(records: I, measure: Measure) -> Vec<PeriodPoint>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut buckets: BTreeMap<i32, Vec<Option<f64>>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.year()).or_default().push(record.amount);
    }

    buckets
        .into_iter()
        .filter_map(|(year, amounts)| {
            reduce(&amounts, measure).map(|value| PeriodPoint {
                year,
                month: None,
                value,
            })
        })
        .collect()
}

//converts a series into a labelled result, keeping its order
pub fn series_to_result(name: &str, series: &[PeriodPoint]) -> AggregationResult {
    AggregationResult::new(
        name,
        series
            .iter()
            .map(|point| Entry::new(point.label(), point.value))
            .collect(),
    )
}
