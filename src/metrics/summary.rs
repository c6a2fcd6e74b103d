use crate::engine::AggregationEngine;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

//headline metrics for the overall view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    //total invested, rounded half to even to whole crore
    pub total_invested: f64,
    pub max_single_raise: Option<f64>,
    pub max_raise_startup: Option<String>,
    //average per-startup total, NaN on an empty dataset
    pub average_raise: f64,
    pub funded_startups: usize,
}

impl SummaryMetrics {
    //calculate summary metrics from an engine
    pub fn from_engine(engine: &AggregationEngine<'_>) -> Self {
        let max = engine.max_single_raise();

        SummaryMetrics {
            total_invested: engine.total_invested().round_ties_even(),
            max_single_raise: max.as_ref().map(|entry| entry.value),
            max_raise_startup: max.map(|entry| entry.key),
            average_raise: round_to(engine.average_raise_per_startup(), 2),
            funded_startups: engine.distinct_startup_count(),
        }
    }

    //prints metrics in a formatted table
    pub fn pretty_print_table(&self) {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        table.add_row(Row::new(vec![
            Cell::new("Total Amount raised"),
            Cell::new(&format!("{:.0} Cr", self.total_invested)),
        ]));

        let max_text = match (&self.max_single_raise, &self.max_raise_startup) {
            (Some(amount), Some(startup)) => format!("{} Cr ({})", amount, startup),
            _ => "-".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new("Maximum amount raised"),
            Cell::new(&max_text),
        ]));

        let avg_text = if self.average_raise.is_nan() {
            "-".to_string()
        } else {
            format!("{:.2} Cr", self.average_raise)
        };
        table.add_row(Row::new(vec![
            Cell::new("Average amount raised"),
            Cell::new(&avg_text),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Funded StartUps"),
            Cell::new(&format!("{}", self.funded_startups)),
        ]));

        table.printstd();
    }
}

//rounds half to even at a fixed number of decimals, NaN stays NaN
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
