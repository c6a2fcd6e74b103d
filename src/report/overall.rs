use crate::config::TopNConfig;
use crate::engine::{AggregationEngine, AggregationResult, Dimension, Measure};
use crate::metrics::SummaryMetrics;
use crate::report::{print_heading, Report};
use serde::{Deserialize, Serialize};

//aggregate view over the whole dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallReport {
    pub title: String,
    pub summary: SummaryMetrics,
    pub trend_measure: Measure,
    pub monthly_trend: AggregationResult,
    pub sectors_by_amount: AggregationResult,
    pub sectors_by_count: AggregationResult,
    pub rounds_by_amount: AggregationResult,
    pub cities_by_amount: AggregationResult,
    pub cities_by_count: AggregationResult,
    pub years: Vec<i32>,
    pub selected_year: Option<i32>,
    pub top_startups_for_year: AggregationResult,
    pub top_startups_overall: AggregationResult,
    pub top_investors: AggregationResult,
}

impl OverallReport {
    //builds the report; year defaults to the earliest year in the data
    pub fn build(
        engine: &AggregationEngine<'_>,
        top_n: &TopNConfig,
        trend_measure: Measure,
        year: Option<i32>,
    ) -> Self {
        let years = engine.years();
        let selected_year = year.or_else(|| years.first().copied());

        log::debug!(
            "building overall report over {} records (trend: {:?}, year: {:?})",
            engine.len(),
            trend_measure,
            selected_year
        );

        let top_startups_for_year = match selected_year {
            Some(year) => engine.top_startups_for_year(year, top_n.startups_per_year),
            None => AggregationResult::empty("Top startups of year"),
        };

        let title = match (years.first(), years.last()) {
            (Some(first), Some(last)) => {
                format!("Overall Analysis of Startups between {}-{}", first, last)
            }
            _ => "Overall Analysis of Startups".to_string(),
        };

        OverallReport {
            title,
            summary: SummaryMetrics::from_engine(engine),
            trend_measure,
            monthly_trend: engine.monthly_trend(trend_measure),
            sectors_by_amount: engine
                .top_n(Dimension::Vertical, top_n.sectors, Measure::Total)
                .with_name(format!("{} Biggest Sectors Value wise", top_n.sectors)),
            sectors_by_count: engine
                .top_n(Dimension::Vertical, top_n.sectors, Measure::Count)
                .with_name(format!("{} Biggest Sectors by count", top_n.sectors)),
            rounds_by_amount: engine
                .top_n(Dimension::Round, top_n.rounds, Measure::Total)
                .with_name(format!("Top {} funding rounds by value", top_n.rounds)),
            cities_by_amount: engine
                .top_n(Dimension::City, top_n.cities, Measure::Total)
                .with_name(format!("Top {} cities by amount invested", top_n.cities)),
            cities_by_count: engine
                .top_n(Dimension::City, top_n.cities, Measure::Count)
                .with_name(format!("Top {} cities by companies funded", top_n.cities)),
            years,
            selected_year,
            top_startups_for_year,
            top_startups_overall: engine
                .top_n(Dimension::Startup, top_n.startups_overall, Measure::Max)
                .with_name("Top StartUps Overall"),
            top_investors: engine
                .top_n(Dimension::Investors, top_n.investors, Measure::Total)
                .with_name("Top Investors"),
        }
    }
}

impl Report for OverallReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn print(&self) {
        print_heading(&self.title);
        self.summary.pretty_print_table();
        println!();

        self.monthly_trend.pretty_print_table(self.trend_measure.label());
        self.sectors_by_amount.pretty_print_table(Measure::Total.label());
        self.sectors_by_count.pretty_print_table(Measure::Count.label());
        self.rounds_by_amount.pretty_print_table(Measure::Total.label());
        self.cities_by_amount.pretty_print_table(Measure::Total.label());
        self.cities_by_count.pretty_print_table(Measure::Count.label());

        if !self.years.is_empty() {
            let years: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
            println!("Available years: {}", years.join(", "));
        }
        self.top_startups_for_year.pretty_print_table(Measure::Max.label());
        self.top_startups_overall.pretty_print_table(Measure::Max.label());
        self.top_investors.pretty_print_table(Measure::Total.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, FundingRecord};
    use chrono::NaiveDate;

    fn record(y: i32, startup: &str, vertical: &str, investors: &str, amount: f64) -> FundingRecord {
        FundingRecord::new_unchecked(
            NaiveDate::from_ymd_opt(y, 6, 1).unwrap(),
            startup.to_string(),
            Some(vertical.to_string()),
            None,
            Some("Mumbai".to_string()),
            Some("Seed".to_string()),
            Some(investors.to_string()),
            Some(amount),
        )
    }

    #[test]
    fn test_defaults_to_earliest_year() {
        let dataset = Dataset::new(vec![
            record(2020, "A", "Tech", "X", 5.0),
            record(2016, "B", "Food", "Y", 7.0),
        ]);
        let engine = AggregationEngine::new(&dataset);

        let report = OverallReport::build(&engine, &TopNConfig::default(), Measure::Total, None);

        assert_eq!(report.selected_year, Some(2016));
        assert_eq!(report.top_startups_for_year.keys(), vec!["B"]);
        assert_eq!(report.title, "Overall Analysis of Startups between 2016-2020");
        assert_eq!(report.top_investors.keys(), vec!["Y", "X"]);
        assert_eq!(report.sectors_by_amount.len(), 2);
    }

    #[test]
    fn test_top_n_sizes_follow_config() {
        let dataset = Dataset::new(
            (0..12)
                .map(|i| record(2019, &format!("S{}", i), "Tech", "X", i as f64))
                .collect(),
        );
        let engine = AggregationEngine::new(&dataset);
        let top_n = TopNConfig {
            startups_overall: 3,
            ..TopNConfig::default()
        };

        let report = OverallReport::build(&engine, &top_n, Measure::Count, Some(2019));

        assert_eq!(report.top_startups_overall.keys(), vec!["S11", "S10", "S9"]);
        assert_eq!(report.top_startups_for_year.len(), 5);
        assert_eq!(report.monthly_trend.entries[0].value, 12.0);
    }

    #[test]
    fn test_empty_dataset_builds_empty_report() {
        let dataset = Dataset::default();
        let engine = AggregationEngine::new(&dataset);

        let report = OverallReport::build(&engine, &TopNConfig::default(), Measure::Total, None);

        assert_eq!(report.selected_year, None);
        assert!(report.top_startups_for_year.is_empty());
        assert!(report.monthly_trend.is_empty());
        assert_eq!(report.title(), "Overall Analysis of Startups");
    }
}
