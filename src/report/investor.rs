use crate::config::TopNConfig;
use crate::engine::{AggregationEngine, AggregationResult, Dimension, InvestorMatch, Measure};
use crate::report::{print_heading, print_investments, InvestmentRow, Report};
use serde::{Deserialize, Serialize};

//portfolio view of one investor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorReport {
    pub investor: String,
    pub match_mode: InvestorMatch,
    pub num_investments: usize,
    pub total_invested: f64,
    pub recent_investments: Vec<InvestmentRow>,
    pub biggest_investments: AggregationResult,
    pub sectors: AggregationResult,
    pub rounds: AggregationResult,
    pub cities: AggregationResult,
    pub year_over_year: AggregationResult,
}

impl InvestorReport {
    //builds the report; an unknown investor yields empty tables
    pub fn build(
        engine: &AggregationEngine<'_>,
        investor: &str,
        mode: InvestorMatch,
        top_n: &TopNConfig,
    ) -> Self {
        let portfolio = engine.investor_filter(investor, mode);

        log::debug!(
            "investor '{}' ({:?} match) backed {} of {} records",
            investor,
            mode,
            portfolio.len(),
            engine.len()
        );

        InvestorReport {
            investor: investor.to_string(),
            match_mode: mode,
            num_investments: portfolio.len(),
            total_invested: portfolio.total_invested(),
            recent_investments: portfolio
                .head(top_n.recent_investments)
                .into_iter()
                .map(InvestmentRow::from)
                .collect(),
            biggest_investments: portfolio
                .top_n(Dimension::Startup, top_n.biggest_investments, Measure::Total)
                .with_name(format!("{} Biggest Investments", top_n.biggest_investments)),
            sectors: portfolio
                .breakdown(Dimension::Vertical)
                .with_name("Sectors invested in"),
            rounds: portfolio
                .breakdown(Dimension::Round)
                .with_name("Round-wise investment"),
            cities: portfolio
                .breakdown(Dimension::City)
                .with_name("City-wise investment"),
            year_over_year: portfolio.year_over_year().with_name("YOY Investment"),
        }
    }
}

impl Report for InvestorReport {
    fn title(&self) -> &str {
        &self.investor
    }

    fn print(&self) {
        print_heading(&self.investor);
        println!(
            "{} investments, {} Cr in total\n",
            self.num_investments, self.total_invested
        );

        print_investments("Most Recent Investments", &self.recent_investments);

        let amount = Measure::Total.label();
        self.biggest_investments.pretty_print_table(amount);
        self.sectors.pretty_print_table(amount);
        self.rounds.pretty_print_table(amount);
        self.cities.pretty_print_table(amount);
        self.year_over_year.pretty_print_table(amount);
    }
}
