use crate::engine::{AggregationEngine, StartupProfile};
use crate::report::{print_heading, print_investments, InvestmentRow, Report};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

//profile and funding history of one startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupReport {
    pub startup: String,
    pub profile: Option<StartupProfile>,
    pub total_raised: f64,
    pub funding_history: Vec<InvestmentRow>,
}

impl StartupReport {
    //builds the report; an unknown startup has no profile and no history
    pub fn build(engine: &AggregationEngine<'_>, startup: &str) -> Self {
        let rounds = engine.startup_filter(startup);

        log::debug!("startup '{}' has {} funding records", startup, rounds.len());

        StartupReport {
            startup: startup.to_string(),
            profile: engine.startup_profile(startup),
            total_raised: rounds.total_invested(),
            funding_history: rounds
                .records()
                .iter()
                .map(|record| InvestmentRow::from(*record))
                .collect(),
        }
    }
}

impl Report for StartupReport {
    fn title(&self) -> &str {
        &self.startup
    }

    fn print(&self) {
        print_heading(&self.startup);

        match &self.profile {
            Some(profile) => {
                let mut table = Table::new();
                table.add_row(Row::new(vec![
                    Cell::new("Industry"),
                    Cell::new("Sub-Industry"),
                    Cell::new("City"),
                ]));
                table.add_row(Row::new(vec![
                    Cell::new(profile.industry.as_deref().unwrap_or("-")),
                    Cell::new(profile.sub_industry.as_deref().unwrap_or("-")),
                    Cell::new(profile.city.as_deref().unwrap_or("-")),
                ]));
                table.printstd();
                println!();
            }
            None => println!("No records found for {}\n", self.startup),
        }

        println!("Total raised: {} Cr\n", self.total_raised);
        print_investments("Funding Rounds", &self.funding_history);
    }
}
