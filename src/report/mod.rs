pub mod investor;
pub mod overall;
pub mod startup;

use crate::data::FundingRecord;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::path::Path;

//interface shared by every view report
pub trait Report: Serialize {
    //returns the report title
    fn title(&self) -> &str;

    //prints the report as tables on stdout
    fn print(&self);

    //writes the report as pretty JSON
    fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

//a single funding event as listed in report tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRow {
    pub date: NaiveDate,
    pub startup: String,
    pub vertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    pub investors: Option<String>,
    pub amount: Option<f64>,
}

impl From<&FundingRecord> for InvestmentRow {
    fn from(record: &FundingRecord) -> Self {
        InvestmentRow {
            date: record.date,
            startup: record.startup.clone(),
            vertical: record.vertical.clone(),
            city: record.city.clone(),
            round: record.round.clone(),
            investors: record.investors_raw.clone(),
            amount: record.amount,
        }
    }
}

//prints investment rows as a table
pub fn print_investments(title: &str, rows: &[InvestmentRow]) {
    println!("{}", title);

    if rows.is_empty() {
        println!("(no data)\n");
        return;
    }

    let mut table = Table::new();
    table.add_row(Row::new(
        ["Date", "Startup", "Vertical", "City", "Round", "Investors", "Amount (Cr)"]
            .iter()
            .map(|h| Cell::new(h))
            .collect(),
    ));

    for row in rows {
        table.add_row(Row::new(vec![
            Cell::new(&row.date.to_string()),
            Cell::new(&row.startup),
            Cell::new(row.vertical.as_deref().unwrap_or("-")),
            Cell::new(row.city.as_deref().unwrap_or("-")),
            Cell::new(row.round.as_deref().unwrap_or("-")),
            Cell::new(row.investors.as_deref().unwrap_or("-")),
            Cell::new(&row.amount.map_or("-".to_string(), |a| a.to_string())),
        ]));
    }

    table.printstd();
    println!();
}

//prints a report title with an underline
pub fn print_heading(title: &str) {
    println!("{}", title);
    println!("{}\n", "=".repeat(title.chars().count()));
}
