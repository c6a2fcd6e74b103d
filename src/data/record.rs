use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    #[error("Malformed date '{value}' at line {line}")]
    MalformedDate { line: usize, value: String },
    #[error("Missing required field '{field}' at line {line}")]
    MissingField { line: usize, field: &'static str },
    #[error("Negative amount ({amount}) at line {line}")]
    NegativeAmount { line: usize, amount: f64 },
    #[error("Non-finite amount ({amount}) at line {line}")]
    NonFiniteAmount { line: usize, amount: f64 },
    #[error("Malformed amount '{value}' at line {line}")]
    MalformedAmount { line: usize, value: String },
}

//represents a single funding event for one startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundingRecord {
    pub date: NaiveDate,
    pub startup: String,
    pub vertical: Option<String>,
    pub subvertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,

    //investor names in the order they were listed
    pub investors: Vec<String>,

    //the comma-joined investor text as it appeared in the source
    pub investors_raw: Option<String>,

    //amount in crore, none when unreported
    pub amount: Option<f64>,
}

impl FundingRecord {
    //creates a new FundingRecord with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        line: usize,
        date: NaiveDate,
        startup: String,
        vertical: Option<String>,
        subvertical: Option<String>,
        city: Option<String>,
        round: Option<String>,
        investors_raw: Option<String>,
        amount: Option<f64>,
    ) -> Result<Self, DataError> {
        if startup.trim().is_empty() {
            return Err(DataError::MissingField {
                line,
                field: "startup",
            });
        }

        if let Some(amount) = amount {
            if !amount.is_finite() {
                return Err(DataError::NonFiniteAmount { line, amount });
            }
            if amount < 0.0 {
                return Err(DataError::NegativeAmount { line, amount });
            }
        }

        Ok(Self::new_unchecked(
            date,
            startup,
            vertical,
            subvertical,
            city,
            round,
            investors_raw,
            amount,
        ))
    }

    //creates a FundingRecord without validation
    #[allow(clippy::too_many_arguments)]
    pub fn new_unchecked(
        date: NaiveDate,
        startup: String,
        vertical: Option<String>,
        subvertical: Option<String>,
        city: Option<String>,
        round: Option<String>,
        investors_raw: Option<String>,
        amount: Option<f64>,
    ) -> Self {
        let investors = investors_raw
            .as_deref()
            .map(split_investors)
            .unwrap_or_default();

        FundingRecord {
            date,
            startup,
            vertical,
            subvertical,
            city,
            round,
            investors,
            investors_raw,
            amount,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    //true if the raw investor text contains the needle anywhere
    pub fn investors_contain(&self, needle: &str) -> bool {
        self.investors_raw
            .as_deref()
            .map(|raw| raw.contains(needle))
            .unwrap_or(false)
    }

    //true if the needle is exactly one of the listed investors
    pub fn has_investor(&self, name: &str) -> bool {
        self.investors.iter().any(|investor| investor == name)
    }
}

//splits a comma-joined investor field into trimmed, non-empty names
//trimming is deliberate: "A, B" lists "B", not " B"; substring matching
//still runs on the untrimmed raw text
pub fn split_investors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
