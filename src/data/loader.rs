use crate::data::dataset::Dataset;
use crate::data::record::{DataError, FundingRecord};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

//date layouts accepted in the date column
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

//amount cells read as missing
const MISSING_MARKERS: &[&str] = &["nan", "na", "n/a", "null", "none", "-"];

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    startup: Option<String>,
    #[serde(default)]
    vertical: Option<String>,
    #[serde(default)]
    subvertical: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    investors: Option<String>,
    #[serde(default)]
    round: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

//loads a funding dataset from a csv file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).context(format!("Failed to open CSV file: {:?}", path))?;

    let dataset = load_from_reader(file).context(format!("Failed to load {:?}", path))?;
    log::info!("loaded {} funding records from {:?}", dataset.len(), path);

    Ok(dataset)
}

//loads a funding dataset from any csv source, keeping row order
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 2;
        let row: CsvRecord =
            result.context(format!("Failed to parse CSV record at line {}", line))?;

        let date_text = non_empty(row.date).ok_or(DataError::MissingField {
            line,
            field: "date",
        })?;
        let date = parse_date(&date_text).ok_or(DataError::MalformedDate {
            line,
            value: date_text.clone(),
        })?;

        let startup = non_empty(row.startup).ok_or(DataError::MissingField {
            line,
            field: "startup",
        })?;

        let amount = parse_amount(line, row.amount.as_deref())?;
        if amount.is_none() {
            log::debug!("line {}: no amount reported for {}", line, startup);
        }

        let record = FundingRecord::new(
            line,
            date,
            startup,
            non_empty(row.vertical),
            non_empty(row.subvertical),
            non_empty(row.city),
            non_empty(row.round),
            non_empty(row.investors),
            amount,
        )?;

        records.push(record);
    }

    Ok(Dataset::new(records))
}

//parses a date in any of the accepted layouts
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|datetime| datetime.date())
        })
}

//parses an amount cell; blank cells, missing markers and NaN are none
pub fn parse_amount(line: usize, text: Option<&str>) -> Result<Option<f64>, DataError> {
    let text = match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };

    if MISSING_MARKERS.contains(&text.to_lowercase().as_str()) {
        return Ok(None);
    }

    let amount: f64 = text.parse().map_err(|_| DataError::MalformedAmount {
        line,
        value: text.to_string(),
    })?;

    if amount.is_nan() {
        return Ok(None);
    }
    if amount.is_infinite() {
        return Err(DataError::NonFiniteAmount { line, amount });
    }

    Ok(Some(amount))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,startup,vertical,subvertical,city,investors,round,amount\n";

    #[test]
    fn test_parse_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2019, 1, 9).unwrap();
        assert_eq!(parse_date("2019-01-09"), Some(expected));
        assert_eq!(parse_date("09/01/2019"), Some(expected));
        assert_eq!(parse_date("2019-01-09 00:00:00"), Some(expected));
        assert_eq!(parse_date("2019-13-09"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_load_keeps_row_order_and_optional_fields() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "2020-01-09,Byju's,EdTech,Online Tutoring,Bengaluru,\"Sequoia, Tiger\",Series F,3000\n",
            "2019-05-02,Acme,,,Mumbai,,Seed,\n"
        );

        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let records = dataset.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].startup, "Byju's");
        assert_eq!(records[0].investors, vec!["Sequoia", "Tiger"]);
        assert_eq!(records[0].amount, Some(3000.0));
        assert_eq!(records[1].vertical, None);
        assert_eq!(records[1].investors_raw, None);
        assert_eq!(records[1].amount, None);
    }

    #[test]
    fn test_malformed_date_fails_fast() {
        let csv = format!("{}{}", HEADER, "not-a-date,Acme,Tech,,Pune,X,Seed,1\n");

        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        let data_err = err.downcast_ref::<DataError>().unwrap();

        assert_eq!(
            *data_err,
            DataError::MalformedDate {
                line: 2,
                value: "not-a-date".to_string()
            }
        );
    }

    #[test]
    fn test_missing_startup_is_rejected() {
        let csv = format!("{}{}", HEADER, "2019-01-01,,Tech,,Pune,X,Seed,1\n");

        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MissingField { field: "startup", line: 2 })
        ));
    }

    #[test]
    fn test_nan_amount_is_missing() {
        let csv = format!(
            "{}{}{}{}",
            HEADER,
            "2019-01-01,Acme,Tech,,Pune,X,Seed,10\n",
            "2019-02-01,Beta,Tech,,Pune,X,Seed,NaN\n",
            "2019-03-01,Gamma,Tech,,Pune,X,Seed,NA\n"
        );

        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let records = dataset.records();

        assert_eq!(records[1].amount, None);
        assert_eq!(records[2].amount, None);

        let engine = crate::engine::AggregationEngine::new(&dataset);
        assert_eq!(engine.total_invested(), 10.0);
        assert_eq!(
            engine
                .top_n(crate::engine::Dimension::Vertical, 5, crate::engine::Measure::Total)
                .get("Tech"),
            Some(10.0)
        );
    }

    #[test]
    fn test_infinite_or_garbled_amount_is_rejected() {
        let csv = format!("{}{}", HEADER, "2019-01-01,Acme,Tech,,Pune,X,Seed,inf\n");
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::NonFiniteAmount { line: 2, .. })
        ));

        let csv = format!("{}{}", HEADER, "2019-01-01,Acme,Tech,,Pune,X,Seed,ten\n");
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::MalformedAmount {
                line: 2,
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let csv = format!("{}{}", HEADER, "2019-01-01,Acme,Tech,,Pune,X,Seed,-4\n");

        assert!(load_from_reader(csv.as_bytes()).is_err());
    }
}
