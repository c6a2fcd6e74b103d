use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

//one (key, value) pair of an aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: f64,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Entry {
            key: key.into(),
            value,
        }
    }
}

//a named, ordered collection of (key, value) pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl AggregationResult {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        AggregationResult {
            name: name.into(),
            entries,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.value)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    //sorts by value descending; equal values keep their current order
    pub fn sorted_desc(mut self) -> Self {
        self.entries
            .sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        self
    }

    //sorts by key ascending
    pub fn sorted_by_key(mut self) -> Self {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    //keeps at most the first n entries
    pub fn head(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    //prints the result as a two-column table
    pub fn pretty_print_table(&self, value_header: &str) {
        println!("{}", self.name);

        if self.is_empty() {
            println!("(no data)\n");
            return;
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("Key"), Cell::new(value_header)]));

        for entry in &self.entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.key),
                Cell::new(&format_value(entry.value)),
            ]));
        }

        table.printstd();
        println!();
    }
}

//formats a value without a fractional part when it is whole
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
