// src/models/record.rs

use serde::{Serialize, Serializer};
use std::fmt;

/// Output header, in column order.
pub const OUTPUT_HEADERS: [&str; 6] = ["Datum", "Start", "Ende", "Pause", "Projekt", "Beschreibung"];

/// Break length: whole minutes when it could be interpreted, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseValue {
    Minutes(i64),
    Raw(String),
}

impl Default for PauseValue {
    fn default() -> Self {
        PauseValue::Minutes(0)
    }
}

impl fmt::Display for PauseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PauseValue::Minutes(m) => write!(f, "{m}"),
            PauseValue::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for PauseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PauseValue::Minutes(m) => serializer.serialize_i64(*m),
            PauseValue::Raw(s) => serializer.serialize_str(s),
        }
    }
}

/// One normalized timesheet line. Field order is the CSV column order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OutputRecord {
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "Ende")]
    pub end: String,
    #[serde(rename = "Pause")]
    pub pause: PauseValue,
    #[serde(rename = "Projekt")]
    pub project: String,
    #[serde(rename = "Beschreibung")]
    pub description: String,
}

impl OutputRecord {
    /// Values as strings, in `OUTPUT_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.pause.to_string(),
            self.project.clone(),
            self.description.clone(),
        ]
    }

    /// `(header, value)` pairs, in `OUTPUT_HEADERS` order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        OUTPUT_HEADERS.into_iter().zip(self.to_row()).collect()
    }
}
