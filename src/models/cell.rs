//! Typed spreadsheet cell.

use crate::utils::time::format_duration;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

/// Day that time-only values are placed on when read back as date/time.
pub fn time_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 31).unwrap_or(NaiveDate::MIN)
}

/// Serial 0 (1900 system, with and without the leap-year shift) or
/// 1904-01-01: the cell only carried a time of day.
fn is_base_date(date: NaiveDate) -> bool {
    let base = time_base_date();
    date == base
        || date.succ_opt() == Some(base)
        || Some(date) == NaiveDate::from_ymd_opt(1904, 1, 1)
}

/// A single cell value as read from the worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Empty cell, whitespace-only text or a spreadsheet error (`#N/A`, ...).
    Blank,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Any date, time or date+time value. Time-only values sit on the
    /// spreadsheet epoch day.
    DateTime(NaiveDateTime),
    /// Elapsed time (`[h]:mm` formatted cells, ISO durations).
    Duration(TimeDelta),
}

impl Cell {
    /// Builds a text cell, folding empty/whitespace-only text into `Blank`.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Blank
        } else {
            Cell::Text(s)
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// True for date/time cells that hold only a time of day (`08:00`, `0:30`).
    pub fn is_time_of_day(&self) -> bool {
        matches!(self, Cell::DateTime(dt) if is_base_date(dt.date()))
    }

    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

/// Raw text rendering, used whenever a field has no specific formatting rule.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => f.write_str(&format_number(*n)),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::DateTime(dt) if self.is_time_of_day() => write!(f, "{}", dt.format("%H:%M:%S")),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Duration(d) => f.write_str(&format_duration(*d)),
        }
    }
}

/// `30.0` → `"30"`, `7.5` → `"7.5"`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
