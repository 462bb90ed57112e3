// src/import/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::cell::time_base_date;
use crate::models::{Cell, InputTable};
use crate::utils::time::parse_iso_duration;
use calamine::{Data, DataType, ExcelDateTime, Range, Reader, open_workbook_auto};
use chrono::{DurationRound, TimeDelta};
use std::io;
use std::path::Path;

/// Reads the first worksheet of `path` into an [`InputTable`].
///
/// The first row of the used range is the header row. The workbook type is
/// detected from the file extension (xlsx, xlsm, xlsb, xls, ods).
pub fn read_first_sheet(path: &Path) -> AppResult<InputTable> {
    if !path.is_file() {
        return Err(AppError::from(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Input file not found: {}", path.display()),
        )));
    }

    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::NoWorksheet(path.display().to_string()))??;

    if range.is_empty() {
        return Err(AppError::NoWorksheet(path.display().to_string()));
    }

    Ok(range_to_table(&range))
}

/// Splits a worksheet range into header names and typed data rows.
pub fn range_to_table(range: &Range<Data>) -> InputTable {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|first| {
            first
                .iter()
                .enumerate()
                .map(|(idx, data)| header_name(idx, data))
                .collect()
        })
        .unwrap_or_default();

    let rows: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    InputTable::new(headers, rows)
}

/// Header text; unnamed columns get a positional placeholder.
fn header_name(idx: usize, data: &Data) -> String {
    let cell = to_cell(data);
    if cell.is_blank() {
        format!("Unnamed: {idx}")
    } else {
        cell.to_string()
    }
}

/// Maps a calamine value onto the tagged [`Cell`] type.
pub fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Blank,
        Data::String(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => excel_datetime_to_cell(dt),
        Data::DateTimeIso(s) => data
            .as_datetime()
            .or_else(|| data.as_time().map(|t| time_base_date().and_time(t)))
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::text(s.as_str())),
        // calamine's as_duration() does not read ISO 8601 durations
        Data::DurationIso(s) => parse_iso_duration(s)
            .map(Cell::Duration)
            .unwrap_or_else(|| Cell::text(s.as_str())),
    }
}

/// Serials are fractions of a day, so values are snapped to whole seconds
/// (`16:30` must not come back as `16:29:59.999`).
fn excel_datetime_to_cell(dt: &ExcelDateTime) -> Cell {
    let converted = if dt.is_duration() {
        dt.as_duration()
            .and_then(snap_duration)
            .map(Cell::Duration)
    } else {
        dt.as_datetime()
            .map(|v| v.duration_round(TimeDelta::seconds(1)).unwrap_or(v))
            .map(Cell::DateTime)
    };
    converted.unwrap_or_else(|| Cell::Number(dt.as_f64()))
}

fn snap_duration(d: TimeDelta) -> Option<TimeDelta> {
    let secs = (d.num_milliseconds() as f64 / 1000.0).round() as i64;
    TimeDelta::try_seconds(secs)
}
