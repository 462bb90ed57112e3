//! Row normalization: turns one spreadsheet row into an [`OutputRecord`].

use crate::config::Config;
use crate::core::mapper::ColumnMapping;
use crate::models::table::cell_at;
use crate::models::{Cell, Field, InputTable, OutputRecord, PauseValue};
use crate::utils::time::duration_minutes;

pub const DEFAULT_PROJECT: &str = "Arbeit";
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Output formatting knobs. `Default` gives `DD.MM.YYYY`, `HH:MM` and "Arbeit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub default_project: String,
    pub date_format: String,
    pub time_format: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_project: DEFAULT_PROJECT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl From<&Config> for NormalizeOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            default_project: cfg.default_project.clone(),
            date_format: cfg.date_format.clone(),
            time_format: cfg.time_format.clone(),
        }
    }
}

/// Normalizes a single row, or returns `None` when the row has no date.
///
/// The presence check uses the mapped date column, falling back to the
/// first column when no date column was found.
pub fn normalize_row(
    row: &[Cell],
    mapping: &ColumnMapping,
    opts: &NormalizeOptions,
) -> Option<OutputRecord> {
    let check_idx = mapping.date.as_ref().map(|c| c.index).unwrap_or(0);
    if cell_at(row, check_idx).is_blank() {
        return None;
    }

    let mapped = |field: Field| mapping.get(field).map(|c| cell_at(row, c.index));

    Some(OutputRecord {
        date: mapped(Field::Date)
            .map(|c| format_datetime(c, &opts.date_format))
            .unwrap_or_default(),
        start: mapped(Field::Start)
            .map(|c| format_datetime(c, &opts.time_format))
            .unwrap_or_default(),
        end: mapped(Field::End)
            .map(|c| format_datetime(c, &opts.time_format))
            .unwrap_or_default(),
        pause: mapped(Field::Break).map(pause_value).unwrap_or_default(),
        project: mapped(Field::Project)
            .map(Cell::to_string)
            .unwrap_or_else(|| opts.default_project.clone()),
        description: mapped(Field::Description)
            .map(Cell::to_string)
            .unwrap_or_default(),
    })
}

/// Applies [`normalize_row`] to every row, keeping input order.
pub fn normalize_rows(
    table: &InputTable,
    mapping: &ColumnMapping,
    opts: &NormalizeOptions,
) -> Vec<OutputRecord> {
    table
        .rows
        .iter()
        .filter_map(|row| normalize_row(row, mapping, opts))
        .collect()
}

/// Date/time cells use `fmt`; anything else is passed through as text.
fn format_datetime(cell: &Cell, fmt: &str) -> String {
    match cell.as_datetime() {
        Some(dt) => dt.format(fmt).to_string(),
        None => cell.to_string(),
    }
}

/// Durations and numbers become whole minutes (truncated); the rest is kept raw.
pub fn pause_value(cell: &Cell) -> PauseValue {
    match cell {
        Cell::Duration(d) => PauseValue::Minutes(duration_minutes(*d)),
        Cell::Number(n) if n.is_finite() => PauseValue::Minutes(n.trunc() as i64),
        other => PauseValue::Raw(other.to_string()),
    }
}
