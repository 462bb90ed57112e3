use crate::config::Config;
use crate::core::mapper::{ColumnMapping, map_columns};
use crate::core::normalizer::{NormalizeOptions, normalize_rows};
use crate::errors::AppResult;
use crate::export::{default_output_path, ensure_writable, write_csv};
use crate::import::read_first_sheet;
use crate::models::{Field, InputTable, OUTPUT_HEADERS, OutputRecord};
use crate::ui::messages::{header, plain, warning};
use crate::utils::table::Table;
use std::path::{Path, PathBuf};

/// Result of mapping + normalizing a table, before anything is written.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub mapping: ColumnMapping,
    pub records: Vec<OutputRecord>,
    /// Rows dropped because their date cell was blank.
    pub skipped: usize,
}

pub struct ConvertLogic;

impl ConvertLogic {
    /// Converte un foglio di ore lavorate in CSV.
    ///
    /// - `input`: spreadsheet to read (first worksheet)
    /// - `output`: target CSV; `None` → `<stem>_converted.csv` next to `input`
    /// - `force`: overwrite an existing output without asking
    ///
    /// Returns the path the CSV was written to.
    pub fn convert(
        input: &Path,
        output: Option<&Path>,
        cfg: &Config,
        force: bool,
    ) -> AppResult<PathBuf> {
        let table = read_first_sheet(input)?;
        report_columns(&table.headers);

        let conversion = Self::convert_table(&table, &NormalizeOptions::from(cfg));
        report_mapping(&conversion.mapping);

        if conversion.mapping.date.is_none() {
            warning("No date column found: rows are filtered on the first column and Datum stays empty.");
        }

        let out_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        ensure_writable(&out_path, force)?;
        write_csv(&out_path, &conversion.records)?;

        if conversion.skipped > 0 {
            plain(format!("Skipped {} rows without a date", conversion.skipped));
        }
        report_preview(&conversion.records, cfg.preview_rows);

        Ok(out_path)
    }

    /// Reads `input` and prints the header list and resolved mapping only.
    pub fn inspect(input: &Path) -> AppResult<ColumnMapping> {
        let table = read_first_sheet(input)?;
        report_columns(&table.headers);

        let mapping = map_columns(&table.headers);
        report_mapping(&mapping);

        Ok(mapping)
    }

    /// Pure part of a conversion: infer the mapping once, normalize all rows.
    pub fn convert_table(table: &InputTable, opts: &NormalizeOptions) -> Conversion {
        let mapping = map_columns(&table.headers);
        let records = normalize_rows(table, &mapping, opts);
        let skipped = table.len() - records.len();

        Conversion {
            mapping,
            records,
            skipped,
        }
    }
}

fn report_columns(headers: &[String]) {
    header("Excel columns found:");
    for (i, col) in headers.iter().enumerate() {
        plain(format!("  {i}: {col}"));
    }
}

fn report_mapping(mapping: &ColumnMapping) {
    header("Mapped columns:");
    for field in Field::ALL {
        plain(format!("  {}: {}", field.label(), mapping.describe(field)));
    }
}

fn report_preview(records: &[OutputRecord], rows: usize) {
    if rows == 0 || records.is_empty() {
        return;
    }

    header("First few entries:");
    let mut table = Table::new(&OUTPUT_HEADERS);
    for record in records.iter().take(rows) {
        table.add_row(record.to_row());
    }
    plain(table.render().trim_end());
}
