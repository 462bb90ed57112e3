// src/export/writer.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::{OUTPUT_HEADERS, OutputRecord};
use crate::ui::messages::info;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Writes the records to `path` as UTF-8 CSV.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> AppResult<()> {
    info(format!("Writing CSV: {}", path.display()));

    let wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_records(wtr, records)?;

    notify_export_success(records.len(), path);
    Ok(())
}

/// Writes header + records to any writer.
///
/// The header row is emitted explicitly so that it is present even when
/// there are no records.
pub fn write_csv_to<W: Write>(writer: W, records: &[OutputRecord]) -> AppResult<()> {
    let wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    write_records(wtr, records)
}

fn write_records<W: Write>(mut wtr: csv::Writer<W>, records: &[OutputRecord]) -> AppResult<()> {
    wtr.write_record(OUTPUT_HEADERS)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}
