mod common;
use common::{Val, sample_timesheet, setup_dir, write_workbook};

use calamine::Data;
use chrono::{NaiveDate, TimeDelta, Timelike};
use wh2csv::errors::AppError;
use wh2csv::import::{read_first_sheet, to_cell};
use wh2csv::models::Cell;

#[test]
fn test_reads_headers_and_typed_cells() {
    let dir = setup_dir("import_typed");
    let path = dir.join("hours.xlsx");
    sample_timesheet(&path);

    let table = read_first_sheet(&path).expect("read workbook");

    assert_eq!(
        table.headers,
        vec!["Datum", "Beginn", "Ende", "Pausenzeit", "Projekt", "Notiz"]
    );
    assert_eq!(table.len(), 3);

    let first = &table.rows[0];
    match &first[0] {
        Cell::DateTime(dt) => assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()),
        other => panic!("expected date, got {other:?}"),
    }
    match &first[2] {
        Cell::DateTime(dt) => assert_eq!((dt.hour(), dt.minute(), dt.second()), (16, 30, 0)),
        other => panic!("expected time, got {other:?}"),
    }
    assert_eq!(first[3], Cell::Duration(TimeDelta::minutes(75)));
    assert_eq!(first[4], Cell::Text("ProjectX".to_string()));

    assert!(table.rows[1][0].is_blank());
    assert_eq!(table.rows[2][3], Cell::Number(30.0));
}

#[test]
fn test_blank_headers_get_placeholder_names() {
    let dir = setup_dir("import_unnamed");
    let path = dir.join("unnamed.xlsx");
    write_workbook(
        &path,
        &["Datum", "", "Projekt"],
        &[vec![Val::Text("01.03.2025"), Val::Text("x"), Val::Text("P")]],
    );

    let table = read_first_sheet(&path).expect("read workbook");
    assert_eq!(table.headers, vec!["Datum", "Unnamed: 1", "Projekt"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = setup_dir("import_missing");
    let err = read_first_sheet(&dir.join("nope.xlsx")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_not_a_spreadsheet_fails() {
    let dir = setup_dir("import_garbage");
    let path = dir.join("garbage.xlsx");
    std::fs::write(&path, b"this is not a zip file").unwrap();

    let err = read_first_sheet(&path).unwrap_err();
    assert!(matches!(err, AppError::Spreadsheet(_)));
}

#[test]
fn test_time_of_day_cells_render_without_base_date() {
    use wh2csv::core::{ConvertLogic, NormalizeOptions};
    use wh2csv::models::PauseValue;

    let dir = setup_dir("import_time_of_day");
    let path = dir.join("times.xlsx");
    write_workbook(
        &path,
        &["Datum", "Pause", "Notiz"],
        &[vec![Val::Date(2025, 3, 3), Val::Time(0, 30), Val::Time(8, 0)]],
    );

    let table = read_first_sheet(&path).expect("read workbook");
    assert!(table.rows[0][1].is_time_of_day());
    assert!(!table.rows[0][0].is_time_of_day());

    let conversion = ConvertLogic::convert_table(&table, &NormalizeOptions::default());
    let rec = &conversion.records[0];

    assert_eq!(rec.date, "03.03.2025");
    assert_eq!(rec.pause, PauseValue::Raw("00:30:00".to_string()));
    assert_eq!(rec.description, "08:00:00");
}

#[test]
fn test_iso_datetime_cells_from_opendocument() {
    let cell = to_cell(&Data::DateTimeIso("2025-03-01T08:00:00".to_string()));
    let expected = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    assert_eq!(cell, Cell::DateTime(expected));

    let cell = to_cell(&Data::DateTimeIso("08:15:00".to_string()));
    assert!(cell.is_time_of_day());
    assert_eq!(cell.to_string(), "08:15:00");

    let cell = to_cell(&Data::DateTimeIso("not a date".to_string()));
    assert_eq!(cell, Cell::Text("not a date".to_string()));
}

#[test]
fn test_iso_duration_cells_from_opendocument() {
    let cell = to_cell(&Data::DurationIso("PT1H15M".to_string()));
    assert_eq!(cell, Cell::Duration(TimeDelta::minutes(75)));

    let cell = to_cell(&Data::DurationIso("PT5X".to_string()));
    assert_eq!(cell, Cell::Text("PT5X".to_string()));
}
