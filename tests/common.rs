#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn wh() -> Command {
    cargo_bin_cmd!("wh2csv")
}

/// Create an empty, test-specific directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("wh2csv_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of a configuration file that does not exist (→ defaults)
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

/// Cell content for generated workbooks
#[derive(Clone, Debug)]
pub enum Val {
    Text(&'static str),
    Num(f64),
    /// Date formatted as dd.mm.yyyy
    Date(i32, u32, u32),
    /// Time of day formatted as hh:mm
    Time(u32, u32),
    /// Elapsed time formatted as [h]:mm
    Elapsed(u32, u32),
    Empty,
}

fn excel_serial(y: i32, m: u32, d: u32) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    (date - epoch).num_days() as f64
}

fn day_fraction(h: u32, m: u32) -> f64 {
    (h * 60 + m) as f64 / 1440.0
}

/// Write a single-sheet workbook: first row headers, then data rows
pub fn write_workbook(path: &Path, headers: &[&str], rows: &[Vec<Val>]) {
    let mut workbook = Workbook::new();
    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    let time_fmt = Format::new().set_num_format("hh:mm");
    let elapsed_fmt = Format::new().set_num_format("[h]:mm");

    let sheet = workbook.add_worksheet();

    for (col, h) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *h).unwrap();
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, val) in row.iter().enumerate() {
            let c = c as u16;
            match val {
                Val::Text(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                Val::Num(n) => {
                    sheet.write_number(r, c, *n).unwrap();
                }
                Val::Date(y, m, d) => {
                    sheet
                        .write_number_with_format(r, c, excel_serial(*y, *m, *d), &date_fmt)
                        .unwrap();
                }
                Val::Time(h, m) => {
                    sheet
                        .write_number_with_format(r, c, day_fraction(*h, *m), &time_fmt)
                        .unwrap();
                }
                Val::Elapsed(h, m) => {
                    sheet
                        .write_number_with_format(r, c, day_fraction(*h, *m), &elapsed_fmt)
                        .unwrap();
                }
                Val::Empty => {}
            }
        }
    }

    workbook.save(path).expect("save workbook");
}

/// The timesheet used by most end-to-end tests
pub fn sample_timesheet(path: &Path) {
    write_workbook(
        path,
        &["Datum", "Beginn", "Ende", "Pausenzeit", "Projekt", "Notiz"],
        &[
            vec![
                Val::Date(2025, 3, 3),
                Val::Time(9, 0),
                Val::Time(16, 30),
                Val::Elapsed(1, 15),
                Val::Text("ProjectX"),
                Val::Text("standup"),
            ],
            vec![
                Val::Empty,
                Val::Time(9, 0),
                Val::Time(12, 0),
                Val::Num(30.0),
                Val::Text("ProjectX"),
                Val::Text("no date"),
            ],
            vec![
                Val::Date(2025, 3, 4),
                Val::Time(7, 30),
                Val::Time(13, 30),
                Val::Num(30.0),
                Val::Text("Intern"),
                Val::Text("review, planning"),
            ],
        ],
    );
}
