// src/import/mod.rs

mod xlsx;

pub use xlsx::{range_to_table, read_first_sheet, to_cell};
