// src/export/mod.rs

mod writer;
mod fs_utils;

pub use writer::{write_csv, write_csv_to};
pub use fs_utils::{default_output_path, ensure_writable};

use crate::ui::messages::{saved, success};
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(count: usize, path: &Path) {
    success(format!("Successfully converted {count} entries"));
    saved(format!("Output saved to: {}", path.display()));
}
