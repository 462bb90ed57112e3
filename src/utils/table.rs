//! Table rendering utilities for CLI previews.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Columns start as wide as their header and grow with `add_row`.
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: h.as_ref().width(),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, value) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(value.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &header);

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, _)| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            self.push_line(&mut out, &cells);
        }

        out
    }

    // `{:<width$}` counts chars, not terminal columns, so pad by display width.
    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let line: Vec<String> = self
            .columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| {
                let pad = col.width.saturating_sub(cell.width());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
}
