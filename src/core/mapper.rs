//! Column inference: which spreadsheet column holds which timesheet field.

use crate::models::Field;

/// A resolved column: position in the row and its header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    pub index: usize,
    pub header: String,
}

/// Field → column assignment, computed once per conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: Option<MappedColumn>,
    pub start: Option<MappedColumn>,
    pub end: Option<MappedColumn>,
    pub break_time: Option<MappedColumn>,
    pub project: Option<MappedColumn>,
    pub description: Option<MappedColumn>,
}

impl ColumnMapping {
    pub fn get(&self, field: Field) -> Option<&MappedColumn> {
        match field {
            Field::Date => self.date.as_ref(),
            Field::Start => self.start.as_ref(),
            Field::End => self.end.as_ref(),
            Field::Break => self.break_time.as_ref(),
            Field::Project => self.project.as_ref(),
            Field::Description => self.description.as_ref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<MappedColumn> {
        match field {
            Field::Date => &mut self.date,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Break => &mut self.break_time,
            Field::Project => &mut self.project,
            Field::Description => &mut self.description,
        }
    }

    /// Header name for `field`, or `"None"` (report format).
    pub fn describe(&self, field: Field) -> String {
        self.get(field)
            .map(|c| c.header.clone())
            .unwrap_or_else(|| "None".to_string())
    }
}

/// Resolves every field independently: the first header (in column order)
/// containing any of the field's synonyms wins. Headers are not consumed, so
/// one header can end up assigned to more than one field.
pub fn map_columns<S: AsRef<str>>(headers: &[S]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();

    for field in Field::ALL {
        *mapping.slot(field) = find_column(headers, field);
    }

    mapping
}

fn find_column<S: AsRef<str>>(headers: &[S], field: Field) -> Option<MappedColumn> {
    headers
        .iter()
        .position(|h| field.matches(h.as_ref()))
        .map(|index| MappedColumn {
            index,
            header: headers[index].as_ref().to_string(),
        })
}
