use std::fmt;

/// The semantic columns a timesheet row is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Start,
    End,
    Break,
    Project,
    Description,
}

/// Header synonyms per field, matched as case-sensitive substrings.
/// Order of the table is the order fields are resolved and reported in.
pub const FIELD_CANDIDATES: [(Field, &[&str]); 6] = [
    (Field::Date, &["Datum", "Date", "Tag"]),
    (Field::Start, &["Start", "Von", "Beginn", "Start Time"]),
    (Field::End, &["Ende", "Bis", "End Time"]),
    (Field::Break, &["Pause", "Break", "Pausenzeit"]),
    (Field::Project, &["Projekt", "Project", "Aufgabe"]),
    (
        Field::Description,
        &["Beschreibung", "Description", "Notiz", "Note"],
    ),
];

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Date,
        Field::Start,
        Field::End,
        Field::Break,
        Field::Project,
        Field::Description,
    ];

    pub fn candidates(self) -> &'static [&'static str] {
        FIELD_CANDIDATES
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, c)| *c)
            .unwrap_or(&[])
    }

    /// True if any synonym of this field occurs in `header`.
    pub fn matches(self, header: &str) -> bool {
        self.candidates().iter().any(|c| header.contains(c))
    }

    /// English label used in the mapping report.
    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Start => "Start",
            Field::End => "End",
            Field::Break => "Break",
            Field::Project => "Project",
            Field::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
