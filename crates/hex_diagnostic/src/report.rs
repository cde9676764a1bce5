use std::fmt;

/// Category of a reported problem. Part of the deduplication key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReportKind {
    /// A per-world pattern whose concrete form is not yet known.
    UnresolvedPerWorldPattern { name: String },
    /// A line that matched none of the recognized grammars.
    UnrecognizedLine { line: String },
    /// A numeric literal that could not be expanded into patterns.
    UnencodableNumber { value: String },
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::UnresolvedPerWorldPattern { name } => {
                write!(f, "great spell `{name}` has not been unlocked in this world")
            }
            ReportKind::UnrecognizedLine { line } => write!(f, "unrecognized pattern `{line}`"),
            ReportKind::UnencodableNumber { value } => {
                write!(f, "cannot encode number `{value}`")
            }
        }
    }
}

/// A problem accepted by the reporter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Report {
    /// Label of the context the report was made in.
    pub context: String,
    /// File (or other source) identifier.
    pub file: String,
    pub kind: ReportKind,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.kind)
    }
}
