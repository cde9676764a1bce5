//! Text line to patterns.
//!
//! Recognized forms, tried in order:
//! 1. `{` / `}` shortcuts for Introspection / Retrospection
//! 2. `Numerical Reflection: <value>` or a bare number
//! 3. a registered display name (case-insensitive)
//! 4. `Bookkeeper's Gambit: <visual>`
//! 5. raw `<signature>,<DIRECTION>`

use std::fmt;

use hex_codec::gambit::{self, GAMBIT_LINE_PREFIX};
use hex_codec::number::parse_number_text;
use hex_diagnostic::ReportKind;
use hex_ir::Pattern;

use crate::special::{Special, INTROSPECTION, RETROSPECTION};
use crate::{PatternRegistry, CLOSE_BRACKET, OPEN_BRACKET};

/// Comment marker. Everything from it to the end of the line is ignored.
const COMMENT: &str = "//";

/// Why a line produced no patterns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LineError {
    /// Names a per-world pattern that has not been solved.
    UnresolvedPerWorld { name: String },
    /// A number the encoder could not expand.
    UnencodableNumber { value: String },
    /// A gambit line with characters other than `-` and `v`.
    InvalidGambit { visual: String },
    /// Matches none of the line grammars.
    Unrecognized { line: String },
}

impl LineError {
    /// The diagnostic this error is reported as.
    pub fn report_kind(&self) -> ReportKind {
        match self {
            LineError::UnresolvedPerWorld { name } => {
                ReportKind::UnresolvedPerWorldPattern { name: name.clone() }
            }
            LineError::UnencodableNumber { value } => {
                ReportKind::UnencodableNumber { value: value.clone() }
            }
            LineError::InvalidGambit { visual } => ReportKind::UnrecognizedLine {
                line: format!("{GAMBIT_LINE_PREFIX} {visual}"),
            },
            LineError::Unrecognized { line } => {
                ReportKind::UnrecognizedLine { line: line.clone() }
            }
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::UnresolvedPerWorld { name } => {
                write!(f, "great spell `{name}` has not been unlocked in this world")
            }
            LineError::UnencodableNumber { value } => write!(f, "cannot encode number `{value}`"),
            LineError::InvalidGambit { visual } => {
                write!(f, "invalid Bookkeeper's Gambit mask `{visual}`")
            }
            LineError::Unrecognized { line } => write!(f, "unrecognized pattern `{line}`"),
        }
    }
}

impl std::error::Error for LineError {}

/// Remove a `//` comment and surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT).map_or(line, |(code, _)| code).trim()
}

impl PatternRegistry {
    /// Parse one text line into the patterns it denotes.
    ///
    /// Blank and comment-only lines give an empty list.
    pub fn parse_line(&self, line: &str) -> Result<Vec<Pattern>, LineError> {
        let line = strip_comment(line);
        if line.is_empty() {
            return Ok(Vec::new());
        }

        if line == OPEN_BRACKET {
            return Ok(special_pattern(&INTROSPECTION).into_iter().collect());
        }
        if line == CLOSE_BRACKET {
            return Ok(special_pattern(&RETROSPECTION).into_iter().collect());
        }

        if let Some(value) = parse_number_text(line) {
            let tables = self.tables.read();
            return self
                .encoder
                .encode(value, &tables.operators)
                .map(|components| components.into_iter().map(|c| c.pattern).collect())
                .ok_or_else(|| LineError::UnencodableNumber {
                    value: line.to_string(),
                });
        }

        if let Some(info) = self.info_named(line) {
            return match self.pattern_of(&info) {
                Some(pattern) => Ok(vec![pattern]),
                None => Err(LineError::UnresolvedPerWorld { name: info.name }),
            };
        }

        if let Some(visual) = strip_prefix_ignore_case(line, GAMBIT_LINE_PREFIX) {
            let visual = visual.trim();
            return gambit::encode_visual(visual)
                .map(|pattern| vec![pattern])
                .ok_or_else(|| LineError::InvalidGambit {
                    visual: visual.to_string(),
                });
        }

        line.parse::<Pattern>()
            .map(|pattern| vec![pattern])
            .map_err(|_| LineError::Unrecognized {
                line: line.to_string(),
            })
    }
}

fn special_pattern(special: &Special) -> Option<Pattern> {
    Pattern::from_signature(special.start_dir, special.signature)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
