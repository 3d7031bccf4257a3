use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based position in a source file as reported by the compiler frontend.
///
/// `col` is `0` when the frontend did not report a column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub line: u32,
    pub col: u32,
}

impl Location {
    pub fn new<S: Into<String>>(path: S, line: u32, col: u32) -> Self {
        Self {
            path: path.into(),
            line,
            col,
        }
    }
}

/// Diagnostic severity, in the vocabulary compilers print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Note,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal error",
        }
    }

    /// Parse the severity word from a `file:line:col: <severity>: message` line.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "note" => Some(Severity::Note),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "fatal error" => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse problem reported by the compiler frontend.
///
/// The presence of any diagnostic turns a header's check into a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub severity: Severity,
    pub message: String,
}

/// One file pulled into a translation unit, directly or transitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeEdge {
    /// Path of the included file, as spelled by the preprocessor.
    pub included: String,
    /// File containing the `#include` directive.
    pub includer: String,
    /// Position of the `#include` directive inside `includer`.
    pub location: Location,
}

/// A header whose include graph reaches at least one forbidden file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub header: String,
    /// Offending edges, in the order the frontend reported them.
    pub evidence: Vec<IncludeEdge>,
}
