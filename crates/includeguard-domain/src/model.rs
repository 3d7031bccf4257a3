use camino::Utf8PathBuf;
use includeguard_types::{Diagnostic, IncludeEdge, Violation, ids};
use std::collections::BTreeSet;

/// A header discovered by the scanner, paired with the allow-exceptions resolved for its path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateHeader {
    pub path: Utf8PathBuf,
    pub allowed: BTreeSet<String>,
}

impl CandidateHeader {
    pub fn new<P: Into<Utf8PathBuf>>(path: P, allowed: BTreeSet<String>) -> Self {
        Self {
            path: path.into(),
            allowed,
        }
    }
}

/// One-line translation unit whose only content is `#include <header>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticUnit {
    /// Name the frontend should give the unit itself.
    pub name: String,
    pub header: String,
    pub source: String,
    /// Compiler arguments followed by the discovered system include flags.
    pub args: Vec<String>,
}

impl SyntheticUnit {
    pub fn for_header(header: &str, args: &[String]) -> Self {
        Self {
            name: ids::SYNTHETIC_UNIT_NAME.to_string(),
            header: header.to_string(),
            source: format!("#include <{header}>\n"),
            args: args.to_vec(),
        }
    }
}

/// What the frontend produced for one synthetic unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    pub diagnostics: Vec<Diagnostic>,
    /// Every transitively included file, in discovery order.
    pub includes: Vec<IncludeEdge>,
}

/// Result of checking a single header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderVerdict {
    Clean,
    Violation(Violation),
    ParseFailed(Vec<Diagnostic>),
}

/// Terminal result of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    AllClean,
    /// The first header that failed to parse; nothing after it was checked.
    ParseFailed {
        header: String,
        diagnostics: Vec<Diagnostic>,
    },
    /// Never empty.
    PolicyViolations(Vec<Violation>),
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::AllClean => 0,
            CheckOutcome::ParseFailed { .. } => 1,
            CheckOutcome::PolicyViolations(_) => 2,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            CheckOutcome::PolicyViolations(v) => v,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: CheckOutcome,
    /// Headers handed to the frontend, including a header that failed to parse.
    pub headers_checked: u32,
}
