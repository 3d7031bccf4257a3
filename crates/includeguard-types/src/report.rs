use crate::{Diagnostic, Violation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for includeguard reports.
pub const SCHEMA_REPORT_V1: &str = "includeguard.report.v1";

/// Run verdict. Maps one-to-one onto the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    ParseError,
    Fail,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::ParseError => 1,
            Verdict::Fail => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The header that stopped the run, with everything the frontend reported for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailureReport {
    pub header: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeguardReport {
    pub schema: String,
    pub tool: ToolMeta,

    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    pub verdict: Verdict,
    pub headers_checked: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_failure: Option<ParseFailureReport>,

    #[serde(default)]
    pub violations: Vec<Violation>,
}

impl IncludeguardReport {
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}
