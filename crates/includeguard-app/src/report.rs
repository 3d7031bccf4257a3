use anyhow::Context;
use includeguard_domain::{CheckOutcome, RunReport};
use includeguard_types::{
    IncludeguardReport, ParseFailureReport, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Wrap an engine result in the `includeguard.report.v1` envelope.
pub fn build_report(
    run: RunReport,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> IncludeguardReport {
    let (verdict, parse_failure, violations) = match run.outcome {
        CheckOutcome::AllClean => (Verdict::Pass, None, Vec::new()),
        CheckOutcome::ParseFailed {
            header,
            diagnostics,
        } => (
            Verdict::ParseError,
            Some(ParseFailureReport {
                header,
                diagnostics,
            }),
            Vec::new(),
        ),
        CheckOutcome::PolicyViolations(violations) => (Verdict::Fail, None, violations),
    };

    IncludeguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "includeguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        headers_checked: run.headers_checked,
        parse_failure,
        violations,
    }
}

pub fn serialize_report(report: &IncludeguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}
