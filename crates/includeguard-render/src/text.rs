use includeguard_types::{Diagnostic, IncludeguardReport, ParseFailureReport, Violation};

/// Classic stderr rendering of a finished run. Empty for a clean run.
pub fn render_text(report: &IncludeguardReport) -> Vec<String> {
    match &report.parse_failure {
        Some(failure) => render_parse_failure(failure),
        None => render_violations(&report.violations),
    }
}

/// `Error parsing "HEADER":` followed by one indented line per diagnostic.
pub fn render_parse_failure(failure: &ParseFailureReport) -> Vec<String> {
    let mut out = Vec::with_capacity(failure.diagnostics.len() + 1);
    out.push(format!("Error parsing \"{}\":", failure.header));
    out.extend(failure.diagnostics.iter().map(diagnostic_line));
    out
}

/// `Forbidden include(s) in "HEADER":` followed by one indented line per offending edge.
pub fn render_violations(violations: &[Violation]) -> Vec<String> {
    let mut out = Vec::new();
    for v in violations {
        out.push(format!("Forbidden include(s) in \"{}\":", v.header));
        for edge in &v.evidence {
            out.push(format!(
                "  \"{}\": line {}, column {}: {}",
                edge.includer, edge.location.line, edge.location.col, edge.included
            ));
        }
    }
    out
}

fn diagnostic_line(d: &Diagnostic) -> String {
    match &d.location {
        Some(loc) => format!(
            "  \"{}\": line {}, column {}: {}",
            loc.path, loc.line, loc.col, d.message
        ),
        None => format!("  {}: {}", d.severity, d.message),
    }
}
