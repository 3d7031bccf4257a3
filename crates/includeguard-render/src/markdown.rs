use includeguard_types::{IncludeguardReport, Verdict};

pub fn render_markdown(report: &IncludeguardReport) -> String {
    let mut out = String::new();

    out.push_str("# Includeguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::ParseError => "PARSE ERROR",
        Verdict::Fail => "FAIL",
    };
    let edges: usize = report.violations.iter().map(|v| v.evidence.len()).sum();
    out.push_str(&format!(
        "- Verdict: **{}**\n- Headers checked: {}\n- Violations: {} header(s), {} include(s)\n\n",
        verdict,
        report.headers_checked,
        report.violations.len(),
        edges
    ));

    if let Some(failure) = &report.parse_failure {
        out.push_str(&format!("## Parse failure in `{}`\n\n", failure.header));
        for d in &failure.diagnostics {
            match &d.location {
                Some(loc) => out.push_str(&format!(
                    "- [{}] `{}`:{}:{} {}\n",
                    d.severity, loc.path, loc.line, loc.col, d.message
                )),
                None => out.push_str(&format!("- [{}] {}\n", d.severity, d.message)),
            }
        }
        out.push('\n');
        out.push_str("> Note: checking stopped at this header.\n");
        return out;
    }

    if report.violations.is_empty() {
        out.push_str("No forbidden includes.\n");
        return out;
    }

    out.push_str("## Forbidden includes\n\n");
    for v in &report.violations {
        out.push_str(&format!("### `{}`\n\n", v.header));
        for edge in &v.evidence {
            out.push_str(&format!(
                "- `{}` (`{}`:{}:{})\n",
                edge.included, edge.includer, edge.location.line, edge.location.col
            ));
        }
        out.push('\n');
    }

    out
}
