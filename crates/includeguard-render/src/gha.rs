use includeguard_types::{IncludeguardReport, Location, Severity, ids};

/// Render a report as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::{message}`
///
/// Every offending edge is annotated at its `#include` directive; a parse failure annotates each
/// diagnostic at its own location.
pub fn render_github_annotations(report: &IncludeguardReport) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(failure) = &report.parse_failure {
        for d in &failure.diagnostics {
            let level = match d.severity {
                Severity::Note => "notice",
                Severity::Warning => "warning",
                Severity::Error | Severity::Fatal => "error",
            };
            let message = format!(
                "[{}:{}] {}: {}",
                ids::CHECK_INCLUDES_PARSE,
                ids::CODE_PARSE_DIAGNOSTIC,
                failure.header,
                d.message
            );
            out.push(annotation(level, d.location.as_ref(), &message));
        }
    }

    for v in &report.violations {
        for edge in &v.evidence {
            let message = format!(
                "[{}:{}] {} includes forbidden {}",
                ids::CHECK_INCLUDES_FORBIDDEN,
                ids::CODE_FORBIDDEN_INCLUDE,
                v.header,
                edge.included
            );
            out.push(annotation("error", Some(&edge.location), &message));
        }
    }

    out
}

/// Escape a message for a workflow command (`%`, CR and LF).
pub fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn annotation(level: &str, location: Option<&Location>, message: &str) -> String {
    let mut meta = String::new();
    if let Some(loc) = location {
        meta.push_str(&format!("file={}", loc.path));
        if loc.line > 0 {
            meta.push_str(&format!(",line={}", loc.line));
        }
        if loc.col > 0 {
            meta.push_str(&format!(",col={}", loc.col));
        }
    }

    let message = escape_annotation(message);
    if meta.is_empty() {
        format!("::{}::{}", level, message)
    } else {
        format!("::{} {}::{}", level, meta, message)
    }
}
