use includeguard_types::{
    Diagnostic, IncludeEdge, IncludeguardReport, Location, ParseFailureReport, SCHEMA_REPORT_V1,
    Severity, ToolMeta, Verdict, Violation,
};
use time::macros::datetime;

fn envelope(verdict: Verdict) -> IncludeguardReport {
    IncludeguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "includeguard".to_string(),
            version: "0.1.0".to_string(),
        },
        started_at: datetime!(2025-01-01 0:00 UTC),
        finished_at: datetime!(2025-01-01 0:00:01 UTC),
        verdict,
        headers_checked: 0,
        parse_failure: None,
        violations: Vec::new(),
    }
}

pub(crate) fn clean() -> IncludeguardReport {
    IncludeguardReport {
        headers_checked: 3,
        ..envelope(Verdict::Pass)
    }
}

pub(crate) fn with_violations() -> IncludeguardReport {
    IncludeguardReport {
        headers_checked: 4,
        violations: vec![
            Violation {
                header: "/src/pub/a.h".to_string(),
                evidence: vec![
                    IncludeEdge {
                        included: "/src/priv/x.h".to_string(),
                        includer: "/src/pub/a.h".to_string(),
                        location: Location::new("/src/pub/a.h", 3, 1),
                    },
                    IncludeEdge {
                        included: "/src/priv/y.h".to_string(),
                        includer: "/src/priv/x.h".to_string(),
                        location: Location::new("/src/priv/x.h", 7, 0),
                    },
                ],
            },
            Violation {
                header: "/src/pub/b.h".to_string(),
                evidence: vec![IncludeEdge {
                    included: "/src/detail/impl.h".to_string(),
                    includer: "/src/pub/b.h".to_string(),
                    location: Location::new("/src/pub/b.h", 2, 1),
                }],
            },
        ],
        ..envelope(Verdict::Fail)
    }
}

pub(crate) fn with_parse_failure() -> IncludeguardReport {
    IncludeguardReport {
        headers_checked: 2,
        parse_failure: Some(ParseFailureReport {
            header: "/src/pub/broken.h".to_string(),
            diagnostics: vec![
                Diagnostic {
                    location: Some(Location::new("/src/pub/broken.h", 7, 2)),
                    severity: Severity::Error,
                    message: "expected '}'".to_string(),
                },
                Diagnostic {
                    location: None,
                    severity: Severity::Warning,
                    message: "100% of the time,\nsomething odd".to_string(),
                },
            ],
        }),
        ..envelope(Verdict::ParseError)
    }
}
