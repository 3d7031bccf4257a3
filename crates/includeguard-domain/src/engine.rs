use crate::evaluate::check_include;
use crate::frontend::{Frontend, FrontendError};
use crate::model::{CandidateHeader, CheckOutcome, HeaderVerdict, RunReport};
use crate::rules::RuleSet;
use includeguard_types::Violation;
use tracing::{debug, info};

/// Check every candidate in order.
///
/// A parse failure stops the run on the spot: later candidates never reach the frontend and
/// violations gathered so far are dropped. Otherwise violations accumulate across all
/// candidates.
pub fn evaluate<F, I>(
    frontend: &F,
    args: &[String],
    rules: &RuleSet,
    candidates: I,
) -> Result<RunReport, FrontendError>
where
    F: Frontend + ?Sized,
    I: IntoIterator<Item = CandidateHeader>,
{
    let mut violations: Vec<Violation> = Vec::new();
    let mut headers_checked: u32 = 0;

    for candidate in candidates {
        let forbidden = rules.effective_forbidden(&candidate.allowed);
        let header = candidate.path.as_str();

        debug!(header, forbidden = forbidden.len(), "checking header");
        headers_checked += 1;

        match check_include(frontend, header, args, &forbidden)? {
            HeaderVerdict::Clean => {}
            HeaderVerdict::Violation(v) => {
                info!(header, edges = v.evidence.len(), "forbidden include(s) found");
                violations.push(v);
            }
            HeaderVerdict::ParseFailed(diagnostics) => {
                info!(header, diagnostics = diagnostics.len(), "header failed to parse; stopping");
                return Ok(RunReport {
                    outcome: CheckOutcome::ParseFailed {
                        header: header.to_string(),
                        diagnostics,
                    },
                    headers_checked,
                });
            }
        }
    }

    let outcome = if violations.is_empty() {
        CheckOutcome::AllClean
    } else {
        CheckOutcome::PolicyViolations(violations)
    };

    Ok(RunReport {
        outcome,
        headers_checked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AllowScope;
    use crate::test_support::{FakeFrontend, candidate, diagnostic, edge, forbidden};

    fn priv_rules(allowed: Vec<AllowScope>) -> RuleSet {
        RuleSet {
            forbidden: forbidden(&["priv/"]),
            allowed,
        }
    }

    fn pub_tree() -> FakeFrontend {
        FakeFrontend::new()
            .with_includes(
                "/src/pub/a.h",
                vec![
                    edge("/src/pub/a.h", "<stdin>", 1),
                    edge("/src/priv/x.h", "/src/pub/a.h", 3),
                ],
            )
            .with_includes(
                "/src/pub/b.h",
                vec![
                    edge("/src/pub/b.h", "<stdin>", 1),
                    edge("/src/pub/c.h", "/src/pub/b.h", 3),
                ],
            )
    }

    #[test]
    fn one_violation_for_the_offending_header() {
        let fe = pub_tree();
        let report = evaluate(
            &fe,
            &[],
            &priv_rules(Vec::new()),
            vec![candidate("/src/pub/a.h", &[]), candidate("/src/pub/b.h", &[])],
        )
        .expect("evaluate");

        assert_eq!(report.headers_checked, 2);
        assert_eq!(report.outcome.exit_code(), 2);
        let violations = report.outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].header, "/src/pub/a.h");
        assert_eq!(violations[0].evidence[0].included, "/src/priv/x.h");
    }

    #[test]
    fn candidate_exceptions_clear_the_violation() {
        let fe = pub_tree();
        let report = evaluate(
            &fe,
            &[],
            &priv_rules(vec![AllowScope::new("pub/a.h", ["priv/"])]),
            vec![
                candidate("/src/pub/a.h", &["priv/"]),
                candidate("/src/pub/b.h", &[]),
            ],
        )
        .expect("evaluate");

        assert_eq!(report.outcome, CheckOutcome::AllClean);
        assert_eq!(report.outcome.exit_code(), 0);
    }

    #[test]
    fn parse_failure_stops_the_run_and_drops_violations() {
        let fe = pub_tree()
            .with_unit(
                "/src/pub/broken.h",
                vec![diagnostic("/src/pub/broken.h", 2, "expected '}'")],
                Vec::new(),
            )
            .with_includes(
                "/src/pub/z.h",
                vec![edge("/src/priv/x.h", "/src/pub/z.h", 1)],
            );

        let report = evaluate(
            &fe,
            &[],
            &priv_rules(Vec::new()),
            vec![
                candidate("/src/pub/a.h", &[]),
                candidate("/src/pub/broken.h", &[]),
                candidate("/src/pub/z.h", &[]),
            ],
        )
        .expect("evaluate");

        match &report.outcome {
            CheckOutcome::ParseFailed {
                header,
                diagnostics,
            } => {
                assert_eq!(header, "/src/pub/broken.h");
                assert_eq!(diagnostics.len(), 1);
            }
            other => panic!("expected parse failure, got {other:?}"),
        }
        assert_eq!(report.outcome.exit_code(), 1);
        assert_eq!(report.headers_checked, 2);
        assert_eq!(fe.seen_headers(), vec!["/src/pub/a.h", "/src/pub/broken.h"]);
    }

    #[test]
    fn frontend_failure_aborts_immediately() {
        let fe = pub_tree().with_failure("/src/pub/a.h");
        let err = evaluate(
            &fe,
            &[],
            &priv_rules(Vec::new()),
            vec![candidate("/src/pub/a.h", &[]), candidate("/src/pub/b.h", &[])],
        )
        .unwrap_err();

        assert!(matches!(err, FrontendError::Failed { .. }));
        assert_eq!(fe.seen_headers(), vec!["/src/pub/a.h"]);
    }

    #[test]
    fn violations_keep_scanner_order() {
        let fe = FakeFrontend::new()
            .with_includes("/src/z.h", vec![edge("/src/priv/1.h", "/src/z.h", 1)])
            .with_includes("/src/a.h", vec![edge("/src/priv/2.h", "/src/a.h", 1)]);

        let report = evaluate(
            &fe,
            &[],
            &priv_rules(Vec::new()),
            vec![candidate("/src/z.h", &[]), candidate("/src/a.h", &[])],
        )
        .expect("evaluate");

        let headers: Vec<&str> = report
            .outcome
            .violations()
            .iter()
            .map(|v| v.header.as_str())
            .collect();
        assert_eq!(headers, vec!["/src/z.h", "/src/a.h"]);
    }

    #[test]
    fn no_candidates_is_clean() {
        let fe = FakeFrontend::new();
        let report = evaluate(&fe, &[], &priv_rules(Vec::new()), Vec::new()).expect("evaluate");
        assert_eq!(report.outcome, CheckOutcome::AllClean);
        assert_eq!(report.headers_checked, 0);
    }
}
