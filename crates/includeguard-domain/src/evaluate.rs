use crate::frontend::{Frontend, FrontendError};
use crate::model::{HeaderVerdict, SyntheticUnit};
use crate::rules::forbidden_match;
use includeguard_types::{IncludeEdge, Violation};
use std::collections::BTreeSet;

/// Check one header against its effective forbidden set.
///
/// Any diagnostic makes the header a parse failure and skips policy evaluation entirely.
/// Otherwise every include edge of the unit is tested, so a forbidden file reached through
/// several levels of nesting is reported with the edge that pulled it in.
pub fn check_include<F: Frontend + ?Sized>(
    frontend: &F,
    header: &str,
    args: &[String],
    forbidden: &BTreeSet<String>,
) -> Result<HeaderVerdict, FrontendError> {
    let unit = SyntheticUnit::for_header(header, args);
    let tu = frontend.parse(&unit)?;

    if !tu.diagnostics.is_empty() {
        return Ok(HeaderVerdict::ParseFailed(tu.diagnostics));
    }

    let evidence: Vec<IncludeEdge> = tu
        .includes
        .into_iter()
        .filter(|edge| forbidden_match(&edge.included, forbidden).is_some())
        .collect();

    if evidence.is_empty() {
        return Ok(HeaderVerdict::Clean);
    }

    Ok(HeaderVerdict::Violation(Violation {
        header: header.to_string(),
        evidence,
    }))
}
