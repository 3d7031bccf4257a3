//! Pure policy evaluation (no IO).
//!
//! Input: candidate headers resolved elsewhere, a rule set, and a [`Frontend`] that turns a
//! synthetic translation unit into diagnostics plus an include list.
//! Output: a [`CheckOutcome`] for the whole run.

#![forbid(unsafe_code)]

pub mod frontend;
pub mod model;
pub mod policy;
pub mod rules;

mod engine;
mod evaluate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(test)]
mod proptest;

pub use engine::evaluate;
pub use evaluate::check_include;
pub use frontend::{Frontend, FrontendError};
pub use model::{
    CandidateHeader, CheckOutcome, HeaderVerdict, RunReport, SyntheticUnit, TranslationUnit,
};
pub use policy::{CompilerSettings, EffectiveConfig, ScanSettings};
pub use rules::{AllowScope, RuleSet};
