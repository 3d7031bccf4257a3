//! The seam between policy evaluation and whatever parses C/C++.

use crate::model::{SyntheticUnit, TranslationUnit};

/// Parses a synthetic translation unit into diagnostics plus its transitive include list.
///
/// One value is built at startup and borrowed for every check of the run. Implementations may
/// cache internally but each call must behave as if it were the first.
pub trait Frontend {
    fn parse(&self, unit: &SyntheticUnit) -> Result<TranslationUnit, FrontendError>;
}

impl<F: Frontend + ?Sized> Frontend for &F {
    fn parse(&self, unit: &SyntheticUnit) -> Result<TranslationUnit, FrontendError> {
        (**self).parse(unit)
    }
}

/// The frontend could not produce a translation unit at all.
///
/// This is distinct from a header that parses with diagnostics: it means the toolchain
/// invocation itself is broken, so the run stops.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status} without producing a translation unit: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("unreadable frontend output: {0}")]
    Output(String),
}
