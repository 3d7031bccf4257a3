//! Scripted frontend and small builders for tests that should not need a compiler.

use crate::frontend::{Frontend, FrontendError};
use crate::model::{CandidateHeader, SyntheticUnit, TranslationUnit};
use includeguard_types::{Diagnostic, IncludeEdge, Location, Severity, ids};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Script {
    Unit(TranslationUnit),
    Failure,
}

/// A [`Frontend`] that answers from a per-header script and records every unit it was given.
///
/// Headers without a script parse cleanly and include only themselves.
#[derive(Debug, Default)]
pub struct FakeFrontend {
    scripts: BTreeMap<String, Script>,
    seen: RefCell<Vec<SyntheticUnit>>,
}

impl FakeFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_includes(self, header: &str, includes: Vec<IncludeEdge>) -> Self {
        self.with_unit(header, Vec::new(), includes)
    }

    pub fn with_unit(
        mut self,
        header: &str,
        diagnostics: Vec<Diagnostic>,
        includes: Vec<IncludeEdge>,
    ) -> Self {
        self.scripts.insert(
            header.to_string(),
            Script::Unit(TranslationUnit {
                diagnostics,
                includes,
            }),
        );
        self
    }

    pub fn with_failure(mut self, header: &str) -> Self {
        self.scripts.insert(header.to_string(), Script::Failure);
        self
    }

    pub fn seen_units(&self) -> Vec<SyntheticUnit> {
        self.seen.borrow().clone()
    }

    pub fn seen_headers(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|u| u.header.clone()).collect()
    }
}

impl Frontend for FakeFrontend {
    fn parse(&self, unit: &SyntheticUnit) -> Result<TranslationUnit, FrontendError> {
        self.seen.borrow_mut().push(unit.clone());
        match self.scripts.get(&unit.header) {
            Some(Script::Unit(tu)) => Ok(tu.clone()),
            Some(Script::Failure) => Err(FrontendError::Failed {
                program: "fake".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "scripted failure".to_string(),
            }),
            None => Ok(TranslationUnit {
                diagnostics: Vec::new(),
                includes: vec![edge(&unit.header, ids::SYNTHETIC_UNIT_NAME, 1)],
            }),
        }
    }
}

pub fn edge(included: &str, includer: &str, line: u32) -> IncludeEdge {
    IncludeEdge {
        included: included.to_string(),
        includer: includer.to_string(),
        location: Location::new(includer, line, 1),
    }
}

pub fn diagnostic(path: &str, line: u32, message: &str) -> Diagnostic {
    Diagnostic {
        location: Some(Location::new(path, line, 1)),
        severity: Severity::Error,
        message: message.to_string(),
    }
}

pub fn forbidden(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn candidate(path: &str, allowed: &[&str]) -> CandidateHeader {
    CandidateHeader::new(path, forbidden(allowed))
}
