//! Forbidden substrings and path-scoped allow exceptions.

use std::collections::BTreeSet;

/// Exceptions that apply to headers whose directory or full path ends with `scope`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowScope {
    pub scope: String,
    pub exceptions: BTreeSet<String>,
}

impl AllowScope {
    pub fn new<S, I, E>(scope: S, exceptions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        Self {
            scope: scope.into(),
            exceptions: exceptions.into_iter().map(Into::into).collect(),
        }
    }

    /// Plain string suffix test; `"b"` matches `".../ab"` as well as `".../a/b"`.
    pub fn applies_to(&self, dir: &str, full_path: &str) -> bool {
        dir.ends_with(&self.scope) || full_path.ends_with(&self.scope)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub forbidden: BTreeSet<String>,
    /// Declaration order is significant: the first applicable scope wins.
    pub allowed: Vec<AllowScope>,
}

impl RuleSet {
    /// Exceptions for one header, from the first scope that applies (empty if none does).
    pub fn allowed_for(&self, dir: &str, full_path: &str) -> BTreeSet<String> {
        matching_scope(&self.allowed, dir, full_path)
            .map(|s| s.exceptions.clone())
            .unwrap_or_default()
    }

    pub fn effective_forbidden(&self, allowed: &BTreeSet<String>) -> BTreeSet<String> {
        self.forbidden.difference(allowed).cloned().collect()
    }
}

pub fn matching_scope<'a>(
    allowed: &'a [AllowScope],
    dir: &str,
    full_path: &str,
) -> Option<&'a AllowScope> {
    allowed.iter().find(|s| s.applies_to(dir, full_path))
}

/// `forbidden` minus the exceptions of the first scope matching `dir` or `full_path`.
pub fn effective_forbidden(
    dir: &str,
    full_path: &str,
    allowed: &[AllowScope],
    forbidden: &BTreeSet<String>,
) -> BTreeSet<String> {
    match matching_scope(allowed, dir, full_path) {
        Some(scope) => forbidden.difference(&scope.exceptions).cloned().collect(),
        None => forbidden.clone(),
    }
}

/// First forbidden entry contained in `included` as a substring.
pub fn forbidden_match<'a>(included: &str, forbidden: &'a BTreeSet<String>) -> Option<&'a str> {
    forbidden
        .iter()
        .find(|f| included.contains(f.as_str()))
        .map(String::as_str)
}
