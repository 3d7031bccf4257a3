use crate::rules::RuleSet;
use camino::Utf8PathBuf;
use std::collections::BTreeSet;

/// Directory names pruned from the scan when none are configured.
pub const DEFAULT_IGNORE: &[&str] = &[".h", ".hxx"];

/// Compiler used for parsing when none is configured.
pub const DEFAULT_COMPILER: &str = "clang++";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSettings {
    pub roots: Vec<Utf8PathBuf>,
    /// Directory names that are not descended into.
    pub ignore: BTreeSet<String>,
    /// File name suffixes eligible for checking.
    pub extensions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerSettings {
    pub program: String,
    /// Forwarded verbatim to every compiler invocation.
    pub args: Vec<String>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_COMPILER.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub rules: RuleSet,
    pub scan: ScanSettings,
    pub compiler: CompilerSettings,
}

impl ScanSettings {
    pub fn has_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn is_ignored(&self, dir_name: &str) -> bool {
        self.ignore.contains(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(extensions: &[&str]) -> ScanSettings {
        ScanSettings {
            roots: Vec::new(),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn extensions_are_plain_suffixes() {
        let s = scan(&[".h", "hpp"]);
        assert!(s.has_extension("a.h"));
        assert!(s.has_extension("a.hpp"));
        assert!(!s.has_extension("a.cpp"));
        assert!(!scan(&[]).has_extension("a.h"));
    }

    #[test]
    fn default_ignore_set() {
        let s = scan(&[]);
        assert!(s.is_ignored(".h"));
        assert!(s.is_ignored(".hxx"));
        assert!(!s.is_ignored("include"));
    }
}
