//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - scoped allow exceptions (suffix matching, first match wins)
//! - substring matching of forbidden entries
//! - parse failures never turning into violations

use crate::evaluate::check_include;
use crate::model::HeaderVerdict;
use crate::rules::{AllowScope, RuleSet, effective_forbidden, forbidden_match};
use crate::test_support::{FakeFrontend, diagnostic, edge};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn arb_dir() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn arb_file_name() -> impl Strategy<Value = String> {
    arb_segment().prop_map(|s| format!("{s}.h"))
}

fn arb_forbidden() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(arb_segment().prop_map(|s| format!("{s}/")), 0..4)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn no_scope_means_full_forbidden_set(
        dir in arb_dir(),
        file in arb_file_name(),
        forbidden in arb_forbidden(),
    ) {
        let full = format!("{dir}/{file}");
        let eff = effective_forbidden(&dir, &full, &[], &forbidden);
        prop_assert_eq!(eff, forbidden);
    }

    #[test]
    fn scope_for_other_directory_never_suppresses(
        dir in arb_dir(),
        file in arb_file_name(),
        entry in arb_segment(),
    ) {
        // A scope containing an uppercase letter can never be a suffix of our lowercase paths.
        let scope = format!("Other/{entry}");
        let forbidden: BTreeSet<String> = [format!("{entry}/")].into_iter().collect();
        let allowed = vec![AllowScope::new(scope, [format!("{entry}/")])];

        let full = format!("{dir}/{file}");
        let eff = effective_forbidden(&dir, &full, &allowed, &forbidden);
        prop_assert_eq!(eff, forbidden);
    }

    #[test]
    fn directory_scope_subtracts_its_exceptions(
        dir in arb_dir(),
        file in arb_file_name(),
        forbidden in arb_forbidden(),
    ) {
        let allowed_set: BTreeSet<String> = forbidden.iter().take(1).cloned().collect();
        let allowed = vec![AllowScope::new(dir.clone(), allowed_set.clone())];

        let full = format!("{dir}/{file}");
        let eff = effective_forbidden(&dir, &full, &allowed, &forbidden);
        let expected: BTreeSet<String> = forbidden.difference(&allowed_set).cloned().collect();
        prop_assert_eq!(eff, expected);
    }

    #[test]
    fn first_matching_scope_wins(
        dir in arb_dir(),
        file in arb_file_name(),
        first in arb_segment(),
        second in arb_segment(),
    ) {
        prop_assume!(first != second);
        let full = format!("{dir}/{file}");
        let rules = RuleSet {
            forbidden: [first.clone(), second.clone()].into_iter().collect(),
            allowed: vec![
                AllowScope::new(full.clone(), [first.clone()]),
                AllowScope::new(file.clone(), [second.clone()]),
            ],
        };

        let allowed = rules.allowed_for(&dir, &full);
        prop_assert_eq!(allowed.iter().cloned().collect::<Vec<_>>(), vec![first.clone()]);
        let eff = rules.effective_forbidden(&allowed);
        prop_assert!(eff.contains(&second));
        prop_assert!(!eff.contains(&first));
    }

    #[test]
    fn forbidden_entry_matches_any_path_containing_it(
        prefix in "[a-z/]{0,12}",
        entry in arb_segment(),
        suffix in "[a-z./]{0,12}",
    ) {
        let forbidden: BTreeSet<String> = [entry.clone()].into_iter().collect();
        let path = format!("{prefix}{entry}{suffix}");
        prop_assert_eq!(forbidden_match(&path, &forbidden), Some(entry.as_str()));
    }

    #[test]
    fn headers_without_forbidden_paths_are_clean(
        dir in arb_dir(),
        files in prop::collection::vec(arb_file_name(), 1..6),
    ) {
        // Forbidden entries are uppercase and cannot appear in generated paths.
        let forbidden: BTreeSet<String> = ["PRIV/".to_string()].into_iter().collect();
        let header = format!("{dir}/{}", files[0]);
        let includes = files
            .iter()
            .map(|f| edge(&format!("{dir}/{f}"), &header, 1))
            .collect();
        let fe = FakeFrontend::new().with_includes(&header, includes);

        let verdict = check_include(&fe, &header, &[], &forbidden).expect("parse");
        prop_assert_eq!(verdict, HeaderVerdict::Clean);
    }

    #[test]
    fn diagnostics_never_produce_violations(
        dir in arb_dir(),
        file in arb_file_name(),
        forbidden in arb_forbidden(),
    ) {
        let header = format!("{dir}/{file}");
        let includes = forbidden
            .iter()
            .map(|f| edge(&format!("{dir}/{f}x.h"), &header, 1))
            .collect();
        let fe = FakeFrontend::new().with_unit(
            &header,
            vec![diagnostic(&header, 1, "unknown type name")],
            includes,
        );

        let verdict = check_include(&fe, &header, &[], &forbidden).expect("parse");
        prop_assert!(matches!(verdict, HeaderVerdict::ParseFailed(_)));
    }
}
