//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Branch normalization (prefix rule, idempotence)
//! - Annotation stripping on input lines
//! - Parsers never panicking on arbitrary text

use crate::branch::normalize_branch;
use crate::markup::extract_version_cell;
use crate::os_release::{inspect_release, lookup_key};
use crate::package_list::{parse_package_line, parse_package_list, strip_annotation};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Alpine package names: lowercase start, then letters, digits, `+`, `-`, `_`, `.`.
fn arb_package_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9+._-]{0,31}").unwrap()
}

/// apk version strings such as `1.24.0-r15` or `3.0_rc1-r0`.
fn arb_version() -> impl Strategy<Value = String> {
    (0u32..100, 0u32..100, 0u32..100, 0u32..30)
        .prop_map(|(major, minor, patch, rel)| format!("{major}.{minor}.{patch}-r{rel}"))
}

fn arb_numeric_branch() -> impl Strategy<Value = String> {
    (1u32..10, 0u32..30).prop_map(|(major, minor)| format!("{major}.{minor}"))
}

fn arb_channel() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-uw-z][a-z_-]{0,15}").unwrap()
}

// ============================================================================
// Branch normalization
// ============================================================================

proptest! {
    #[test]
    fn numeric_branches_are_prefixed(raw in arb_numeric_branch()) {
        let branch = normalize_branch(&raw).unwrap();
        prop_assert_eq!(branch.as_str(), format!("v{raw}"));
    }

    #[test]
    fn channel_names_pass_through(raw in arb_channel()) {
        let branch = normalize_branch(&raw).unwrap();
        prop_assert_eq!(branch.as_str(), raw.as_str());
    }

    #[test]
    fn normalization_is_idempotent(raw in prop_oneof![arb_numeric_branch(), arb_channel()]) {
        let once = normalize_branch(&raw).unwrap();
        let twice = normalize_branch(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Input lines
// ============================================================================

proptest! {
    #[test]
    fn annotated_line_strips_to_bare_name(name in arb_package_name(), version in arb_version()) {
        let bare = parse_package_line(&name).unwrap();
        let annotated = parse_package_line(&format!("{name}={version}")).unwrap();
        prop_assert_eq!(bare.as_str(), name.as_str());
        prop_assert_eq!(annotated, bare);
    }

    #[test]
    fn stripped_name_never_contains_separators(line in ".*") {
        let stripped = strip_annotation(&line);
        prop_assert!(!stripped.contains('='));
        prop_assert!(!stripped.chars().any(char::is_whitespace));
    }

    #[test]
    fn lock_output_round_trips_through_input_parser(
        entries in prop::collection::vec((arb_package_name(), arb_version()), 0..20)
    ) {
        let text: String = entries
            .iter()
            .map(|(n, v)| format!("{n}={v}\n"))
            .collect();
        let list = parse_package_list(&text);
        let names: Vec<&str> = list.specs.iter().map(|s| s.as_str()).collect();
        let expected: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(list.skipped, 0);
    }
}

// ============================================================================
// Robustness
// ============================================================================

proptest! {
    #[test]
    fn parsers_never_panic(input in ".*") {
        let _ = parse_package_list(&input);
        let _ = lookup_key(&input, "ID");
        let _ = inspect_release(&input, "alpine");
        let _ = extract_version_cell(&input);
        let _ = normalize_branch(&input);
    }

    #[test]
    fn extracted_version_matches_cell(version in arb_version(), pad in "[ \t\n]{0,4}") {
        let html = format!(r#"<tr><td class="package">x</td><td class="version">{pad}{version}{pad}</td></tr>"#);
        let raw = extract_version_cell(&html).unwrap();
        prop_assert_eq!(raw.trim(), version.as_str());
    }
}
