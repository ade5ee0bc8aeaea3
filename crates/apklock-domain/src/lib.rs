//! Pure lock-resolution logic (no IO).
//!
//! Input: text already read by an adapter (package list, release metadata, catalog page).
//! Output: package specs, canonical branches, versions.

#![forbid(unsafe_code)]

pub mod branch;
pub mod markup;
pub mod os_release;
pub mod package_list;

#[cfg(test)]
mod proptest;

pub use branch::{BranchError, normalize_branch, select_branch};
pub use markup::extract_version_cell;
pub use os_release::{DistributionError, inspect_release, lookup_key, release_branch};
pub use package_list::{PackageList, parse_package_line, parse_package_list, strip_annotation};
