//! Filesystem adapters: release metadata, input listings, lock file staging.
//!
//! This crate is allowed to do filesystem IO. It does not talk to the network;
//! catalog lookups live in `apklock-catalog`.

#![forbid(unsafe_code)]

mod input;
mod lockfile;
mod release;

pub use input::read_package_list;
pub use lockfile::{CommitOutcome, LockError, StagedLock};
pub use release::{detect_branch, inspect_distribution, lookup_release_key, read_release};
