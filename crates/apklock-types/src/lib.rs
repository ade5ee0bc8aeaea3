//! Stable DTOs and identifiers used across the apklock workspace.
//!
//! This crate is intentionally boring:
//! - package names and resolved `name=version` pairs
//! - the canonical branch token the catalog expects
//! - the distribution identity read from release metadata
//! - well-known defaults (catalog endpoint, markup marker, file names)

#![forbid(unsafe_code)]

pub mod branch;
pub mod distro;
pub mod ids;
pub mod package;

pub use branch::Branch;
pub use distro::DistributionInfo;
pub use package::{LockListing, PackageSpec, VersionedPackage};
