//! Use case orchestration for apklock.
//!
//! This crate provides the application layer: use cases that coordinate the domain, filesystem,
//! and catalog layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup and exit codes.

#![forbid(unsafe_code)]

mod branch;
mod lock;
mod resolve;

pub use branch::{query_filters, run_branch};
pub use lock::{LockInput, LockOutput, run_lock};
pub use resolve::{ResolveEntry, ResolveOutput, resolve_package, run_resolve};

pub use apklock_catalog::{Catalog, HttpCatalog};
pub use apklock_fs::CommitOutcome;
