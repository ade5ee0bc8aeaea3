//! The `branch` use case: decide which catalog branch a run targets.

use anyhow::Context;
use apklock_catalog::QueryFilters;
use apklock_domain::select_branch;
use apklock_settings::ResolvedConfig;
use apklock_types::Branch;

/// Branch for this run: the configured override, else detected from release metadata.
///
/// Detection failure (wrong distribution, missing or unreadable metadata) is fatal.
pub fn run_branch(config: &ResolvedConfig) -> anyhow::Result<Branch> {
    let branch = select_branch(config.branch.as_deref(), || {
        apklock_fs::detect_branch(&config.os_release, &config.distribution)
    })
    .with_context(|| match config.branch.as_deref() {
        Some(raw) => format!("normalize branch {raw:?}"),
        None => format!("detect branch from {}", config.os_release),
    })?;
    tracing::info!(branch = %branch, explicit = config.branch.is_some(), "using branch");
    Ok(branch)
}

/// Catalog filters every lookup in a run shares.
pub fn query_filters(config: &ResolvedConfig) -> QueryFilters {
    QueryFilters {
        arch: config.arch.clone(),
        repo: config.repo.clone(),
        maintainer: config.maintainer.clone(),
    }
}
