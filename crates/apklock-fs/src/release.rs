//! Distribution inspection against the host's release-metadata file.

use apklock_domain::{DistributionError, inspect_release, lookup_key, release_branch};
use apklock_types::{Branch, DistributionInfo};
use camino::Utf8Path;

pub fn read_release(path: &Utf8Path) -> Result<String, DistributionError> {
    std::fs::read_to_string(path).map_err(|source| DistributionError::Unreadable {
        path: path.to_string(),
        source,
    })
}

/// Value for `key` in the metadata file; `None` when the key is absent.
pub fn lookup_release_key(path: &Utf8Path, key: &str) -> Result<Option<String>, DistributionError> {
    Ok(lookup_key(&read_release(path)?, key))
}

pub fn inspect_distribution(
    path: &Utf8Path,
    target: &str,
) -> Result<DistributionInfo, DistributionError> {
    inspect_release(&read_release(path)?, target)
}

/// `v<major>.<minor>` of the running release, failing unless the host is `target`.
pub fn detect_branch(path: &Utf8Path, target: &str) -> Result<Branch, DistributionError> {
    let branch = release_branch(&read_release(path)?, target)?;
    tracing::debug!(path = %path, branch = %branch, "detected release branch");
    Ok(branch)
}
