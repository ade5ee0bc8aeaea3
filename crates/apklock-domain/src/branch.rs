//! Branch normalization: explicit override or release-metadata detection.

use apklock_types::Branch;
use thiserror::Error;

use crate::os_release::DistributionError;

#[derive(Debug, Error)]
pub enum BranchError {
    #[error("invalid branch {0:?}: expected a channel name or <major>.<minor>")]
    Invalid(String),

    #[error("cannot detect release branch")]
    Detection(#[from] DistributionError),
}

/// Validate and canonicalize an explicit branch.
///
/// `3.17` becomes `v3.17`; `v3.17` and `edge` pass through unchanged.
pub fn normalize_branch(raw: &str) -> Result<Branch, BranchError> {
    let raw = raw.trim();
    let valid = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if !valid {
        return Err(BranchError::Invalid(raw.to_string()));
    }
    Ok(Branch::canonical(raw))
}

/// Pick the branch for a run.
///
/// A non-blank override is normalized without calling `detect`; otherwise the
/// detection result (typically read from `/etc/os-release`) is used and its
/// failure propagated.
pub fn select_branch<F>(explicit: Option<&str>, detect: F) -> Result<Branch, BranchError>
where
    F: FnOnce() -> Result<Branch, DistributionError>,
{
    match explicit.map(str::trim).filter(|b| !b.is_empty()) {
        Some(raw) => normalize_branch(raw),
        None => {
            let detected = detect()?;
            normalize_branch(detected.as_str())
        }
    }
}
