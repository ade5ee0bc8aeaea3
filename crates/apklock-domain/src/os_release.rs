//! Release-metadata (`/etc/os-release`) inspection.

use apklock_types::{Branch, DistributionInfo, ids};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("cannot read release metadata {path}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("release metadata has no {key} entry")]
    MissingKey { key: &'static str },

    #[error("running on '{found}', not '{expected}'; pass a branch explicitly")]
    WrongDistribution { found: String, expected: String },

    #[error("cannot derive a release branch from {key}={value:?}")]
    InvalidVersion { key: &'static str, value: String },
}

/// Value of the first `KEY=VALUE` line whose key matches exactly.
///
/// The key must start the line; whitespace around `=` is allowed. Surrounding
/// quotes are removed from the value. `None` when no line matches.
pub fn lookup_key(text: &str, key: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?.trim_start();
        let value = rest.strip_prefix('=')?;
        Some(unquote(value.trim()).to_string())
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Read identity and `<major>.<minor>` release, enforcing the target distribution.
pub fn inspect_release(text: &str, target: &str) -> Result<DistributionInfo, DistributionError> {
    let id = lookup_key(text, ids::KEY_DISTRIBUTION_ID)
        .filter(|v| !v.is_empty())
        .ok_or(DistributionError::MissingKey {
            key: ids::KEY_DISTRIBUTION_ID,
        })?;

    if !id.eq_ignore_ascii_case(target) {
        return Err(DistributionError::WrongDistribution {
            found: id,
            expected: target.to_string(),
        });
    }

    let version = lookup_key(text, ids::KEY_VERSION_ID)
        .filter(|v| !v.is_empty())
        .ok_or(DistributionError::MissingKey {
            key: ids::KEY_VERSION_ID,
        })?;

    let release = major_minor(&version).ok_or_else(|| DistributionError::InvalidVersion {
        key: ids::KEY_VERSION_ID,
        value: version.clone(),
    })?;

    Ok(DistributionInfo { id, release })
}

/// `v<major>.<minor>` for the running release; patch digits are discarded.
pub fn release_branch(text: &str, target: &str) -> Result<Branch, DistributionError> {
    let info = inspect_release(text, target)?;
    Ok(Branch::canonical(info.release))
}

/// `3.17.2` -> `3.17`, `3.21_alpha20240807` -> `3.21`.
fn major_minor(version: &str) -> Option<String> {
    let (major, rest) = split_digits(version)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, _) = split_digits(rest)?;
    Some(format!("{major}.{minor}"))
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}
