use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::BRANCH_VERSION_PREFIX;

/// Canonical release-channel token used to scope a catalog query.
///
/// Two shapes are legal: a literal channel name (`edge`) or `v<major>.<minor>`.
/// Raw input starting with a digit gets the `v` prefix; anything else passes
/// through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Branch(String);

impl Branch {
    /// Apply the prefix rule to an already-validated token.
    pub fn canonical<S: AsRef<str>>(raw: S) -> Self {
        let raw = raw.as_ref();
        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            Self(format!("{BRANCH_VERSION_PREFIX}{raw}"))
        } else {
            Self(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
