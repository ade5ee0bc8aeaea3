use serde::{Deserialize, Serialize};
use std::fmt;

/// A package name with any version annotation already stripped.
///
/// Never empty, never contains whitespace or `=`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageSpec(String);

impl PackageSpec {
    /// Returns `None` for names that cannot be looked up.
    pub fn new<S: AsRef<str>>(name: S) -> Option<Self> {
        let name = name.as_ref();
        if name.is_empty() || name.contains('=') || name.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A package pinned to the version the catalog reported for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedPackage {
    pub name: PackageSpec,
    /// Literal catalog text, trimmed. Not parsed or validated.
    pub version: String,
}

impl VersionedPackage {
    pub fn new(name: PackageSpec, version: impl Into<String>) -> Self {
        Self {
            name,
            version: version.into(),
        }
    }

    /// `name=version`, the same shape an annotated input line has.
    pub fn lock_line(&self) -> String {
        format!("{}={}", self.name, self.version)
    }
}

/// Ordered lock listing. Insertion order is kept; no dedup, no sort.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockListing(Vec<VersionedPackage>);

impl LockListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pkg: VersionedPackage) {
        self.0.push(pkg);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One `name=version` line per entry, each newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for pkg in &self.0 {
            out.push_str(&pkg.lock_line());
            out.push('\n');
        }
        out
    }
}

impl FromIterator<VersionedPackage> for LockListing {
    fn from_iter<I: IntoIterator<Item = VersionedPackage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LockListing {
    type Item = &'a VersionedPackage;
    type IntoIter = std::slice::Iter<'a, VersionedPackage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
