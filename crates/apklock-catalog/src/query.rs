use apklock_types::{Branch, PackageSpec, ids};

/// Filters shared by every lookup in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryFilters {
    pub arch: String,
    /// `None` leaves the repository unrestricted.
    pub repo: Option<String>,
    /// `None` leaves the maintainer unrestricted.
    pub maintainer: Option<String>,
}

impl QueryFilters {
    pub fn for_arch(arch: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            repo: None,
            maintainer: None,
        }
    }
}

/// One package lookup on one branch.
#[derive(Clone, Copy, Debug)]
pub struct CatalogQuery<'a> {
    pub name: &'a PackageSpec,
    pub branch: &'a Branch,
    pub filters: &'a QueryFilters,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(name: &'a PackageSpec, branch: &'a Branch, filters: &'a QueryFilters) -> Self {
        Self {
            name,
            branch,
            filters,
        }
    }

    /// Query string pairs in the order the catalog's search form submits them.
    ///
    /// Unset filters are sent empty, which the catalog treats as "any".
    pub fn params(&self) -> [(&'static str, &'a str); 5] {
        [
            (ids::QUERY_NAME, self.name.as_str()),
            (ids::QUERY_BRANCH, self.branch.as_str()),
            (ids::QUERY_REPO, self.filters.repo.as_deref().unwrap_or("")),
            (ids::QUERY_ARCH, self.filters.arch.as_str()),
            (
                ids::QUERY_MAINTAINER,
                self.filters.maintainer.as_deref().unwrap_or(""),
            ),
        ]
    }
}
