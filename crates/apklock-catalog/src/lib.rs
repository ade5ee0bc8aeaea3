//! Version lookups against the remote package catalog.
//!
//! The catalog is the web interface of the package index: a search page that
//! takes `name`, `branch`, `arch`, `repo` and `maintainer` query parameters and
//! renders matching packages as an HTML table. There is no API contract beyond
//! that markup, so every failure mode (transport error, non-success status,
//! empty body, missing version cell, package genuinely absent) is reported the
//! same way: not found.

#![forbid(unsafe_code)]

mod http;
mod query;

pub use http::{CatalogError, HttpCatalog};
pub use query::{CatalogQuery, QueryFilters};

/// Source of published versions.
///
/// One call is one lookup; implementations must not retry or cache.
pub trait Catalog {
    /// Raw version text for the first matching package, untrimmed.
    fn lookup(&self, query: &CatalogQuery<'_>) -> Option<String>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup(&self, query: &CatalogQuery<'_>) -> Option<String> {
        (**self).lookup(query)
    }
}
