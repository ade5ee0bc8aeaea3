//! The `resolve` use case: look up individual packages without writing a lock file.

use apklock_catalog::{Catalog, CatalogQuery, QueryFilters};
use apklock_domain::parse_package_line;
use apklock_settings::ResolvedConfig;
use apklock_types::{Branch, PackageSpec, VersionedPackage};
use serde::Serialize;

use crate::branch::{query_filters, run_branch};

/// One catalog lookup, trimmed. Blank catalog text counts as a miss.
pub fn resolve_package(
    catalog: &dyn Catalog,
    name: &PackageSpec,
    branch: &Branch,
    filters: &QueryFilters,
) -> Option<VersionedPackage> {
    let raw = catalog.lookup(&CatalogQuery::new(name, branch, filters))?;
    let version = raw.trim();
    if version.is_empty() {
        tracing::debug!(package = %name, "catalog reported an empty version");
        return None;
    }
    Some(VersionedPackage::new(name.clone(), version))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolveEntry {
    pub name: PackageSpec,
    /// `None` when the catalog had nothing for this package.
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolveOutput {
    pub branch: Branch,
    pub entries: Vec<ResolveEntry>,
}

impl ResolveOutput {
    pub fn hits(&self) -> impl Iterator<Item = VersionedPackage> + '_ {
        self.entries.iter().filter_map(|e| {
            e.version
                .as_ref()
                .map(|v| VersionedPackage::new(e.name.clone(), v.clone()))
        })
    }
}

/// Resolve each argument (annotations allowed) on the run's branch.
pub fn run_resolve(
    packages: &[String],
    config: &ResolvedConfig,
    catalog: &dyn Catalog,
) -> anyhow::Result<ResolveOutput> {
    let branch = run_branch(config)?;
    let filters = query_filters(config);

    let mut entries = Vec::with_capacity(packages.len());
    for arg in packages {
        let Some(name) = parse_package_line(arg) else {
            tracing::warn!(argument = %arg, "not a package name; skipped");
            continue;
        };
        let version = resolve_package(catalog, &name, &branch, &filters).map(|p| p.version);
        entries.push(ResolveEntry { name, version });
    }

    Ok(ResolveOutput { branch, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use apklock_test_util::StaticCatalog;

    fn config() -> ResolvedConfig {
        ResolvedConfig {
            branch: Some("edge".to_string()),
            ..ResolvedConfig::default()
        }
    }

    #[test]
    fn resolve_trims_catalog_text() {
        let catalog = StaticCatalog::new().with("nginx", "\n   1.24.0-r0  \n");
        let name = PackageSpec::new("nginx").expect("valid name");
        let pkg = resolve_package(
            &catalog,
            &name,
            &Branch::canonical("edge"),
            &QueryFilters::for_arch("x86_64"),
        )
        .expect("hit");
        assert_eq!(pkg.lock_line(), "nginx=1.24.0-r0");
    }

    #[test]
    fn blank_catalog_text_is_a_miss() {
        let catalog = StaticCatalog::new().with("ghost", "   ");
        let name = PackageSpec::new("ghost").expect("valid name");
        assert!(
            resolve_package(
                &catalog,
                &name,
                &Branch::canonical("edge"),
                &QueryFilters::for_arch("x86_64"),
            )
            .is_none()
        );
    }

    #[test]
    fn run_resolve_reports_hits_and_misses() {
        let catalog = StaticCatalog::new().with("curl", "8.5.0-r0");
        let args = vec![
            "curl=8.0".to_string(),
            "missing".to_string(),
            "=bad".to_string(),
        ];
        let out = run_resolve(&args, &config(), &catalog).expect("resolve");

        assert_eq!(out.branch.as_str(), "edge");
        assert_eq!(out.entries.len(), 2);
        assert_eq!(out.entries[0].version.as_deref(), Some("8.5.0-r0"));
        assert_eq!(out.entries[1].version, None);
        let hits: Vec<String> = out.hits().map(|p| p.lock_line()).collect();
        assert_eq!(hits, vec!["curl=8.5.0-r0".to_string()]);
        assert_eq!(catalog.lookup_count(), 2);
    }

    #[test]
    fn output_serializes_for_json_consumers() {
        let catalog = StaticCatalog::new().with("zlib", "1.3.1-r0");
        let out = run_resolve(&["zlib".to_string(), "nope".to_string()], &config(), &catalog)
            .expect("resolve");
        let json = serde_json::to_value(&out).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "branch": "edge",
                "entries": [
                    { "name": "zlib", "version": "1.3.1-r0" },
                    { "name": "nope", "version": null }
                ]
            })
        );
    }
}
