//! Shared test utilities for the apklock workspace.
//!
//! Fixture builders produce text in the exact shapes the adapters parse
//! (catalog result pages, `/etc/os-release`), and [`StaticCatalog`] stands in
//! for the network so pipeline tests can count lookups.

use apklock_catalog::{Catalog, CatalogQuery};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A catalog search result page listing `(package, version)` rows.
///
/// Mirrors the catalog's table markup: one `<td class="version">` per row,
/// with the version wrapped in a link the way the live site renders it.
pub fn catalog_page(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, version) in rows {
        body.push_str(&format!(
            r#"      <tr>
        <td class="package"><a href="/package/edge/main/x86_64/{name}">{name}</a></td>
        <td class="version">
          <strong><a class="hint--right" href="/package/edge/main/x86_64/{name}">{version}</a></strong>
        </td>
        <td class="url"><a href="https://example.org/{name}">URL</a></td>
        <td class="license">MIT</td>
        <td class="branch">edge</td>
        <td class="repo"><a href="/packages?repo=main">main</a></td>
        <td class="arch"><a href="/packages?arch=x86_64">x86_64</a></td>
        <td class="maintainer"><a href="/packages?maintainer=Someone">Someone</a></td>
      </tr>
"#
        ));
    }
    page_with_body(&body)
}

/// The page the catalog renders when nothing matches.
pub fn empty_catalog_page() -> String {
    page_with_body("      <tr>\n        <td colspan=\"9\">No item found...</td>\n      </tr>\n")
}

fn page_with_body(rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Alpine Linux packages</title></head>
<body>
  <div class="table-responsive">
    <table class="pure-table pure-table-bordered">
      <thead>
        <tr><th>Package</th><th>Version</th><th>Project</th><th>Licence</th><th>Branch</th><th>Repository</th><th>Architecture</th><th>Maintainer</th></tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
  </div>
</body>
</html>
"#
    )
}

/// `/etc/os-release` text for a distribution and `VERSION_ID`.
pub fn os_release(id: &str, version_id: &str) -> String {
    format!(
        "NAME=\"{id} linux\"\nID={id}\nVERSION_ID={version_id}\nPRETTY_NAME=\"{id} v{version_id}\"\nHOME_URL=\"https://example.org/\"\n"
    )
}

/// In-memory catalog that records every lookup it serves.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    versions: BTreeMap<String, String>,
    lookups: RefCell<Vec<(String, String)>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `raw` (returned untrimmed) for `name` on every branch.
    pub fn with(mut self, name: &str, raw: &str) -> Self {
        self.versions.insert(name.to_string(), raw.to_string());
        self
    }

    /// `(package, branch)` for each lookup, in call order.
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.borrow().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, query: &CatalogQuery<'_>) -> Option<String> {
        self.lookups.borrow_mut().push((
            query.name.as_str().to_string(),
            query.branch.as_str().to_string(),
        ));
        self.versions.get(query.name.as_str()).cloned()
    }
}
