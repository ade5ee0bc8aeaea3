use apklock_domain::extract_version_cell;
use reqwest::Url;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::{Catalog, CatalogQuery};

/// Why a page could not be fetched. Only surfaces in logs; lookups report `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("cannot build http client")]
    Client(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("catalog answered with status {status}")]
    Status { status: u16 },

    #[error("catalog returned an empty page")]
    EmptyBody,
}

/// Blocking HTTP client for the catalog's search page.
///
/// No retries, no caching, no explicit timeout beyond the client default.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| CatalogError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(CatalogError::InvalidUrl {
                url: base_url.to_string(),
                reason: "query and fragment are built per lookup".to_string(),
            });
        }
        let client = Client::builder()
            .user_agent(concat!("apklock/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Client)?;
        Ok(Self { client, base_url })
    }

    /// Full search URL for a query.
    pub fn query_url(&self, query: &CatalogQuery<'_>) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().extend_pairs(query.params());
        url
    }

    /// Fetch the rendered result page.
    pub fn fetch_page(&self, query: &CatalogQuery<'_>) -> Result<String, CatalogError> {
        let url = self.query_url(query);
        tracing::debug!(
            url = %url,
            package = %query.name,
            branch = %query.branch,
            arch = %query.filters.arch,
            "querying catalog"
        );

        let response = self
            .client
            .get(url)
            .send()
            .map_err(CatalogError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(CatalogError::Transport)?;
        if body.trim().is_empty() {
            return Err(CatalogError::EmptyBody);
        }
        Ok(body)
    }
}

impl Catalog for HttpCatalog {
    fn lookup(&self, query: &CatalogQuery<'_>) -> Option<String> {
        match self.fetch_page(query) {
            Ok(page) => {
                let version = extract_version_cell(&page);
                if version.is_none() {
                    tracing::debug!(package = %query.name, "no version cell in catalog page");
                }
                version
            }
            Err(err) => {
                tracing::debug!(package = %query.name, error = %err, "catalog lookup failed");
                None
            }
        }
    }
}
