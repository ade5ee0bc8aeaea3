use crate::{defaults, model::ApklockConfigV1};
use anyhow::Context;
use apklock_types::ids;
use camino::Utf8PathBuf;

/// Values supplied on the command line or through the environment.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub branch: Option<String>,
    pub arch: Option<String>,
    pub repo: Option<String>,
    pub maintainer: Option<String>,
    pub catalog_url: Option<String>,
    pub os_release: Option<String>,
    pub distribution: Option<String>,
}

/// Effective configuration, built once per process and shared read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Raw branch override; `None` means detect from release metadata.
    pub branch: Option<String>,
    pub arch: String,
    pub repo: Option<String>,
    pub maintainer: Option<String>,
    pub catalog_url: String,
    pub os_release: Utf8PathBuf,
    pub distribution: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            branch: None,
            arch: defaults::host_arch().to_string(),
            repo: None,
            maintainer: None,
            catalog_url: ids::DEFAULT_CATALOG_URL.to_string(),
            os_release: Utf8PathBuf::from(ids::DEFAULT_OS_RELEASE),
            distribution: ids::TARGET_DISTRIBUTION.to_string(),
        }
    }
}

pub fn resolve_config(
    cfg: ApklockConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref().map(str::trim)
        && !schema.is_empty()
        && schema != ids::CONFIG_SCHEMA_V1
    {
        anyhow::bail!(
            "unsupported config schema {schema:?} (expected {})",
            ids::CONFIG_SCHEMA_V1
        );
    }

    let mut effective = ResolvedConfig::default();

    effective.branch = pick(overrides.branch, cfg.branch);

    if let Some(arch) = pick(overrides.arch, cfg.arch) {
        validate_token("arch", &arch)?;
        effective.arch = arch;
    }

    effective.repo = pick(overrides.repo, cfg.repo);
    if let Some(repo) = effective.repo.as_deref() {
        validate_token("repo", repo)?;
    }

    effective.maintainer = pick(overrides.maintainer, cfg.maintainer);

    if let Some(url) = pick(overrides.catalog_url, cfg.catalog_url) {
        validate_catalog_url(&url).context("invalid catalog_url")?;
        effective.catalog_url = url;
    }

    if let Some(path) = pick(overrides.os_release, cfg.os_release) {
        effective.os_release = Utf8PathBuf::from(path);
    }

    if let Some(distribution) = pick(overrides.distribution, cfg.distribution) {
        effective.distribution = distribution;
    }

    Ok(effective)
}

/// Override wins over file; blank strings count as unset in both layers.
fn pick(over: Option<String>, file: Option<String>) -> Option<String> {
    over.and_then(non_empty).or_else(|| file.and_then(non_empty))
}

fn non_empty(v: String) -> Option<String> {
    let trimmed = v.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_token(field: &str, value: &str) -> anyhow::Result<()> {
    if value.chars().any(char::is_whitespace) {
        anyhow::bail!("invalid {field}: {value:?} (must not contain whitespace)");
    }
    Ok(())
}

fn validate_catalog_url(url: &str) -> anyhow::Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("unsupported catalog url: {url} (expected http:// or https://)");
    }
    if url.chars().any(char::is_whitespace) {
        anyhow::bail!("catalog url must not contain whitespace: {url:?}");
    }
    if url.contains(['?', '#']) {
        anyhow::bail!("catalog url must not carry a query or fragment: {url}");
    }
    Ok(())
}
