//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! The caller reads `apklock.toml` (if any) and collects CLI/environment overrides.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::host_arch;
pub use model::ApklockConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `apklock.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ApklockConfigV1> {
    let cfg: ApklockConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by every component (defaults + file + overrides).
pub fn resolve_config(
    cfg: ApklockConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
