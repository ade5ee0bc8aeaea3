use serde::{Deserialize, Serialize};

/// `apklock.toml` schema v1.
///
/// Every field is optional; unset fields fall back to built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApklockConfigV1 {
    /// Optional schema marker; when set it must be `apklock.config.v1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Pin every run to this branch instead of detecting it from release metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    /// Restrict lookups to one repository (`main`, `community`, `testing`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,

    /// Release-metadata file consulted when no branch is pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_release: Option<String>,

    /// Distribution the host must be for branch auto-detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
}
