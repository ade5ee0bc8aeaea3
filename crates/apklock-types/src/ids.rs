//! Stable identifiers and defaults shared by every layer.

// Catalog
pub const DEFAULT_CATALOG_URL: &str = "https://pkgs.alpinelinux.org/packages";
/// Class attribute of the table cell holding a package version in catalog results.
pub const VERSION_CELL_CLASS: &str = "version";

// Query parameters understood by the catalog.
pub const QUERY_NAME: &str = "name";
pub const QUERY_BRANCH: &str = "branch";
pub const QUERY_ARCH: &str = "arch";
pub const QUERY_REPO: &str = "repo";
pub const QUERY_MAINTAINER: &str = "maintainer";

// Release metadata
pub const DEFAULT_OS_RELEASE: &str = "/etc/os-release";
pub const KEY_DISTRIBUTION_ID: &str = "ID";
pub const KEY_VERSION_ID: &str = "VERSION_ID";
pub const TARGET_DISTRIBUTION: &str = "alpine";

// Branches
pub const BRANCH_VERSION_PREFIX: char = 'v';

// Files
pub const DEFAULT_INPUT: &str = "packages.txt";
pub const DEFAULT_OUTPUT: &str = "packages.lock";
pub const DEFAULT_CONFIG: &str = "apklock.toml";
pub const CONFIG_SCHEMA_V1: &str = "apklock.config.v1";

// Environment
pub const ENV_BRANCH: &str = "APKLOCK_BRANCH";
pub const ENV_CATALOG_URL: &str = "APKLOCK_CATALOG_URL";
pub const ENV_CONFIG: &str = "APKLOCK_CONFIG";
