use anyhow::Context;
use apklock_domain::{PackageList, parse_package_list};
use camino::Utf8Path;

/// Read the whole input listing before anything is written.
///
/// The file is consumed into memory here, so the same path can later be the
/// commit target without the source being read mid-write.
pub fn read_package_list(path: &Utf8Path) -> anyhow::Result<PackageList> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read package list {path}"))?;
    let list = parse_package_list(&text);
    tracing::debug!(
        path = %path,
        packages = list.specs.len(),
        skipped = list.skipped,
        "read package list"
    );
    Ok(list)
}
