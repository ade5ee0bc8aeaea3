//! The `lock` use case: resolve every listed package and write the lock file.

use anyhow::Context;
use apklock_catalog::Catalog;
use apklock_fs::{CommitOutcome, StagedLock};
use apklock_settings::ResolvedConfig;
use apklock_types::{Branch, LockListing, PackageSpec};
use camino::Utf8Path;

use crate::branch::{query_filters, run_branch};
use crate::resolve::resolve_package;

/// Input for the lock use case.
#[derive(Clone, Debug)]
pub struct LockInput<'a> {
    /// Package list, one name per line, optionally annotated `name=version`.
    pub input_path: &'a Utf8Path,
    /// Lock file to replace. May be the same path as `input_path`.
    pub output_path: &'a Utf8Path,
    pub config: &'a ResolvedConfig,
}

/// Output from the lock use case.
#[derive(Clone, Debug)]
pub struct LockOutput {
    pub branch: Branch,
    /// Resolved packages, in input order.
    pub listing: LockListing,
    /// Packages the catalog had no version for.
    pub missed: Vec<PackageSpec>,
    /// Input lines that yielded no package name.
    pub skipped: usize,
    pub outcome: CommitOutcome,
}

/// Run the lock pipeline: read input, pick branch, resolve in order, commit.
///
/// Setup failures (unreadable input, branch detection, staging) abort before the
/// output is touched. Per-package misses only leave that package out. A run that
/// resolves nothing keeps the previous output.
pub fn run_lock(input: LockInput<'_>, catalog: &dyn Catalog) -> anyhow::Result<LockOutput> {
    // Fully consumed before anything is staged, so input == output is safe.
    let packages = apklock_fs::read_package_list(input.input_path)?;
    let branch = run_branch(input.config)?;
    let filters = query_filters(input.config);

    let mut staged = StagedLock::begin(input.output_path)
        .with_context(|| format!("stage lock file for {}", input.output_path))?;

    let mut listing = LockListing::new();
    let mut missed = Vec::new();
    for name in &packages.specs {
        match resolve_package(catalog, name, &branch, &filters) {
            Some(pkg) => {
                staged
                    .append(&pkg.name, &pkg.version)
                    .context("append to staging file")?;
                listing.push(pkg);
            }
            None => {
                tracing::debug!(package = %name, branch = %branch, "no version found");
                missed.push(name.clone());
            }
        }
    }

    let outcome = staged
        .commit(input.output_path)
        .with_context(|| format!("commit lock file {}", input.output_path))?;

    match outcome {
        CommitOutcome::Written { lines } => tracing::info!(
            output = %input.output_path,
            resolved = lines,
            missed = missed.len(),
            skipped = packages.skipped,
            "lock file written"
        ),
        CommitOutcome::Discarded => tracing::warn!(
            output = %input.output_path,
            missed = missed.len(),
            "no package resolved; previous lock file left unchanged"
        ),
    }

    Ok(LockOutput {
        branch,
        listing,
        missed,
        skipped: packages.skipped,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use apklock_test_util::{StaticCatalog, os_release};
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn edge_config() -> ResolvedConfig {
        ResolvedConfig {
            branch: Some("edge".to_string()),
            ..ResolvedConfig::default()
        }
    }

    fn run(
        root: &Utf8Path,
        input: &str,
        output: &str,
        config: &ResolvedConfig,
        catalog: &StaticCatalog,
    ) -> anyhow::Result<LockOutput> {
        let input_path = root.join(input);
        let output_path = root.join(output);
        run_lock(
            LockInput {
                input_path: &input_path,
                output_path: &output_path,
                config,
            },
            catalog,
        )
    }

    #[test]
    fn resolved_packages_are_written_in_input_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx\ncurl\n").expect("write input");
        let catalog = StaticCatalog::new()
            .with("nginx", "1.24.0-r0")
            .with("curl", " 8.5.0-r0\n");

        let out = run(&root, "packages.txt", "packages.lock", &edge_config(), &catalog)
            .expect("lock run");

        assert_eq!(out.outcome, CommitOutcome::Written { lines: 2 });
        assert_eq!(
            fs::read_to_string(root.join("packages.lock")).expect("read output"),
            "nginx=1.24.0-r0\ncurl=8.5.0-r0\n"
        );
        assert_eq!(out.listing.render(), "nginx=1.24.0-r0\ncurl=8.5.0-r0\n");
    }

    #[test]
    fn all_misses_leave_previous_output_intact() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx\ncurl\n").expect("write input");
        fs::write(root.join("packages.lock"), "X=1.0.0\n").expect("seed output");
        let catalog = StaticCatalog::new();

        let out = run(&root, "packages.txt", "packages.lock", &edge_config(), &catalog)
            .expect("lock run");

        assert_eq!(out.outcome, CommitOutcome::Discarded);
        assert_eq!(out.missed.len(), 2);
        assert_eq!(
            fs::read(root.join("packages.lock")).expect("read output"),
            b"X=1.0.0\n"
        );
    }

    #[test]
    fn misses_are_omitted_not_fatal() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx\ntypo-pkg\ncurl\n").expect("write input");
        let catalog = StaticCatalog::new()
            .with("nginx", "1.24.0-r0")
            .with("curl", "8.5.0-r0");

        let out = run(&root, "packages.txt", "packages.lock", &edge_config(), &catalog)
            .expect("lock run");

        assert_eq!(out.missed, vec![PackageSpec::new("typo-pkg").expect("valid")]);
        assert_eq!(
            fs::read_to_string(root.join("packages.lock")).expect("read output"),
            "nginx=1.24.0-r0\ncurl=8.5.0-r0\n"
        );
    }

    #[test]
    fn self_overwrite_discards_old_annotation() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx=1.2.3\n").expect("write input");
        let catalog = StaticCatalog::new().with("nginx", "1.24.0-r0");

        run(&root, "packages.txt", "packages.txt", &edge_config(), &catalog).expect("lock run");

        assert_eq!(
            fs::read_to_string(root.join("packages.txt")).expect("read output"),
            "nginx=1.24.0-r0\n"
        );
    }

    #[test]
    fn every_package_is_looked_up_exactly_once_on_one_branch() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "a\n\n# comment\nb=1\n  c  \n").expect("write input");
        let catalog = StaticCatalog::new().with("a", "1").with("b", "2");

        let out = run(&root, "packages.txt", "packages.lock", &edge_config(), &catalog)
            .expect("lock run");

        assert_eq!(
            catalog.lookups(),
            vec![
                ("a".to_string(), "edge".to_string()),
                ("b".to_string(), "edge".to_string()),
                ("c".to_string(), "edge".to_string()),
            ]
        );
        assert_eq!(out.skipped, 0);
    }

    #[test]
    fn wrong_distribution_aborts_before_any_lookup() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx\n").expect("write input");
        fs::write(root.join("packages.lock"), "X=1.0.0\n").expect("seed output");
        fs::write(root.join("os-release"), os_release("fedora", "40")).expect("write release");
        let config = ResolvedConfig {
            os_release: root.join("os-release"),
            ..ResolvedConfig::default()
        };
        let catalog = StaticCatalog::new().with("nginx", "1.24.0-r0");

        let err = run(&root, "packages.txt", "packages.lock", &config, &catalog).unwrap_err();

        assert!(format!("{err:#}").contains("fedora"));
        assert_eq!(catalog.lookup_count(), 0);
        assert_eq!(
            fs::read(root.join("packages.lock")).expect("read output"),
            b"X=1.0.0\n"
        );
    }

    #[test]
    fn detected_branch_is_used_for_lookups() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "musl\n").expect("write input");
        fs::write(root.join("os-release"), os_release("alpine", "3.19.1")).expect("write release");
        let config = ResolvedConfig {
            os_release: root.join("os-release"),
            ..ResolvedConfig::default()
        };
        let catalog = StaticCatalog::new().with("musl", "1.2.4_git20230717-r4");

        let out = run(&root, "packages.txt", "packages.lock", &config, &catalog).expect("lock run");

        assert_eq!(out.branch.as_str(), "v3.19");
        assert_eq!(catalog.lookups()[0].1, "v3.19");
    }

    #[test]
    fn unreadable_input_is_fatal() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let catalog = StaticCatalog::new();
        let err = run(&root, "missing.txt", "packages.lock", &edge_config(), &catalog).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
        assert!(!root.join("packages.lock").exists());
    }

    #[test]
    fn missing_output_directory_is_fatal() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "nginx\n").expect("write input");
        let catalog = StaticCatalog::new().with("nginx", "1.24.0-r0");
        let err =
            run(&root, "packages.txt", "no/such/dir/packages.lock", &edge_config(), &catalog)
                .unwrap_err();
        assert!(format!("{err:#}").contains("stage lock file"));
        assert_eq!(catalog.lookup_count(), 0);
    }

    #[test]
    fn nameless_lines_are_counted_as_skipped() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        fs::write(root.join("packages.txt"), "=1.0\nnginx\n").expect("write input");
        let catalog = StaticCatalog::new().with("nginx", "1.24.0-r0");
        let out = run(&root, "packages.txt", "packages.lock", &edge_config(), &catalog)
            .expect("lock run");
        assert_eq!(out.skipped, 1);
        assert_eq!(out.listing.len(), 1);
    }
}
