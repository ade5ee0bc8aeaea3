//! CLI entry point for apklock.
//!
//! This module is intentionally thin: it handles argument parsing, config loading, logging
//! setup and exit codes. All business logic lives in the `apklock-app` crate.

mod logging;

use anyhow::Context;
use apklock_app::{HttpCatalog, LockInput, run_branch, run_lock, run_resolve};
use apklock_settings::{ApklockConfigV1, Overrides, ResolvedConfig};
use apklock_types::ids;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logging::LogFormat;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "apklock",
    version,
    about = "Pin Alpine package lists to the versions published on a release branch",
    long_about = "Reads a list of package names (optionally annotated name=version), looks up \
                  the version each package currently has on the catalog for one release branch, \
                  and writes name=version lines to the lock file. The lock file is replaced \
                  atomically, and only when at least one package resolved."
)]
struct Cli {
    /// Release branch to query (e.g. 3.19, v3.19, edge). Detected from os-release when unset.
    #[arg(short, long, env = ids::ENV_BRANCH, global = true)]
    branch: Option<String>,

    /// Architecture to query [default: this machine's].
    #[arg(long, global = true)]
    arch: Option<String>,

    /// Restrict lookups to one repository (main, community, testing).
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Restrict lookups to one maintainer.
    #[arg(long, global = true)]
    maintainer: Option<String>,

    /// Catalog search endpoint.
    #[arg(long, env = ids::ENV_CATALOG_URL, global = true)]
    catalog_url: Option<String>,

    /// Release-metadata file used for branch detection [default: /etc/os-release].
    #[arg(long, global = true)]
    os_release: Option<String>,

    /// Distribution the host must be for branch detection [default: alpine].
    #[arg(long, global = true)]
    distribution: Option<String>,

    /// Path to apklock config TOML [default: apklock.toml, optional].
    #[arg(long, env = ids::ENV_CONFIG, global = true)]
    config: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(flatten)]
    lock: LockArgs,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
struct LockArgs {
    /// Package list to read [default: packages.txt].
    #[arg(short, long)]
    input: Option<Utf8PathBuf>,

    /// Lock file to write. May be the same as --input [default: packages.lock].
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,
}

impl LockArgs {
    /// Flags given after `lock` win over the same flags given before it.
    fn or(self, outer: &LockArgs) -> LockArgs {
        LockArgs {
            input: self.input.or_else(|| outer.input.clone()),
            output: self.output.or_else(|| outer.output.clone()),
        }
    }

    fn input(&self) -> &Utf8Path {
        self.input
            .as_deref()
            .unwrap_or(Utf8Path::new(ids::DEFAULT_INPUT))
    }

    fn output(&self) -> &Utf8Path {
        self.output
            .as_deref()
            .unwrap_or(Utf8Path::new(ids::DEFAULT_OUTPUT))
    }
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Resolve every listed package and write the lock file (the default).
    Lock(LockArgs),

    /// Print the published version of the given packages.
    Resolve {
        /// Package names; `name=version` annotations are ignored.
        #[arg(required = true)]
        packages: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the branch a lock run would query.
    Branch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.verbose);

    let command = match cli.cmd.clone() {
        Some(Commands::Lock(args)) => Commands::Lock(args.or(&cli.lock)),
        Some(other) => other,
        None => Commands::Lock(cli.lock.clone()),
    };

    match run(&cli, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "apklock failed");
            eprintln!("apklock error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, command: Commands) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(?config, "resolved configuration");

    match command {
        Commands::Lock(args) => cmd_lock(&config, &args),
        Commands::Resolve { packages, format } => cmd_resolve(&config, &packages, format),
        Commands::Branch => cmd_branch(&config),
    }
}

/// Built-in defaults, then the config file (missing is fine unless named explicitly), then flags.
fn load_config(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    let (path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (Utf8PathBuf::from(ids::DEFAULT_CONFIG), false),
    };

    let cfg = read_config_file(&path, explicit)?;
    let overrides = Overrides {
        branch: cli.branch.clone(),
        arch: cli.arch.clone(),
        repo: cli.repo.clone(),
        maintainer: cli.maintainer.clone(),
        catalog_url: cli.catalog_url.clone(),
        os_release: cli.os_release.clone(),
        distribution: cli.distribution.clone(),
    };
    apklock_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn read_config_file(path: &Utf8Path, explicit: bool) -> anyhow::Result<ApklockConfigV1> {
    if !explicit && !path.exists() {
        return Ok(ApklockConfigV1::default());
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
    if text.trim().is_empty() {
        return Ok(ApklockConfigV1::default());
    }
    apklock_settings::parse_config_toml(&text).with_context(|| format!("parse config {path}"))
}

fn catalog(config: &ResolvedConfig) -> anyhow::Result<HttpCatalog> {
    HttpCatalog::new(&config.catalog_url)
        .with_context(|| format!("create catalog client for {}", config.catalog_url))
}

fn cmd_lock(config: &ResolvedConfig, args: &LockArgs) -> anyhow::Result<()> {
    let catalog = catalog(config)?;
    run_lock(
        LockInput {
            input_path: args.input(),
            output_path: args.output(),
            config,
        },
        &catalog,
    )?;
    Ok(())
}

fn cmd_resolve(
    config: &ResolvedConfig,
    packages: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = catalog(config)?;
    let output = run_resolve(packages, config, &catalog)?;

    match format {
        OutputFormat::Text => {
            for pkg in output.hits() {
                println!("{}", pkg.lock_line());
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&output.entries).context("serialize results")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_branch(config: &ResolvedConfig) -> anyhow::Result<()> {
    let branch = run_branch(config)?;
    println!("{branch}");
    Ok(())
}
