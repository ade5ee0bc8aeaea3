//! All-or-nothing lock file writes.
//!
//! Lines are appended to a uniquely named staging file created in the output's
//! directory. `commit` renames it over the output only when at least one line
//! was written; an empty staging file is deleted and the previous output is
//! left byte-for-byte intact. Readers of the output path see either the old
//! file or the complete new one.

use apklock_types::PackageSpec;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::{self, BufWriter, Write};
use tempfile::NamedTempFile;
use thiserror::Error;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

const STAGING_PREFIX: &str = ".apklock-";
const STAGING_SUFFIX: &str = ".tmp";

#[derive(Debug, Error)]
pub enum LockError {
    #[error("cannot create staging file in {dir}")]
    Stage {
        dir: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write staging file {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot replace {path}")]
    Persist {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What `commit` did with the staged listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The output path now holds exactly `lines` entries.
    Written { lines: usize },
    /// Nothing was staged; the output path was not touched.
    Discarded,
}

/// Exclusive staging file for one run.
#[derive(Debug)]
pub struct StagedLock {
    writer: BufWriter<NamedTempFile>,
    lines: usize,
}

impl StagedLock {
    /// Stage next to `final_path` so the commit rename stays on one filesystem.
    pub fn begin(final_path: &Utf8Path) -> Result<Self, LockError> {
        Self::begin_in(staging_dir(final_path))
    }

    pub fn begin_in(dir: &Utf8Path) -> Result<Self, LockError> {
        let file = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(dir)
            .map_err(|source| LockError::Stage {
                dir: dir.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %file.path().display(), "created staging file");
        Ok(Self {
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Append one `name=version` line.
    pub fn append(&mut self, name: &PackageSpec, version: &str) -> Result<(), LockError> {
        writeln!(self.writer, "{name}={version}").map_err(|source| LockError::Write {
            path: self.staging_path().display().to_string(),
            source,
        })?;
        self.lines += 1;
        Ok(())
    }

    pub fn staging_path(&self) -> &std::path::Path {
        self.writer.get_ref().path()
    }

    /// Promote the staging file to `final_path`, or discard it if empty.
    pub fn commit(self, final_path: &Utf8Path) -> Result<CommitOutcome, LockError> {
        let lines = self.lines;
        let staging = self.staging_path().display().to_string();
        let write_err = |source: io::Error| LockError::Write {
            path: staging.clone(),
            source,
        };

        let file = self
            .writer
            .into_inner()
            .map_err(|e| write_err(e.into_error()))?;

        if lines == 0 {
            file.close().map_err(write_err)?;
            tracing::debug!(path = %final_path, "nothing staged; output left untouched");
            return Ok(CommitOutcome::Discarded);
        }

        file.as_file().sync_all().map_err(write_err)?;
        set_output_permissions(&file, final_path).map_err(write_err)?;

        file.persist(final_path)
            .map_err(|e| LockError::Persist {
                path: final_path.to_path_buf(),
                source: e.error,
            })?;
        tracing::debug!(path = %final_path, lines, "committed lock file");
        Ok(CommitOutcome::Written { lines })
    }
}

fn staging_dir(final_path: &Utf8Path) -> &Utf8Path {
    match final_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

/// Keep an existing output's mode; new outputs get the usual 0644 instead of
/// the staging file's private 0600.
fn set_output_permissions(file: &NamedTempFile, final_path: &Utf8Path) -> io::Result<()> {
    match fs::metadata(final_path) {
        Ok(meta) => file.as_file().set_permissions(meta.permissions()),
        Err(_) => set_default_permissions(file),
    }
}

#[cfg(unix)]
fn set_default_permissions(file: &NamedTempFile) -> io::Result<()> {
    file.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &NamedTempFile) -> io::Result<()> {
    Ok(())
}
