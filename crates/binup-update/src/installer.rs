//! Download and atomic install of a selected build
//!
//! The artifact is streamed into a staging file first. Only a complete
//! download is renamed over the target, so the target path always holds
//! either the previous binary or the new one. The staging file is removed
//! on every exit path.

use binup_core::config::staging_path;
use binup_core::BuildRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempPath;
use tracing::{debug, info};

use crate::error::{Result, UpdateError};
use crate::fetch::Fetcher;

/// Installs builds over a target binary
pub struct Installer {
    /// Path to replace, `None` for the running executable
    target_path: Option<PathBuf>,

    /// Staging file pattern containing `{filename}`
    tmp_pattern: Option<String>,

    /// HTTP transport
    fetcher: Arc<dyn Fetcher>,

    /// Show a progress spinner while downloading
    show_progress: bool,
}

impl Installer {
    /// Create an installer replacing the running executable
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            target_path: None,
            tmp_pattern: None,
            fetcher,
            show_progress: false,
        }
    }

    /// Set an explicit path to replace
    pub fn with_target_path(mut self, target_path: Option<PathBuf>) -> Self {
        self.target_path = target_path;
        self
    }

    /// Set the staging file pattern
    pub fn with_tmp_pattern(mut self, tmp_pattern: Option<String>) -> Self {
        self.tmp_pattern = tmp_pattern;
        self
    }

    /// Enable or disable the download progress spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Path that will be replaced
    pub fn resolve_target(&self) -> Result<PathBuf> {
        match &self.target_path {
            Some(path) => Ok(path.clone()),
            None => std::env::current_exe().map_err(UpdateError::TargetPath),
        }
    }

    /// Staging file used for `build`
    pub fn staging_path(&self, build: &BuildRecord) -> PathBuf {
        staging_path(self.tmp_pattern.as_deref(), &build.raw_filename)
    }

    /// Download `build` and atomically move it over the target.
    ///
    /// Returns the installed path. The target is untouched unless the whole
    /// artifact was downloaded and the final rename succeeded.
    pub fn update_to(&self, build: &BuildRecord) -> Result<PathBuf> {
        let target = self.resolve_target()?;
        let tmp_path = self.staging_path(build);

        debug!("Staging {} at {:?}", build, tmp_path);
        let temp_file_error = |source: io::Error| UpdateError::TempFile {
            path: tmp_path.clone(),
            source,
        };
        let file = create_staging_file(&tmp_path).map_err(temp_file_error)?;
        // Removes the staging file on drop unless it was persisted
        let staged = TempPath::try_from_path(&tmp_path).map_err(temp_file_error)?;

        info!("Downloading {} from {}", build, build.url);
        let size = self.download_into(build, file, &tmp_path)?;
        debug!("Downloaded {} bytes", size);

        make_executable(&staged).map_err(|source| UpdateError::TempFile {
            path: tmp_path.clone(),
            source,
        })?;

        staged.persist(&target).map_err(|e| UpdateError::Replace {
            from: tmp_path.clone(),
            to: target.clone(),
            source: e.error,
        })?;

        info!("Installed {} at {:?}", build, target);
        Ok(target)
    }

    fn download_into(&self, build: &BuildRecord, file: File, tmp_path: &Path) -> Result<u64> {
        let mut writer = BufWriter::new(file);

        let downloaded = if self.show_progress {
            let pb = download_spinner(&build.raw_filename);
            let mut tracked = pb.clone().wrap_write(&mut writer);
            let downloaded = self.fetcher.download(&build.url, &mut tracked);
            match &downloaded {
                Ok(_) => pb.finish_with_message(format!("Downloaded {}", build.raw_filename)),
                Err(_) => pb.abandon(),
            }
            downloaded
        } else {
            self.fetcher.download(&build.url, &mut writer)
        };

        let size = downloaded.map_err(|source| UpdateError::Download {
            url: build.url.clone(),
            source,
        })?;

        writer
            .flush()
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|source| UpdateError::TempFile {
                path: tmp_path.to_path_buf(),
                source,
            })?;

        Ok(size)
    }
}

/// Create the staging file without following anything already at `path`.
///
/// A leftover file or symlink is unlinked once and creation retried, so the
/// download can never land in a file the path merely points to.
fn create_staging_file(path: &Path) -> io::Result<File> {
    let create = || OpenOptions::new().write(true).create_new(true).open(path);
    match create() {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("Removing stale staging file {:?}", path);
            fs::remove_file(path)?;
            create()
        }
        result => result,
    }
}

fn download_spinner(filename: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} {bytes} ({bytes_per_sec})")
            .expect("Invalid progress bar template"),
    );
    pb.set_message(format!("Downloading {}", filename));
    pb
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
