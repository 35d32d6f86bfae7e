//! Helpers for install testing

use binup_core::UpdaterConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Run blocking updater code off the async test runtime
pub async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Scratch directory with an installed target binary
pub struct InstallSandbox {
    pub dir: TempDir,
    pub target: PathBuf,
}

impl InstallSandbox {
    /// Create a sandbox whose target holds `content`
    pub fn new(content: &[u8]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("bin").join("app");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, content).unwrap();
        Self { dir, target }
    }

    /// Staging pattern inside the sandbox
    pub fn tmp_pattern(&self) -> String {
        self.staging_dir()
            .join("{filename}.tmp")
            .to_string_lossy()
            .into_owned()
    }

    /// Directory holding staging files
    pub fn staging_dir(&self) -> PathBuf {
        let dir = self.dir.path().join("staging");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Current content of the target
    pub fn target_content(&self) -> Vec<u8> {
        fs::read(&self.target).unwrap()
    }

    /// Files left in the staging directory
    pub fn leftover_staging_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.staging_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    /// Updater config for `app` on linux/amd64 installing into this sandbox
    pub fn config(&self, repository: String) -> UpdaterConfig {
        let mut config = UpdaterConfig::new(super::BINARY_APP, repository);
        config.os = Some(super::OS_LINUX.to_string());
        config.arch = Some(super::ARCH_AMD64.to_string());
        config.target_path = Some(self.target.clone());
        config.tmp_pattern = Some(self.tmp_pattern());
        config
    }
}
