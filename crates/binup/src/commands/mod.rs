//! Command implementations

pub mod check;
pub mod list;
pub mod update;

use anyhow::{Context, Result};
use binup_core::{ConfigLoader, UpdaterConfig};
use binup_update::Updater;

use crate::cli::Cli;

/// Load the layered config and apply command-line overrides on top
pub fn load_config(cli: &Cli) -> Result<UpdaterConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_file(path.clone()),
        None => ConfigLoader::new(),
    };

    let mut config = loader.load().context("Failed to load configuration")?;
    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut UpdaterConfig) {
    if let Some(repository) = &cli.repository {
        config.repository = repository.clone();
    }
    if let Some(name) = &cli.binary_name {
        config.binary_name = name.clone();
    }
    if let Some(path) = &cli.target_path {
        config.target_path = Some(path.clone());
    }
    if let Some(os) = &cli.os {
        config.os = Some(os.clone());
    }
    if let Some(arch) = &cli.arch {
        config.arch = Some(arch.clone());
    }
}

/// Build an updater from the effective config
pub fn build_updater(cli: &Cli) -> Result<Updater> {
    let config = load_config(cli)?;
    tracing::debug!(
        "Using repository {} for {} on {}",
        config.repository,
        config.binary_name,
        config.platform()
    );
    let updater = Updater::new(config)
        .context("Invalid updater configuration")?
        .with_progress(!cli.quiet);
    Ok(updater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "binup",
            "--repository",
            "http://nexus.local/repository/raw/app/",
            "--binary-name",
            "app",
            "--target-path",
            "/opt/app/bin/app",
            "--os",
            "linux",
            "--arch",
            "arm64",
            "check",
        ]);

        let mut config = UpdaterConfig::new("other", "http://old.local/");
        apply_overrides(&cli, &mut config);

        assert_eq!(config.repository, "http://nexus.local/repository/raw/app/");
        assert_eq!(config.binary_name, "app");
        assert_eq!(
            config.target_path.as_deref(),
            Some(std::path::Path::new("/opt/app/bin/app"))
        );
        assert_eq!(config.platform().to_string(), "linux/arm64");
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::parse_from(["binup", "list"]);

        let mut config = UpdaterConfig::new("app", "http://nexus.local/");
        config.os = Some("darwin".to_string());
        apply_overrides(&cli, &mut config);

        assert_eq!(config.binary_name, "app");
        assert_eq!(config.repository, "http://nexus.local/");
        assert_eq!(config.os.as_deref(), Some("darwin"));
        assert!(config.target_path.is_none());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "binary-name: weather\nrepository: http://nexus.local/weather/\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "binup",
            "--config",
            path.to_str().unwrap(),
            "--binary-name",
            "forecast",
            "check",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.repository, "http://nexus.local/weather/");
        assert_eq!(config.binary_name, "forecast");
    }

    #[test]
    fn test_load_config_missing_file() {
        let cli = Cli::parse_from(["binup", "--config", "/nonexistent/binup.yaml", "check"]);
        assert!(load_config(&cli).is_err());
    }
}
