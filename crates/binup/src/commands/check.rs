//! Check command

use anyhow::Result;

use crate::cli::Cli;
use crate::output;

pub fn run(cli: &Cli) -> Result<()> {
    let updater = super::build_updater(cli)?;
    let repository = updater.config().repository.clone();

    let spinner = output::listing_spinner(&repository, cli.quiet);
    let latest = updater.find_latest();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match latest? {
        Some(build) => {
            output::success(&format!("Latest build: {}", build));
            output::detail("Version", &build.version_display());
            output::detail("Platform", &format!("{}/{}", build.os, build.arch));
            output::detail("URL", &build.url);
        }
        None => {
            output::warning(&format!(
                "No eligible build of {} for {} in {}",
                updater.config().binary_name,
                updater.config().platform(),
                repository
            ));
        }
    }

    Ok(())
}
