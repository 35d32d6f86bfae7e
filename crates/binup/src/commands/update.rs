//! Update command

use anyhow::Result;
use binup_update::UpdateResult;

use crate::cli::{Cli, UpdateArgs};
use crate::output;

pub fn run(cli: &Cli, args: &UpdateArgs) -> Result<()> {
    let updater = super::build_updater(cli)?;
    let target = updater.target_path()?;

    let result = if args.force {
        match updater.find_latest()? {
            Some(build) => {
                let path = updater.update_to(&build)?;
                UpdateResult::Updated { build, path }
            }
            None => UpdateResult::NoEligibleBuild,
        }
    } else {
        updater.update_if_newer(args.current_version.as_deref())?
    };

    match result {
        UpdateResult::Updated { build, path } => {
            output::success(&format!(
                "Installed {} ({})",
                build,
                build.version_display()
            ));
            output::detail("Path", &path.display().to_string());
        }
        UpdateResult::AlreadyUpToDate { current, latest } => {
            output::info(&format!(
                "Already up to date: {} (latest is {})",
                current,
                latest.version_display()
            ));
        }
        UpdateResult::NoEligibleBuild => {
            output::warning(&format!(
                "No eligible build found; {} left unchanged",
                target.display()
            ));
        }
    }

    Ok(())
}
