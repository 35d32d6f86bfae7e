//! List command

use anyhow::Result;

use crate::cli::Cli;
use crate::output;

pub fn run(cli: &Cli) -> Result<()> {
    let updater = super::build_updater(cli)?;

    let spinner = output::listing_spinner(&updater.config().repository, cli.quiet);
    let builds = updater.candidates();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let builds = builds?;

    if builds.is_empty() {
        output::warning("No eligible builds found");
        return Ok(());
    }

    output::header(&format!(
        "{} builds for {}",
        updater.config().binary_name,
        updater.config().platform()
    ));

    let last = builds.len() - 1;
    for (i, build) in builds.iter().enumerate() {
        println!("{}", output::build_row(build, i == last));
    }

    println!();
    output::info(&format!("{} eligible build(s)", builds.len()));
    Ok(())
}
