//! Terminal output for build reports

use binup_core::BuildRecord;
use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn marked(mark: StyledObject<&str>, msg: &str) -> String {
    format!("{} {}", mark, msg)
}

pub fn success(msg: &str) {
    println!("{}", marked(style("✓").green().bold(), msg));
}

/// Warnings go to stderr so `list` output stays pipeable
pub fn warning(msg: &str) {
    eprintln!("{}", marked(style("⚠").yellow().bold(), msg));
}

pub fn info(msg: &str) {
    println!("{}", marked(style("ℹ").blue().bold(), msg));
}

pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Indented detail line under a build
pub fn detail(label: &str, value: &str) {
    println!("  {:<9} {}", style(format!("{}:", label)).dim(), value);
}

/// One row of the candidate table, the latest build highlighted
pub fn build_row(build: &BuildRecord, latest: bool) -> String {
    let version = build.version_display();
    if latest {
        format!(
            "  {} {} {}",
            style(format!("{:<40}", build.raw_filename)).bold(),
            style(format!("{:<16}", version)).green(),
            style("(latest)").green().bold()
        )
    } else {
        format!("  {:<40} {}", build.raw_filename, style(version).dim())
    }
}

/// Spinner while the listing is fetched, `None` in quiet mode
pub fn listing_spinner(repository: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{elapsed}]")
            .expect("Invalid spinner template"),
    );
    pb.set_message(format!("Reading {}", repository));
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}
