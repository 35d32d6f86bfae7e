//! Build record model
//!
//! A `BuildRecord` describes one artifact discovered in a repository listing.
//! Records are built by the tokenizer, receive their download URL once they
//! pass eligibility matching, and are read-only afterwards.

use semver::Version;
use std::fmt;

/// One artifact published in a binary repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    /// Binary name (e.g. "app")
    pub name: String,

    /// Filename exactly as it appeared in the listing, platform suffix included
    pub raw_filename: String,

    /// Parsed semantic version, `None` when the version token is not semver
    pub version: Option<Version>,

    /// Target operating system (e.g. "linux")
    pub os: String,

    /// Target architecture (e.g. "amd64")
    pub arch: String,

    /// Opaque checksum, carried through but never verified
    pub checksum: String,

    /// Download href, empty until the record passes eligibility matching
    pub url: String,
}

impl BuildRecord {
    /// Attach the download href of the listing entry this record came from
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Returns true if this build is strictly newer than `version`.
    ///
    /// A record without a parsed version is never newer, and neither is any
    /// record when `version` itself is not valid semver.
    pub fn newer_than(&self, version: &str) -> bool {
        let Some(own) = &self.version else {
            return false;
        };
        match Version::parse(version.trim_start_matches('v')) {
            Ok(other) => other.cmp_precedence(own).is_lt(),
            Err(_) => false,
        }
    }

    /// Version for display, "unknown" when absent
    pub fn version_display(&self) -> String {
        self.version
            .as_ref()
            .map(Version::to_string)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl fmt::Display for BuildRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_filename)
    }
}
