//! Running platform identifiers
//!
//! Repository publishers name artifacts with Go-style platform identifiers
//! (`linux`/`darwin`/`windows`, `amd64`/`arm64`). Rust reports `macos` and
//! `x86_64`/`aarch64`, so the current platform is translated before matching.

use std::env::consts;

/// Operating system and architecture a build targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Create a platform from explicit identifiers
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform of the running process, in listing naming convention
    pub fn current() -> Self {
        Self::new(listing_os(consts::OS), listing_arch(consts::ARCH))
    }

    /// Current platform with optional per-field overrides
    pub fn current_with_overrides(os: Option<&str>, arch: Option<&str>) -> Self {
        let current = Self::current();
        Self {
            os: os.map(str::to_string).unwrap_or(current.os),
            arch: arch.map(str::to_string).unwrap_or(current.arch),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map a Rust OS identifier to the listing convention
pub fn listing_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust architecture identifier to the listing convention
pub fn listing_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        other => other,
    }
}
