//! Shared constants for test infrastructure

// Binary names
pub const BINARY_APP: &str = "app";
pub const BINARY_OTHER: &str = "other";

// Platform identifiers used in listings
pub const OS_LINUX: &str = "linux";
pub const OS_WINDOWS: &str = "windows";
pub const OS_DARWIN: &str = "darwin";
pub const ARCH_AMD64: &str = "amd64";
pub const ARCH_ARM64: &str = "arm64";

// Version constants
pub const VERSION_1_0_0: &str = "1.0.0";
pub const VERSION_1_2_0: &str = "1.2.0";
pub const VERSION_1_3_0: &str = "1.3.0";
pub const VERSION_2_0_0_RC_1: &str = "2.0.0-rc.1";
pub const VERSION_BOGUS: &str = "bogus";

// Listing path served by the mock repository
pub const LISTING_PATH: &str = "/repository/raw/app/";

// Binary content for testing
pub const ORIGINAL_CONTENT: &[u8] = b"original binary";
pub const NEW_CONTENT: &[u8] = b"new binary 1.3.0";

/// Artifact filename in the default `<name>-<version>-<os>-<arch>` layout
pub fn artifact(name: &str, version: &str, os: &str, arch: &str) -> String {
    format!("{}-{}-{}-{}", name, version, os, arch)
}

/// Linux/amd64 artifact of the test binary
pub fn linux_app(version: &str) -> String {
    artifact(BINARY_APP, version, OS_LINUX, ARCH_AMD64)
}
