//! Eligibility matching
//!
//! A [`Matcher`] decides whether a tokenized build is a valid update
//! candidate. Callers can supply their own through [`ClosureMatcher`] or by
//! implementing the trait.

use crate::platform::Platform;
use crate::record::BuildRecord;

/// Predicate deciding whether a build is an update candidate
pub trait Matcher: Send + Sync {
    /// Returns true if `record` is eligible
    fn matches(&self, record: &BuildRecord) -> bool;
}

/// Default matcher: same binary name, running OS and running architecture.
///
/// Version is not considered; a build with an unparseable version is still
/// eligible and simply ranks lowest. A placeholder record (empty name) never
/// matches.
#[derive(Debug, Clone)]
pub struct NameOsArchMatcher {
    name: String,
    platform: Platform,
}

impl NameOsArchMatcher {
    /// Match `name` on the running platform
    pub fn new(name: impl Into<String>) -> Self {
        Self::for_platform(name, Platform::current())
    }

    /// Match `name` on an explicit platform
    pub fn for_platform(name: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            platform,
        }
    }

    /// Platform builds must target
    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl Matcher for NameOsArchMatcher {
    fn matches(&self, record: &BuildRecord) -> bool {
        !record.name.is_empty()
            && record.name == self.name
            && record.os == self.platform.os
            && record.arch == self.platform.arch
    }
}

/// A matcher that uses a closure to decide eligibility
pub struct ClosureMatcher<F> {
    predicate: F,
}

impl<F> ClosureMatcher<F> {
    /// Create a new closure-based matcher
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Matcher for ClosureMatcher<F>
where
    F: Fn(&BuildRecord) -> bool + Send + Sync,
{
    fn matches(&self, record: &BuildRecord) -> bool {
        (self.predicate)(record)
    }
}
