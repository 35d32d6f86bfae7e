//! Ordering strategies for picking the latest build
//!
//! An [`OrderingStrategy`] is a strict weak ordering over eligible builds.
//! The latest build is the last element after a stable ascending sort, so
//! among builds of equal rank the one appearing later in the listing wins.

use std::cmp::Ordering;

use crate::record::BuildRecord;

/// Strict weak ordering over build records
pub trait OrderingStrategy: Send + Sync {
    /// Returns true if `a` ranks strictly below `b`
    fn less_than(&self, a: &BuildRecord, b: &BuildRecord) -> bool;

    /// Total comparison derived from `less_than`; incomparable builds are equal
    fn compare(&self, a: &BuildRecord, b: &BuildRecord) -> Ordering {
        if self.less_than(a, b) {
            Ordering::Less
        } else if self.less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Semantic version precedence.
///
/// A build without a version ranks below every build with one; two builds
/// without a version rank equal. Build metadata is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverOrdering;

impl OrderingStrategy for SemverOrdering {
    fn less_than(&self, a: &BuildRecord, b: &BuildRecord) -> bool {
        match (&a.version, &b.version) {
            (Some(va), Some(vb)) => va.cmp_precedence(vb).is_lt(),
            (None, Some(_)) => true,
            (_, None) => false,
        }
    }
}

/// An ordering strategy that uses a closure as `less_than`
pub struct ClosureOrdering<F> {
    less_than: F,
}

impl<F> ClosureOrdering<F> {
    /// Create a new closure-based ordering
    pub fn new(less_than: F) -> Self {
        Self { less_than }
    }
}

impl<F> OrderingStrategy for ClosureOrdering<F>
where
    F: Fn(&BuildRecord, &BuildRecord) -> bool + Send + Sync,
{
    fn less_than(&self, a: &BuildRecord, b: &BuildRecord) -> bool {
        (self.less_than)(a, b)
    }
}

/// Stable ascending sort, preserving listing order among equals
pub fn sort_ascending(records: &mut [BuildRecord], strategy: &dyn OrderingStrategy) {
    records.sort_by(|a, b| strategy.compare(a, b));
}

/// Highest-ranked build, `None` for an empty set
pub fn select_latest(
    mut records: Vec<BuildRecord>,
    strategy: &dyn OrderingStrategy,
) -> Option<BuildRecord> {
    sort_ascending(&mut records, strategy);
    records.pop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn build(version: Option<&str>, url: &str) -> BuildRecord {
        BuildRecord {
            name: "app".to_string(),
            raw_filename: format!("app-{}-linux-amd64", version.unwrap_or("bogus")),
            version: version.map(|v| Version::parse(v).unwrap()),
            os: "linux".to_string(),
            arch: "amd64".to_string(),
            checksum: String::new(),
            url: url.to_string(),
        }
    }

    fn sample() -> Vec<BuildRecord> {
        vec![
            build(Some("1.3.0"), "a"),
            build(None, "b"),
            build(Some("1.2.0"), "c"),
            build(Some("1.3.0-rc.1"), "d"),
            build(Some("1.3.0+build.7"), "e"),
            build(None, "f"),
            build(Some("0.9.12"), "g"),
        ]
    }

    #[test]
    fn test_semver_less_than() {
        let s = SemverOrdering;
        assert!(s.less_than(&build(Some("1.2.0"), ""), &build(Some("1.3.0"), "")));
        assert!(s.less_than(&build(Some("1.3.0-rc.1"), ""), &build(Some("1.3.0"), "")));
        assert!(s.less_than(&build(Some("1.9.0"), ""), &build(Some("1.10.0"), "")));
        assert!(!s.less_than(&build(Some("1.3.0"), ""), &build(Some("1.3.0+meta"), "")));
    }

    #[test]
    fn test_semver_absent_version() {
        let s = SemverOrdering;
        assert!(s.less_than(&build(None, ""), &build(Some("0.0.0"), "")));
        assert!(!s.less_than(&build(Some("0.0.0"), ""), &build(None, "")));
        assert!(!s.less_than(&build(None, ""), &build(None, "")));
        assert_eq!(s.compare(&build(None, ""), &build(None, "")), Ordering::Equal);
    }

    #[test]
    fn test_semver_is_strict_weak_order() {
        let s = SemverOrdering;
        let records = sample();
        for a in &records {
            assert!(!s.less_than(a, a), "irreflexive for {}", a);
            for b in &records {
                if s.less_than(a, b) {
                    assert!(!s.less_than(b, a), "asymmetric for {} / {}", a, b);
                }
                for c in &records {
                    if s.less_than(a, b) && s.less_than(b, c) {
                        assert!(s.less_than(a, c), "transitive for {} {} {}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_select_latest() {
        let latest = select_latest(sample(), &SemverOrdering).unwrap();
        assert_eq!(latest.version, Some(Version::parse("1.3.0+build.7").unwrap()));
        // "1.3.0" and "1.3.0+build.7" rank equal; the later entry wins
        assert_eq!(latest.url, "e");
    }

    #[test]
    fn test_select_latest_ties_follow_document_order() {
        let records = vec![
            build(Some("2.0.0"), "first"),
            build(Some("2.0.0"), "second"),
            build(Some("1.0.0"), "third"),
        ];
        assert_eq!(select_latest(records, &SemverOrdering).unwrap().url, "second");

        let unversioned = vec![build(None, "x"), build(None, "y")];
        assert_eq!(select_latest(unversioned, &SemverOrdering).unwrap().url, "y");
    }

    #[test]
    fn test_absent_version_never_wins() {
        let records = vec![build(Some("0.0.1"), "real"), build(None, "bogus")];
        assert_eq!(select_latest(records, &SemverOrdering).unwrap().url, "real");

        let records = vec![build(None, "bogus"), build(Some("0.0.1"), "real")];
        assert_eq!(select_latest(records, &SemverOrdering).unwrap().url, "real");
    }

    #[test]
    fn test_select_latest_empty() {
        assert!(select_latest(Vec::new(), &SemverOrdering).is_none());
    }

    #[test]
    fn test_closure_ordering() {
        // Order by URL, reversed
        let ordering = ClosureOrdering::new(|a: &BuildRecord, b: &BuildRecord| a.url > b.url);
        let latest = select_latest(sample(), &ordering).unwrap();
        assert_eq!(latest.url, "a");
    }

    #[test]
    fn test_sort_ascending() {
        let mut records = sample();
        sort_ascending(&mut records, &SemverOrdering);
        let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["b", "f", "g", "c", "d", "a", "e"]);
    }
}
