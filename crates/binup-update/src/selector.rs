//! Build discovery
//!
//! Fetches the repository listing, tokenizes every anchor, keeps the builds
//! the matcher accepts and ranks them with the ordering strategy. Entries
//! that cannot be tokenized are dropped silently; only a failure to fetch
//! the listing itself is an error.

use binup_core::{
    parse_listing, select_latest, sort_ascending, BuildRecord, Matcher, OrderingStrategy,
    SemverOrdering, Tokenizer,
};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Result, UpdateError};
use crate::fetch::Fetcher;

/// Finds the latest eligible build in a repository listing
pub struct Selector {
    /// URL of the listing page
    repository: String,

    /// Filename tokenizer
    tokenizer: Tokenizer,

    /// Eligibility predicate
    matcher: Box<dyn Matcher>,

    /// Ranking of eligible builds
    ordering: Box<dyn OrderingStrategy>,

    /// HTTP transport
    fetcher: Arc<dyn Fetcher>,
}

impl Selector {
    /// Create a selector ranking by semantic version
    pub fn new(
        repository: impl Into<String>,
        tokenizer: Tokenizer,
        matcher: Box<dyn Matcher>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            repository: repository.into(),
            tokenizer,
            matcher,
            ordering: Box::new(SemverOrdering),
            fetcher,
        }
    }

    /// Replace the eligibility predicate
    pub fn with_matcher(mut self, matcher: Box<dyn Matcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Replace the ordering strategy
    pub fn with_ordering(mut self, ordering: Box<dyn OrderingStrategy>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Latest eligible build, `None` when nothing in the listing qualifies
    pub fn find_latest(&self) -> Result<Option<BuildRecord>> {
        let eligible = self.fetch_eligible()?;
        let latest = select_latest(eligible, self.ordering.as_ref());

        match &latest {
            Some(build) => info!("Latest build: {} ({})", build, build.version_display()),
            None => info!("No eligible build in {}", self.repository),
        }
        Ok(latest)
    }

    /// All eligible builds in ascending order; the last one is the latest
    pub fn candidates(&self) -> Result<Vec<BuildRecord>> {
        let mut eligible = self.fetch_eligible()?;
        sort_ascending(&mut eligible, self.ordering.as_ref());
        Ok(eligible)
    }

    /// Eligible builds of an already fetched listing, in document order
    pub fn eligible_builds(&self, html: &[u8]) -> Vec<BuildRecord> {
        let base = Url::parse(&self.repository).ok();

        parse_listing(html)
            .into_iter()
            .filter_map(|entry| {
                let Some(build) = self.tokenizer.tokenize(&entry.text) else {
                    debug!("Skipping unparseable entry {}", entry.text);
                    return None;
                };
                if !self.matcher.matches(&build) {
                    debug!("Skipping ineligible build {}", build);
                    return None;
                }
                Some(build.with_url(resolve_href(base.as_ref(), &entry.href)))
            })
            .collect()
    }

    fn fetch_eligible(&self) -> Result<Vec<BuildRecord>> {
        let html = self
            .fetcher
            .fetch(&self.repository)
            .map_err(|source| UpdateError::Fetch {
                url: self.repository.clone(),
                source,
            })?;

        let eligible = self.eligible_builds(&html);
        debug!(
            "{} eligible builds in {}",
            eligible.len(),
            self.repository
        );
        Ok(eligible)
    }
}

/// Resolve a relative href against the listing URL; absolute hrefs are kept
fn resolve_href(base: Option<&Url>, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    base.and_then(|base| base.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| href.to_string())
}
