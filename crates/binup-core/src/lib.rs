//! # binup-core
//!
//! Core library for binup providing:
//! - The `BuildRecord` model for artifacts published in a binary repository
//! - Filename tokenizing against a configurable field schema
//! - Anchor-tag listing parsing
//! - Pluggable eligibility matching and ordering strategies
//! - Configuration types and the layered configuration loader

pub mod config;
pub mod error;
pub mod listing;
pub mod matcher;
pub mod ordering;
pub mod platform;
pub mod record;
pub mod schema;
pub mod tokenizer;

pub use config::{ConfigLoader, NetworkConfig, SortCriteria, UpdaterConfig};
pub use error::{Error, Result};
pub use listing::{parse_listing, ListingEntry};
pub use matcher::{ClosureMatcher, Matcher, NameOsArchMatcher};
pub use ordering::{select_latest, sort_ascending, ClosureOrdering, OrderingStrategy, SemverOrdering};
pub use platform::Platform;
pub use record::BuildRecord;
pub use schema::{FieldKind, FieldSchema};
pub use tokenizer::{tokenize, Tokenizer};
