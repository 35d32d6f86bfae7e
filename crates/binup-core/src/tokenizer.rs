//! Filename tokenizing
//!
//! Splits a listing filename into fields according to a [`FieldSchema`].
//! Filenames that do not fit the schema are simply not parseable; this is a
//! normal filtering outcome and never an error.

use semver::Version;
use std::collections::HashMap;
use tracing::trace;

use crate::record::BuildRecord;
use crate::schema::{FieldKind, FieldSchema};

/// Platform suffixes stripped before splitting. They do not count as a field.
pub const PLATFORM_SUFFIXES: &[&str] = &[".exe"];

/// Tokenizer bound to one field schema
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    schema: FieldSchema,
}

impl Tokenizer {
    /// Create a tokenizer for the given schema
    pub fn new(schema: FieldSchema) -> Self {
        Self { schema }
    }

    /// Schema in use
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Tokenize one filename, `None` when it does not fit the schema
    pub fn tokenize(&self, raw_filename: &str) -> Option<BuildRecord> {
        tokenize(raw_filename, &self.schema)
    }
}

/// Tokenize `raw_filename` against `schema`.
///
/// The token count after stripping a platform suffix must equal the schema
/// length exactly. Empty tokens are kept as empty strings. An unparseable
/// version token leaves `version` unset instead of rejecting the record.
pub fn tokenize(raw_filename: &str, schema: &FieldSchema) -> Option<BuildRecord> {
    if raw_filename.is_empty() {
        return None;
    }

    let stem = strip_platform_suffix(raw_filename);
    let tokens: Vec<&str> = stem.split(schema.separator()).collect();
    if tokens.len() != schema.len() {
        trace!(
            "{} has {} fields, schema expects {}",
            raw_filename,
            tokens.len(),
            schema.len()
        );
        return None;
    }

    let by_kind: HashMap<FieldKind, &str> = schema
        .fields()
        .iter()
        .copied()
        .zip(tokens.iter().copied())
        .collect();
    let field = |kind: FieldKind| by_kind.get(&kind).copied().unwrap_or_default();

    let version = match by_kind.get(&FieldKind::Version) {
        Some(token) => Version::parse(token).ok(),
        None => None,
    };

    Some(BuildRecord {
        name: field(FieldKind::Name).to_string(),
        raw_filename: raw_filename.to_string(),
        version,
        os: field(FieldKind::Os).to_string(),
        arch: field(FieldKind::Arch).to_string(),
        checksum: String::new(),
        url: String::new(),
    })
}

fn strip_platform_suffix(filename: &str) -> &str {
    PLATFORM_SUFFIXES
        .iter()
        .find_map(|suffix| filename.strip_suffix(suffix))
        .unwrap_or(filename)
}
