//! Field schema describing how artifact filenames are structured

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Default separator between filename fields
pub const DEFAULT_SEPARATOR: &str = "-";

/// Logical kind of one filename field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Binary name
    Name,
    /// Semantic version
    Version,
    /// Target operating system
    Os,
    /// Target architecture
    Arch,
}

impl FieldKind {
    /// Default field order: `<name>-<version>-<os>-<arch>`
    pub fn default_order() -> Vec<FieldKind> {
        vec![
            FieldKind::Name,
            FieldKind::Version,
            FieldKind::Os,
            FieldKind::Arch,
        ]
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Name => "name",
            FieldKind::Version => "version",
            FieldKind::Os => "os",
            FieldKind::Arch => "arch",
        };
        f.write_str(name)
    }
}

/// Ordered field kinds plus the separator joining them.
///
/// Immutable once built. Duplicate kinds are allowed; when tokenizing, the
/// last occurrence of a kind wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldKind>,
    separator: String,
}

impl FieldSchema {
    /// Create a schema, rejecting an empty field list or separator
    pub fn new(fields: Vec<FieldKind>, separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if fields.is_empty() {
            return Err(Error::invalid_schema("at least one field is required"));
        }
        if separator.is_empty() {
            return Err(Error::invalid_schema("field separator must not be empty"));
        }
        Ok(Self { fields, separator })
    }

    /// Field kinds in filename order
    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Separator between fields
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of tokens a parseable filename must split into
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false, an empty schema cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            fields: FieldKind::default_order(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
