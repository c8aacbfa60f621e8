//! Source datasets and their row schemas
//!
//! Three independently curated tables feed the registry: award recipients,
//! journal editors, and organization officers. Each row is a map from column
//! name to string value; a missing column reads as an empty string.

pub mod normalize;
mod reader;

pub use normalize::{NormalizedRow, Role};
pub use reader::read_rows;

use std::collections::HashMap;

/// One row of a source table, column name to raw value
pub type RawRow = HashMap<String, String>;

/// The three source datasets, in the order they are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Awards,
    Editors,
    Officers,
}

impl SourceKind {
    /// Merge order. Earlier sources win first-non-empty field precedence.
    pub const ALL: [SourceKind; 3] = [SourceKind::Awards, SourceKind::Editors, SourceKind::Officers];

    /// Column holding the person's wikidata identifier.
    ///
    /// The editors table names it differently from the other two.
    pub fn id_field(self) -> &'static str {
        match self {
            SourceKind::Editors => "person_qid",
            SourceKind::Awards | SourceKind::Officers => "person_wikidata_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Awards => "awards",
            SourceKind::Editors => "editors",
            SourceKind::Officers => "officers",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rows from all three sources, as handed to the resolver
#[derive(Debug, Clone, Default)]
pub struct SourceRows {
    pub awards: Vec<RawRow>,
    pub editors: Vec<RawRow>,
    pub officers: Vec<RawRow>,
}

impl SourceRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, kind: SourceKind) -> &[RawRow] {
        match kind {
            SourceKind::Awards => &self.awards,
            SourceKind::Editors => &self.editors,
            SourceKind::Officers => &self.officers,
        }
    }

    pub fn rows_mut(&mut self, kind: SourceKind) -> &mut Vec<RawRow> {
        match kind {
            SourceKind::Awards => &mut self.awards,
            SourceKind::Editors => &mut self.editors,
            SourceKind::Officers => &mut self.officers,
        }
    }

    pub fn with_row(mut self, kind: SourceKind, row: RawRow) -> Self {
        self.rows_mut(kind).push(row);
        self
    }

    /// Total rows across all sources
    pub fn len(&self) -> usize {
        self.awards.len() + self.editors.len() + self.officers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build a row from `(column, value)` pairs
pub fn row<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> RawRow {
    fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
