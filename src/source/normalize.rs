//! Row normalization: trimming, year parsing, and name folding
//!
//! Stateless. Turns a raw source row into the identity fields and (at most
//! one) role that the resolver merges. Nothing in here fails; unusable
//! values become empty or absent.

use super::{RawRow, SourceKind};
use crate::person::{Award, Editorship, Membership, PersonKey};

/// Trimmed value of a column, empty if the column is missing
pub fn clean(row: &RawRow, field: &str) -> String {
    row.get(field).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Parse a year.
///
/// Accepts only a non-empty run of ASCII digits (after trimming). Partial
/// dates, signs, and anything else yield `None`.
pub fn parse_year(value: &str) -> Option<i32> {
    let v = value.trim();
    if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    v.parse().ok()
}

/// Case-fold and collapse whitespace runs to single spaces
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Identity fields shared by all three sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub wikidata_id: Option<String>,
    pub description: Option<String>,
    pub viaf_id: Option<String>,
    pub isiscb_id: Option<String>,
}

/// The role a single row contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Award(Award),
    Editorship(Editorship),
    Membership(Membership),
}

/// A row that carries a usable name and key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub key: PersonKey,
    pub identity: Identity,
    /// `None` when the role's defining field (award, journal, organization) is blank
    pub role: Option<Role>,
}

/// Normalize one row of the given source.
///
/// Returns `None` for rows without a display name or derivable key.
pub fn normalize(kind: SourceKind, row: &RawRow) -> Option<NormalizedRow> {
    let name = clean(row, "person_name");
    if name.is_empty() {
        return None;
    }
    let wikidata_id = clean(row, kind.id_field());
    let key = PersonKey::derive(&wikidata_id, &name)?;

    let identity = Identity {
        name,
        wikidata_id: non_empty(wikidata_id),
        description: non_empty(clean(row, "person_description")),
        viaf_id: non_empty(clean(row, "viaf_id")),
        isiscb_id: non_empty(clean(row, "isiscb_id")),
    };

    Some(NormalizedRow {
        key,
        identity,
        role: role(kind, row),
    })
}

fn role(kind: SourceKind, row: &RawRow) -> Option<Role> {
    match kind {
        SourceKind::Awards => {
            let name = non_empty(clean(row, "award_name"))?;
            Some(Role::Award(Award {
                name,
                year: parse_year(&clean(row, "year")),
            }))
        }
        SourceKind::Editors => {
            let journal = non_empty(clean(row, "journal_name"))?;
            Some(Role::Editorship(Editorship {
                journal,
                role: clean(row, "role"),
                start: clean(row, "start_date"),
                end: clean(row, "end_date"),
            }))
        }
        SourceKind::Officers => {
            let org = non_empty(clean(row, "organization"))?;
            Some(Role::Membership(Membership {
                org,
                role: clean(row, "role"),
                start: parse_year(&clean(row, "start_year")),
                end: parse_year(&clean(row, "end_year")),
            }))
        }
    }
}
