//! Person records and the roles that bind them to awards, journals, and organizations

use crate::source::normalize::{normalize_name, parse_year};
use serde::{Deserialize, Serialize};

/// Identity used to decide whether two rows describe the same person.
///
/// `qid:<wikidata id>` when the row carries an identifier, otherwise
/// `name:<normalized name>`. Two unrelated people with the same normalized
/// name and no identifier share a key; nothing here tries to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonKey(String);

impl PersonKey {
    const QID_PREFIX: &'static str = "qid:";
    const NAME_PREFIX: &'static str = "name:";

    /// Derive a key from an identifier and a display name.
    ///
    /// Returns `None` when both are blank.
    pub fn derive(wikidata_id: &str, name: &str) -> Option<Self> {
        let qid = wikidata_id.trim();
        if !qid.is_empty() {
            return Some(Self(format!("{}{}", Self::QID_PREFIX, qid)));
        }
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return None;
        }
        Some(Self(format!("{}{}", Self::NAME_PREFIX, normalized)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public id for a person without a wikidata identifier: `n_` followed
    /// by the normalized name with spaces turned into underscores.
    pub fn slug(&self) -> String {
        let body = match self.0.strip_prefix(Self::NAME_PREFIX) {
            Some(rest) => format!("n_{}", rest),
            None => self.0.clone(),
        };
        body.replace(' ', "_")
    }
}

impl std::fmt::Display for PersonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An award received, with the year when the source gave a numeric one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub year: Option<i32>,
}

/// A journal editorship.
///
/// Start and end stay as the source wrote them; editor data often carries
/// partial dates that are not plain years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editorship {
    pub journal: String,
    pub role: String,
    pub start: String,
    pub end: String,
}

impl Editorship {
    /// Start year, only if the raw start is purely numeric
    pub fn start_year(&self) -> Option<i32> {
        parse_year(&self.start)
    }

    /// End year, only if the raw end is purely numeric
    pub fn end_year(&self) -> Option<i32> {
        parse_year(&self.end)
    }
}

/// An office or membership held in an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub org: String,
    pub role: String,
    pub start: Option<i32>,
    pub end: Option<i32>,
}

/// A fully merged and identified person.
///
/// Produced once by [`crate::identify::assign`] and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Public identifier (wikidata id, or a slug of the normalized name)
    pub id: String,
    pub name: String,
    pub wikidata_id: Option<String>,
    pub description: Option<String>,
    pub viaf_id: Option<String>,
    pub isiscb_id: Option<String>,
    pub awards: Vec<Award>,
    pub editorships: Vec<Editorship>,
    pub memberships: Vec<Membership>,
    /// Total number of roles across all three lists
    pub role_count: usize,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
}

impl Person {
    /// Every year a role of this person mentions.
    ///
    /// Award years, numeric editorship starts and ends, membership starts
    /// and ends, in that order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        let awards = self.awards.iter().filter_map(|a| a.year);
        let editorships = self
            .editorships
            .iter()
            .flat_map(|e| [e.start_year(), e.end_year()])
            .flatten();
        let memberships = self
            .memberships
            .iter()
            .flat_map(|m| [m.start, m.end])
            .flatten();
        awards.chain(editorships).chain(memberships)
    }
}
