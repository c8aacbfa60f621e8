//! Entity resolution: collapse rows describing the same person into one record
//!
//! Rows from the three sources are merged in a fixed order (awards, editors,
//! officers). The first row seen for a [`PersonKey`] creates the record and
//! fixes its display name. Later rows back-fill optional identity fields that
//! are still empty and append their role. Nothing already set is overwritten,
//! and role lists keep every entry, duplicates included.

use crate::person::{Award, Editorship, Membership, PersonKey};
use crate::source::normalize::{self, Identity};
use crate::source::{NormalizedRow, Role, SourceKind, SourceRows};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A person under construction, before a public id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPerson {
    pub name: String,
    pub wikidata_id: Option<String>,
    pub description: Option<String>,
    pub viaf_id: Option<String>,
    pub isiscb_id: Option<String>,
    pub awards: Vec<Award>,
    pub editorships: Vec<Editorship>,
    pub memberships: Vec<Membership>,
}

impl MergedPerson {
    /// Start a record from the first row seen for its key
    pub fn new(identity: Identity) -> Self {
        Self {
            name: identity.name,
            wikidata_id: identity.wikidata_id,
            description: identity.description,
            viaf_id: identity.viaf_id,
            isiscb_id: identity.isiscb_id,
            awards: Vec::new(),
            editorships: Vec::new(),
            memberships: Vec::new(),
        }
    }

    /// Back-fill identity fields that are still empty. The name never changes.
    pub fn absorb(&mut self, identity: &Identity) {
        fill(&mut self.description, &identity.description);
        fill(&mut self.viaf_id, &identity.viaf_id);
        fill(&mut self.isiscb_id, &identity.isiscb_id);
        fill(&mut self.wikidata_id, &identity.wikidata_id);
    }

    pub fn push_role(&mut self, role: Role) {
        match role {
            Role::Award(a) => self.awards.push(a),
            Role::Editorship(e) => self.editorships.push(e),
            Role::Membership(m) => self.memberships.push(m),
        }
    }

    pub fn role_count(&self) -> usize {
        self.awards.len() + self.editorships.len() + self.memberships.len()
    }
}

fn fill(slot: &mut Option<String>, value: &Option<String>) {
    if slot.is_none() {
        if let Some(v) = value {
            *slot = Some(v.clone());
        }
    }
}

/// Merged people keyed by dedup key, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    people: IndexMap<PersonKey, MergedPerson>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one normalized row into the registry
    pub fn insert(&mut self, row: NormalizedRow) {
        let NormalizedRow { key, identity, role } = row;
        let person = match self.people.entry(key) {
            indexmap::map::Entry::Occupied(entry) => {
                let person = entry.into_mut();
                person.absorb(&identity);
                person
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(MergedPerson::new(identity)),
        };
        if let Some(role) = role {
            person.push_role(role);
        }
    }

    pub fn get(&self, key: &PersonKey) -> Option<&MergedPerson> {
        self.people.get(key)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonKey, &MergedPerson)> {
        self.people.iter()
    }
}

impl IntoIterator for Registry {
    type Item = (PersonKey, MergedPerson);
    type IntoIter = indexmap::map::IntoIter<PersonKey, MergedPerson>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.into_iter()
    }
}

/// Row counts from a merge, per source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub rows: usize,
    /// Rows dropped for lacking a name or key
    pub skipped: usize,
    /// Rows that appended a role
    pub roles: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ResolveReport {
    pub sources: HashMap<SourceKind, SourceCounts>,
}

impl ResolveReport {
    pub fn counts(&self, kind: SourceKind) -> SourceCounts {
        self.sources.get(&kind).copied().unwrap_or_default()
    }
}

/// Merge all source rows into a registry
pub fn merge(rows: &SourceRows) -> Registry {
    merge_with_report(rows).0
}

/// Merge all source rows, also reporting how many rows each source contributed
pub fn merge_with_report(rows: &SourceRows) -> (Registry, ResolveReport) {
    let mut registry = Registry::new();
    let mut report = ResolveReport::default();

    for kind in SourceKind::ALL {
        let counts = report.sources.entry(kind).or_default();
        for raw in rows.rows(kind) {
            counts.rows += 1;
            match normalize::normalize(kind, raw) {
                Some(row) => {
                    if row.role.is_some() {
                        counts.roles += 1;
                    }
                    registry.insert(row);
                }
                None => counts.skipped += 1,
            }
        }
        tracing::debug!(
            source = %kind,
            rows = counts.rows,
            skipped = counts.skipped,
            roles = counts.roles,
            "merged source"
        );
    }

    (registry, report)
}
