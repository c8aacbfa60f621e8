//! Public ids and derived summary fields

use crate::person::{Person, PersonKey};
use crate::resolve::{MergedPerson, Registry};

/// Turn the merged registry into the ordered people list.
///
/// Sorted by display name; people with equal names keep their registry
/// (first-seen) order.
pub fn assign(registry: Registry) -> Vec<Person> {
    let mut entries: Vec<(PersonKey, MergedPerson)> = registry.into_iter().collect();
    entries.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));

    let people: Vec<Person> = entries
        .into_iter()
        .map(|(key, merged)| identify(&key, merged))
        .collect();

    tracing::debug!(people = people.len(), "assigned ids");
    people
}

/// Assign the id and summary fields of a single person
pub fn identify(key: &PersonKey, merged: MergedPerson) -> Person {
    let id = merged
        .wikidata_id
        .clone()
        .unwrap_or_else(|| key.slug());
    let role_count = merged.role_count();

    let person = Person {
        id,
        name: merged.name,
        wikidata_id: merged.wikidata_id,
        description: merged.description,
        viaf_id: merged.viaf_id,
        isiscb_id: merged.isiscb_id,
        awards: merged.awards,
        editorships: merged.editorships,
        memberships: merged.memberships,
        role_count,
        earliest_year: None,
        latest_year: None,
    };
    let earliest_year = person.years().min();
    let latest_year = person.years().max();
    Person {
        earliest_year,
        latest_year,
        ..person
    }
}
