//! Summary statistics over the people list and the filtered network
//!
//! The decade timeline counts award years and numeric editorship start
//! years only. Editorship end years and membership years are left out; the
//! published timeline has always been built this way.

use crate::network::Graph;
use crate::person::Person;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Stats settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Length of the top-connected ranking
    pub top_connected: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { top_connected: 15 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    pub decade: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedPerson {
    pub id: String,
    pub name: String,
    pub connections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgCount {
    pub name: String,
    pub count: usize,
}

/// The stats document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_people: usize,
    pub total_awards: usize,
    pub total_journals: usize,
    pub total_organizations: usize,
    pub total_connected: usize,
    pub total_edges: usize,
    pub awards_list: Vec<String>,
    pub journals_list: Vec<String>,
    pub organizations_list: Vec<String>,
    pub timeline: Vec<DecadeCount>,
    pub top_connected: Vec<ConnectedPerson>,
    pub org_stats: Vec<OrgCount>,
}

/// Round a year down to its decade
pub fn decade(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Edges per person, in the order people are first met walking the links
pub fn connection_counts(graph: &Graph) -> IndexMap<&str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for link in &graph.links {
        *counts.entry(link.source.as_str()).or_insert(0) += 1;
        *counts.entry(link.target.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Compute the stats document
pub fn aggregate(people: &[Person], graph: &Graph, config: &StatsConfig) -> Stats {
    let mut awards: BTreeSet<&str> = BTreeSet::new();
    let mut journals: BTreeSet<&str> = BTreeSet::new();
    let mut orgs: BTreeSet<&str> = BTreeSet::new();
    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    let mut org_members: IndexMap<&str, usize> = IndexMap::new();

    for p in people {
        for a in &p.awards {
            awards.insert(a.name.as_str());
            if let Some(year) = a.year {
                *decades.entry(decade(year)).or_insert(0) += 1;
            }
        }
        for e in &p.editorships {
            journals.insert(e.journal.as_str());
            if let Some(year) = e.start_year() {
                *decades.entry(decade(year)).or_insert(0) += 1;
            }
        }
        for m in &p.memberships {
            orgs.insert(m.org.as_str());
            *org_members.entry(m.org.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = connection_counts(graph).into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let by_id: HashMap<&str, &Person> = people.iter().map(|p| (p.id.as_str(), p)).collect();
    let top_connected: Vec<ConnectedPerson> = ranked
        .into_iter()
        .take(config.top_connected)
        .filter_map(|(id, connections)| {
            by_id.get(id).map(|p| ConnectedPerson {
                id: id.to_string(),
                name: p.name.clone(),
                connections,
            })
        })
        .collect();

    let mut org_stats: Vec<OrgCount> = org_members
        .into_iter()
        .map(|(name, count)| OrgCount {
            name: name.to_string(),
            count,
        })
        .collect();
    org_stats.sort_by(|a, b| b.count.cmp(&a.count));

    let to_list = |set: BTreeSet<&str>| -> Vec<String> { set.into_iter().map(str::to_string).collect() };

    Stats {
        total_people: people.len(),
        total_awards: awards.len(),
        total_journals: journals.len(),
        total_organizations: orgs.len(),
        total_connected: graph.nodes.len(),
        total_edges: graph.links.len(),
        awards_list: to_list(awards),
        journals_list: to_list(journals),
        organizations_list: to_list(orgs),
        timeline: decades
            .into_iter()
            .map(|(decade, count)| DecadeCount { decade, count })
            .collect(),
        top_connected,
        org_stats,
    }
}
