//! Two-pass network construction: accumulate pair weights, then filter

use super::graph::{Graph, GraphEdge, GraphNode};
use crate::person::Person;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Kinds of shared context that connect people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AffiliationKind {
    Organization,
    Journal,
    Award,
}

impl AffiliationKind {
    pub const ALL: [AffiliationKind; 3] = [
        AffiliationKind::Organization,
        AffiliationKind::Journal,
        AffiliationKind::Award,
    ];
}

/// Weight each shared group adds to a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliationWeights {
    pub organization: u32,
    pub journal: u32,
    pub award: u32,
}

impl Default for AffiliationWeights {
    fn default() -> Self {
        Self {
            organization: 1,
            journal: 2,
            award: 1,
        }
    }
}

impl AffiliationWeights {
    pub fn weight(&self, kind: AffiliationKind) -> u32 {
        match kind {
            AffiliationKind::Organization => self.organization,
            AffiliationKind::Journal => self.journal,
            AffiliationKind::Award => self.award,
        }
    }
}

/// Network construction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub weights: AffiliationWeights,
    /// Edges lighter than this are dropped
    pub min_weight: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            weights: AffiliationWeights::default(),
            min_weight: 2,
        }
    }
}

impl NetworkConfig {
    pub fn with_weights(mut self, weights: AffiliationWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_min_weight(mut self, min_weight: u32) -> Self {
        self.min_weight = min_weight;
        self
    }
}

/// Group name to the set of member ids, for one affiliation kind
pub type AffiliationIndex = BTreeMap<String, BTreeSet<String>>;

/// Index people by the groups of one affiliation kind.
///
/// Repeated roles in the same group count once.
pub fn affiliation_index(people: &[Person], kind: AffiliationKind) -> AffiliationIndex {
    let mut index = AffiliationIndex::new();
    for p in people {
        let groups: Vec<&str> = match kind {
            AffiliationKind::Organization => p.memberships.iter().map(|m| m.org.as_str()).collect(),
            AffiliationKind::Journal => p.editorships.iter().map(|e| e.journal.as_str()).collect(),
            AffiliationKind::Award => p.awards.iter().map(|a| a.name.as_str()).collect(),
        };
        for group in groups {
            index.entry(group.to_string()).or_default().insert(p.id.clone());
        }
    }
    index
}

/// Add `weight` to every unordered pair in every group.
///
/// Members iterate in sorted order, so each pair is keyed `(lower, higher)`.
/// Singleton groups produce nothing.
fn accumulate(index: &AffiliationIndex, weight: u32, pairs: &mut BTreeMap<(String, String), u32>) {
    for members in index.values() {
        let members: Vec<&String> = members.iter().collect();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                *pairs
                    .entry((members[i].clone(), members[j].clone()))
                    .or_insert(0) += weight;
            }
        }
    }
}

/// Build the co-affiliation graph.
pub fn build(people: &[Person], config: &NetworkConfig) -> Graph {
    let mut pairs: BTreeMap<(String, String), u32> = BTreeMap::new();
    for kind in AffiliationKind::ALL {
        let index = affiliation_index(people, kind);
        accumulate(&index, config.weights.weight(kind), &mut pairs);
    }
    let candidates = pairs.len();

    let links: Vec<GraphEdge> = pairs
        .into_iter()
        .filter(|(_, weight)| *weight >= config.min_weight)
        .map(|((source, target), weight)| GraphEdge {
            source,
            target,
            weight,
        })
        .collect();

    // Second pass: nodes come only from the surviving links.
    let connected: BTreeSet<&str> = links
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();
    let by_id: HashMap<&str, &Person> = people.iter().map(|p| (p.id.as_str(), p)).collect();
    let nodes: Vec<GraphNode> = connected
        .into_iter()
        .filter_map(|id| by_id.get(id).map(|p| GraphNode::from(*p)))
        .collect();

    tracing::debug!(
        candidates,
        links = links.len(),
        nodes = nodes.len(),
        min_weight = config.min_weight,
        "built network"
    );

    Graph { nodes, links }
}
