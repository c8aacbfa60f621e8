//! Output graph document: nodes and undirected weighted links

use crate::person::Person;
use serde::{Deserialize, Serialize};

/// A connected person, as shown in the network view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub role_count: usize,
}

impl From<&Person> for GraphNode {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            role_count: p.role_count,
        }
    }
}

/// An undirected edge, stored once with `source < target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Sum of affiliation weights over every group the pair shares
    pub weight: u32,
}

impl GraphEdge {
    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(self.target.as_str())
        } else if self.target == id {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}

/// Nodes sorted by id, links sorted by `(source, target)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes
            .binary_search_by(|n| n.id.as_str().cmp(id))
            .ok()
            .map(|i| &self.nodes[i])
    }

    /// The edge between two people, in either argument order
    pub fn edge(&self, a: &str, b: &str) -> Option<&GraphEdge> {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        self.links
            .binary_search_by(|e| (e.source.as_str(), e.target.as_str()).cmp(&(source, target)))
            .ok()
            .map(|i| &self.links[i])
    }

    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.links.iter().filter_map(move |e| e.other(id))
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
