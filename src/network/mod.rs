//! Co-affiliation network
//!
//! People become connected when they share an organization, a journal, or an
//! award. Each shared group adds its affiliation weight to every pair of its
//! members; pairs whose total stays below the materiality threshold are
//! dropped, and only people left with at least one edge appear as nodes.

mod builder;
mod graph;

#[cfg(test)]
mod tests;

pub use builder::{affiliation_index, build, AffiliationIndex, AffiliationKind, AffiliationWeights, NetworkConfig};
pub use graph::{Graph, GraphEdge, GraphNode};
