//! Roster: people registry and co-affiliation network
//!
//! Merges three independently sourced tables (award recipients, journal
//! editors, organization officers) into one list of people, connects people
//! who share affiliations, and summarizes the result.
//!
//! # Stages
//!
//! - **Resolve**: rows collapse onto a dedup key (wikidata id, else the
//!   normalized name); the first non-empty value of each field wins.
//! - **Identify**: each person gets a public id, a role count, and a year range.
//! - **Network**: shared organizations, journals, and awards add weight to
//!   pairs; light pairs are dropped, and only connected people become nodes.
//! - **Stats**: distinct counts, decade timeline, top-connected ranking.
//!
//! # Example
//!
//! ```
//! use roster::source::{row, SourceKind, SourceRows};
//! use roster::{pipeline, RosterConfig};
//!
//! let rows = SourceRows::new()
//!     .with_row(SourceKind::Editors, row([("person_name", "George Sarton"), ("journal_name", "Isis")]))
//!     .with_row(SourceKind::Editors, row([("person_name", "Henry Guerlac"), ("journal_name", "Isis")]));
//! let docs = pipeline::run(&rows, &RosterConfig::default());
//! assert_eq!(docs.graph.links.len(), 1);
//! ```

pub mod config;
mod error;
pub mod identify;
pub mod network;
pub mod output;
mod person;
pub mod pipeline;
pub mod resolve;
pub mod source;
pub mod stats;

pub use config::RosterConfig;
pub use error::{RosterError, RosterResult};
pub use network::{Graph, GraphEdge, GraphNode, NetworkConfig};
pub use person::{Award, Editorship, Membership, Person, PersonKey};
pub use pipeline::Documents;
pub use stats::Stats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
