//! End-to-end run: load sources, merge, identify, build the network, aggregate
//!
//! Each stage consumes the previous stage's output and nothing is revisited.
//! Loading fails fast: a missing or malformed source aborts the run before
//! any document is produced.

use crate::config::RosterConfig;
use crate::error::RosterResult;
use crate::network::{self, Graph};
use crate::person::Person;
use crate::source::{read_rows, SourceKind, SourceRows};
use crate::stats::{self, Stats};
use crate::{identify, output, resolve};
use std::path::PathBuf;
use tracing::info;

/// The three documents a run produces
#[derive(Debug, Clone)]
pub struct Documents {
    pub people: Vec<Person>,
    pub graph: Graph,
    pub stats: Stats,
}

/// Read all three source tables named by the config
pub fn load_sources(config: &RosterConfig) -> RosterResult<SourceRows> {
    let mut rows = SourceRows::new();
    for kind in SourceKind::ALL {
        let path = config.source_path(kind);
        let table = read_rows(&path)?;
        info!(source = %kind, rows = table.len(), path = %path.display(), "read source");
        *rows.rows_mut(kind) = table;
    }
    Ok(rows)
}

/// Run the in-memory stages over already-loaded rows
pub fn run(rows: &SourceRows, config: &RosterConfig) -> Documents {
    let (registry, report) = resolve::merge_with_report(rows);
    for kind in SourceKind::ALL {
        let counts = report.counts(kind);
        if counts.skipped > 0 {
            info!(source = %kind, skipped = counts.skipped, "skipped rows without a usable name");
        }
    }
    info!(people = registry.len(), "found unique people");

    let people = identify::assign(registry);

    let graph = network::build(&people, &config.network);
    info!(
        nodes = graph.nodes.len(),
        edges = graph.links.len(),
        "built graph"
    );

    let stats = stats::aggregate(&people, &graph, &config.stats);
    info!(
        awards = stats.total_awards,
        journals = stats.total_journals,
        organizations = stats.total_organizations,
        "computed stats"
    );

    Documents {
        people,
        graph,
        stats,
    }
}

/// Load sources and run every stage
pub fn build(config: &RosterConfig) -> RosterResult<Documents> {
    let rows = load_sources(config)?;
    Ok(run(&rows, config))
}

/// Load, run, and write the documents to the configured output directory
pub fn build_and_write(config: &RosterConfig) -> RosterResult<(Documents, Vec<PathBuf>)> {
    let documents = build(config)?;
    let written = output::write_all(&config.output_dir, &documents, config.output.indent)?;
    Ok((documents, written))
}
