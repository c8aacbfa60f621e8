//! JSON documents handed to the front-end

use crate::error::RosterResult;
use crate::pipeline::Documents;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const PEOPLE_FILE: &str = "people.json";
pub const GRAPH_FILE: &str = "graph.json";
pub const STATS_FILE: &str = "stats.json";

/// Serialize a value as indented JSON. Non-ASCII text is written as-is.
pub fn to_json<T: Serialize>(value: &T, indent: usize) -> RosterResult<Vec<u8>> {
    let indent = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write one document to `path`
pub fn write_document<T: Serialize>(path: &Path, value: &T, indent: usize) -> RosterResult<()> {
    let bytes = to_json(value, indent)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Write all three documents into `dir`, creating it if needed.
///
/// Everything is serialized before the first file is touched, so a
/// serialization failure leaves no partial output behind.
pub fn write_all(dir: &Path, documents: &Documents, indent: usize) -> RosterResult<Vec<PathBuf>> {
    let files = [
        (PEOPLE_FILE, to_json(&documents.people, indent)?),
        (GRAPH_FILE, to_json(&documents.graph, indent)?),
        (STATS_FILE, to_json(&documents.stats, indent)?),
    ];

    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(files.len());
    for (name, bytes) in files {
        let path = dir.join(name);
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "wrote {}", name);
        written.push(path);
    }
    Ok(written)
}
