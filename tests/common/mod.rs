//! Shared fixtures for pipeline integration tests
//!
//! Writes the three source tables as real CSV files into a temporary data
//! directory, with the column layout each upstream export uses.

use roster::RosterConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const AWARD_COLUMNS: [&str; 7] = [
    "person_name",
    "person_wikidata_id",
    "person_description",
    "viaf_id",
    "isiscb_id",
    "award_name",
    "year",
];

pub const EDITOR_COLUMNS: [&str; 9] = [
    "person_name",
    "person_qid",
    "person_description",
    "viaf_id",
    "isiscb_id",
    "journal_name",
    "role",
    "start_date",
    "end_date",
];

pub const OFFICER_COLUMNS: [&str; 9] = [
    "person_name",
    "person_wikidata_id",
    "person_description",
    "viaf_id",
    "isiscb_id",
    "organization",
    "role",
    "start_year",
    "end_year",
];

/// A temporary data directory with the three source tables
pub struct DataDir {
    dir: TempDir,
    pub awards: Vec<Vec<String>>,
    pub editors: Vec<Vec<String>>,
    pub officers: Vec<Vec<String>>,
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

impl DataDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            awards: Vec::new(),
            editors: Vec::new(),
            officers: Vec::new(),
        }
    }

    /// `[name, wikidata_id, description, viaf, isiscb, award, year]`
    pub fn award(mut self, fields: [&str; 7]) -> Self {
        self.awards.push(owned(&fields));
        self
    }

    /// `[name, qid, description, viaf, isiscb, journal, role, start, end]`
    pub fn editor(mut self, fields: [&str; 9]) -> Self {
        self.editors.push(owned(&fields));
        self
    }

    /// `[name, wikidata_id, description, viaf, isiscb, org, role, start, end]`
    pub fn officer(mut self, fields: [&str; 9]) -> Self {
        self.officers.push(owned(&fields));
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write the tables and return a config pointing at them
    pub fn write(&self) -> RosterConfig {
        let config = RosterConfig::default()
            .with_data_dir(self.path())
            .with_output_dir(self.output_dir());
        write_table(&self.path().join(&config.sources.awards), &AWARD_COLUMNS, &self.awards);
        write_table(&self.path().join(&config.sources.editors), &EDITOR_COLUMNS, &self.editors);
        write_table(&self.path().join(&config.sources.officers), &OFFICER_COLUMNS, &self.officers);
        config
    }
}

fn write_table(path: &Path, columns: &[&str], rows: &[Vec<String>]) {
    let mut writer = csv::Writer::from_path(path).expect("open table");
    writer.write_record(columns).expect("write header");
    for row in rows {
        writer.write_record(row).expect("write row");
    }
    writer.flush().expect("flush table");
}
