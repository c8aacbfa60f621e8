//! Run configuration
//!
//! Every field has a default, so an empty YAML file (or none at all) gives
//! the standard build: sources and outputs under `data/`, journal weight 2,
//! organization and award weight 1, threshold 2, top 15.

use crate::error::{RosterError, RosterResult};
use crate::network::NetworkConfig;
use crate::source::SourceKind;
use crate::stats::StatsConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names of the three source tables, relative to the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub awards: String,
    pub editors: String,
    pub officers: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            awards: "wikidata_hos_award_recipients.csv".to_string(),
            editors: "wikidata_hos_journal_editors.csv".to_string(),
            officers: "wikidata_hos_org_officers.csv".to_string(),
        }
    }
}

impl SourceFiles {
    pub fn file(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Awards => &self.awards,
            SourceKind::Editors => &self.editors,
            SourceKind::Officers => &self.officers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per JSON indent level
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 1 }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sources: SourceFiles,
    pub network: NetworkConfig,
    pub stats: StatsConfig,
    pub output: OutputConfig,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("data"),
            sources: SourceFiles::default(),
            network: NetworkConfig::default(),
            stats: StatsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RosterConfig {
    /// Load a YAML config file
    pub fn load(path: &Path) -> RosterResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| RosterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse YAML; blank input yields the defaults
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full path of a source table
    pub fn source_path(&self, kind: SourceKind) -> PathBuf {
        self.data_dir.join(self.sources.file(kind))
    }
}
