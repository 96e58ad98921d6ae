use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::board::BoardOptions;
use crate::zettel::scanner::ScanLimits;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub board: BoardOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Directory scanned for note files. Supports `~` and env expansion.
    pub notes_root: String,
    /// How many lines to inspect per file before giving up on a title.
    #[serde(default = "default_max_title_search_lines")]
    pub max_title_search_lines: usize,
    /// How many lines after the title to keep as the excerpt.
    #[serde(default = "default_max_context_lines")]
    pub max_context_lines: usize,
    /// Queries shorter than this are rejected before scanning.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

fn default_max_title_search_lines() -> usize {
    50
}

fn default_max_context_lines() -> usize {
    5
}

fn default_min_query_length() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub notes_root: PathBuf,
    pub scan: ScanLimits,
    pub min_query_length: usize,
    pub board: BoardOptions,
    pub logging: LoggingConfig,
}
