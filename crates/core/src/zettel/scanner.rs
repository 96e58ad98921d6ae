//! Non-recursive scan of the notes directory.

use std::path::Path;

use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

use super::extractor::extract_zettel;
use super::Zettel;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("notes root is not a readable directory: {0}")]
    MissingRoot(String),
}

/// Per-scan line budgets, resolved from configuration.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    /// Max number of lines to search for a title inside a file.
    pub max_title_search_lines: usize,
    /// Number of lines after the title kept as the excerpt.
    pub max_context_lines: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self { max_title_search_lines: 50, max_context_lines: 5 }
    }
}

/// Scan `root` (non-recursively) and return a zettel per titled note file.
///
/// Files without a title line within the budget yield nothing. Unreadable
/// entries and files that fail to decode are skipped with a warning; only a
/// missing root aborts the scan. Results are sorted by uid so the output is
/// stable across platforms whose directory listing order differs.
pub fn scan_notes(root: &Path, limits: &ScanLimits) -> Result<Vec<Zettel>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.display().to_string()));
    }

    let mut zettels = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match extract_zettel(entry.path(), limits) {
            Ok(Some(zettel)) => zettels.push(zettel),
            Ok(None) => {}
            Err(e) => {
                warn!("skipping note {}: {e}", entry.path().display());
            }
        }
    }

    zettels.sort_by(|a, b| a.uid.cmp(&b.uid));
    Ok(zettels)
}
