//! Title and excerpt extraction from a single note file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::scanner::ScanLimits;
use super::{Zettel, CONTEXT_ELLIPSIS, MD_TITLE_PREFIX};

/// Read a file and build a [`Zettel`] from its first markdown title line.
///
/// Scans at most `limits.max_title_search_lines` lines for a line starting
/// with `"# "`. When one is found, up to `limits.max_context_lines` following
/// lines (fewer if the file ends sooner) are captured with trailing
/// whitespace trimmed, and the `...` sentinel is appended. Returns
/// `Ok(None)` when no title line is found within the budget; io errors
/// (including invalid UTF-8) bubble up for the scanner to skip over.
pub fn extract_zettel(path: &Path, limits: &ScanLimits) -> io::Result<Option<Zettel>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let mut inspected = 0usize;
    while inspected < limits.max_title_search_lines {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        inspected += 1;

        if !line.starts_with(MD_TITLE_PREFIX) {
            continue;
        }

        let mut context: Vec<String> = Vec::with_capacity(limits.max_context_lines + 1);
        for _ in 0..limits.max_context_lines {
            match lines.next() {
                Some(next) => context.push(next?.trim_end().to_string()),
                None => break,
            }
        }
        context.push(CONTEXT_ELLIPSIS.to_string());

        return Ok(Some(Zettel {
            uid: uid_from_path(path),
            title: line.trim().to_string(),
            context: context.join("\n"),
        }));
    }

    Ok(None)
}

fn uid_from_path(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}
