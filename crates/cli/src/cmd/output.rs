//! Shared output formatting for batch find results.

use notekit_core::zettel::Zettel;
use serde::Serialize;

/// Matched note for JSON output.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub uid: String,
    pub title: String,
    pub context: String,
}

impl From<&Zettel> for MatchOutput {
    fn from(zettel: &Zettel) -> Self {
        Self {
            uid: zettel.uid.clone(),
            title: zettel.display_title().to_string(),
            context: zettel.context.clone(),
        }
    }
}

/// Print matches as a table.
pub fn print_matches_table(matches: &[Zettel]) {
    if matches.is_empty() {
        println!("(no matches)");
        return;
    }

    // Calculate column widths
    let uid_width =
        matches.iter().map(|z| z.uid.len()).max().unwrap_or(3).clamp(3, 30);
    let title_width = matches
        .iter()
        .map(|z| z.display_title().len())
        .max()
        .unwrap_or(5)
        .clamp(5, 50);

    // Header
    println!(
        "{:<uid_width$}  TITLE",
        "UID",
        uid_width = uid_width,
    );
    println!(
        "{:-<uid_width$}  {:-<title_width$}",
        "",
        "",
        uid_width = uid_width,
        title_width = title_width,
    );

    // Rows
    for zettel in matches {
        let uid = truncate(&zettel.uid, uid_width);
        let title = truncate(zettel.display_title(), title_width);

        println!("{:<uid_width$}  {}", uid, title, uid_width = uid_width);
    }

    println!();
    println!("-- {} matches --", matches.len());
}

/// Print matches as JSON.
pub fn print_matches_json(matches: &[Zettel]) {
    let output: Vec<MatchOutput> = matches.iter().map(MatchOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print matching uids only (quiet mode).
pub fn print_matches_quiet(matches: &[Zettel]) {
    for zettel in matches {
        println!("{}", zettel.uid);
    }
}

/// Truncate string with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
