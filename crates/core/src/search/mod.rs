//! Query sanitizing and title matching.
//!
//! The same [`sanitize`] pass is applied to the user query and to every
//! candidate title, which is what makes the substring check in
//! [`find_matches`] case- and punctuation-insensitive.

use std::sync::LazyLock;

use regex::Regex;

use crate::zettel::Zettel;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w ]+").unwrap());
static MULTI_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Lowercase `text` and reduce it to word characters and single spaces.
///
/// Idempotent, never fails; the result may be empty.
pub fn sanitize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    MULTI_SPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Keep the zettels whose sanitized title contains the sanitized query.
///
/// An empty result is the normal "nothing found" outcome, not an error.
pub fn find_matches(query: &str, zettels: &[Zettel]) -> Vec<Zettel> {
    let needle = sanitize(query);
    zettels
        .iter()
        .filter(|z| sanitize(&z.title).contains(&needle))
        .cloned()
        .collect()
}
