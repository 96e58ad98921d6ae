//! Zettel representation and discovery.

pub mod extractor;
pub mod scanner;

/// Start of a markdown title line.
pub const MD_TITLE_PREFIX: &str = "# ";

/// Sentinel appended after the captured context excerpt.
pub const CONTEXT_ELLIPSIS: &str = "...";

/// A note file reduced to what the lookup pipeline needs.
///
/// Built during a scan pass and discarded after the selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zettel {
    /// Identifier derived from the file name, extension stripped.
    pub uid: String,
    /// First markdown title line of the file, trimmed, marker retained.
    pub title: String,
    /// A few lines following the title, newline-joined, ending in `...`.
    pub context: String,
}

impl Zettel {
    /// Title without the leading markdown marker.
    pub fn display_title(&self) -> &str {
        self.title.strip_prefix(MD_TITLE_PREFIX).unwrap_or(&self.title).trim()
    }

    /// How a zettel is rendered as a selectable option.
    pub fn option_label(&self) -> String {
        format!("{} [[{}]]\n{}", self.title, self.uid, self.context)
    }

    /// The text emitted once a zettel is chosen: `Title [[uid]]`.
    pub fn insertion_line(&self) -> String {
        format!("{} [[{}]]", self.display_title(), self.uid)
    }
}
