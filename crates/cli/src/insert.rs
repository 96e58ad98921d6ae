//! Text-insertion boundary.
//!
//! The chosen note reference leaves the process through this seam. The
//! default sink writes to stdout so the output can be piped to whatever
//! does the actual typing; replacing a pre-selection is delegated to the
//! same seam so callers thread the decision explicitly instead of via
//! shared state.

use std::io::{self, Write};

pub trait TextSink {
    /// Remove the pre-selected text the insertion replaces.
    fn delete_selection(&mut self) -> io::Result<()>;

    /// Emit the final insertion text.
    fn insert_text(&mut self, text: &str) -> io::Result<()>;
}

/// Stdout-backed sink. Deleting a selection is a no-op here: the replaced
/// text never reached the stream in the first place.
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn delete_selection(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn insert_text(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{text}")
    }
}
