//! Interactive prompt boundary for the find pipeline.
//!
//! Wraps dialoguer so the command code only sees three operations: a
//! free-text query prompt, a single-choice picker, and a notification.
//! Cancellation (Esc, ctrl-c, closed stdin) surfaces as `Ok(None)` and is
//! never an error.

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use std::io;

#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Ask for a search query, optionally pre-filled with selected text.
pub fn prompt_query(default: Option<&str>) -> Result<Option<String>, PromptError> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt("Search for a note")
        .allow_empty(true);

    if let Some(default) = default {
        input = input.default(default.to_string()).show_default(true);
    }

    match input.interact_text() {
        Ok(text) => Ok(Some(text)),
        Err(dialoguer::Error::IO(e)) if is_cancellation(&e) => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(PromptError::Io(e)),
    }
}

/// Present the matched notes and return the chosen index.
pub fn prompt_choice(options: &[String]) -> Result<Option<usize>, PromptError> {
    match FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a note")
        .items(options)
        .default(0)
        .interact_opt()
    {
        Ok(selection) => Ok(selection),
        Err(dialoguer::Error::IO(e)) if is_cancellation(&e) => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(PromptError::Io(e)),
    }
}

/// One-line dismissible message, kept off stdout so it never mixes with
/// the insertion text.
pub fn notify(title: &str, message: &str) {
    eprintln!("{title}: {message}");
}

fn is_cancellation(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted)
}
