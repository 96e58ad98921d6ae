//! Core library for notekit: note lookup over a directory of markdown
//! zettels, and todo.txt task parsing with status-board rendering.
//!
//! Interactive concerns (prompts, text insertion, stdio plumbing) live in
//! the CLI crate; everything here is a pure transform plus read-only file
//! access in the scanner.

pub mod board;
pub mod config;
pub mod search;
pub mod zettel;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
