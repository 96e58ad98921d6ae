//! Find command implementation.

use std::path::Path;

use notekit_core::config::loader::ConfigLoader;
use notekit_core::search;
use notekit_core::zettel::scanner::scan_notes;
use notekit_core::zettel::Zettel;
use tracing::error;

use super::output::{print_matches_json, print_matches_quiet, print_matches_table};
use crate::insert::{StdoutSink, TextSink};
use crate::{logging, prompt, FindArgs, OutputFormat};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: FindArgs) {
    // Load configuration
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&rc.logging);

    let batch = args.batch || args.json || args.quiet;

    // Raw query: the positional argument wins; otherwise prompt, seeded
    // with the pre-selected text when there is one.
    let raw_query = match args.query {
        Some(query) => query,
        None if batch => {
            eprintln!("--batch requires a query argument");
            std::process::exit(2);
        }
        None => match prompt::prompt_query(args.selection.as_deref()) {
            Ok(Some(text)) => text,
            // User cancelled: quit without a word.
            Ok(None) => return,
            Err(e) => {
                eprintln!("Prompt failed: {}", e);
                std::process::exit(1);
            }
        },
    };

    let query = search::sanitize(&raw_query);
    if query.is_empty() {
        // An empty query is treated like a cancelled dialog.
        return;
    }
    if query.chars().count() < rc.min_query_length {
        prompt::notify(
            "Invalid query",
            &format!("enter at least {} characters", rc.min_query_length),
        );
        return;
    }

    let zettels = match scan_notes(&rc.notes_root, &rc.scan) {
        Ok(zettels) => zettels,
        Err(e) => {
            error!("Error scanning notes: {e}");
            std::process::exit(1);
        }
    };

    let matches = search::find_matches(&query, &zettels);

    if batch {
        match resolve_format(args.json, args.quiet) {
            OutputFormat::Table => print_matches_table(&matches),
            OutputFormat::Json => print_matches_json(&matches),
            OutputFormat::Quiet => print_matches_quiet(&matches),
        }
        return;
    }

    if matches.is_empty() {
        prompt::notify("Not found", "no note title matched the query");
        return;
    }

    let labels: Vec<String> = matches.iter().map(Zettel::option_label).collect();
    let chosen = match prompt::prompt_choice(&labels) {
        Ok(Some(index)) => &matches[index],
        Ok(None) => return,
        Err(e) => {
            eprintln!("Prompt failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut sink = StdoutSink;
    if args.selection.is_some() {
        if let Err(e) = sink.delete_selection() {
            eprintln!("Error replacing selection: {}", e);
            std::process::exit(1);
        }
    }
    if let Err(e) = sink.insert_text(&chosen.insertion_line()) {
        eprintln!("Error writing insertion: {}", e);
        std::process::exit(1);
    }
}

/// Resolve the output format from flags.
fn resolve_format(json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        OutputFormat::Table
    }
}
