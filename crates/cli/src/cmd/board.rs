//! Board command implementation.

use std::io::{self, BufRead};
use std::path::Path;

use notekit_core::board::{build_board, parse_task, render_board};
use notekit_core::config::loader::ConfigLoader;
use tracing::error;

use crate::{logging, BoardArgs};

pub fn run(config: Option<&Path>, args: BoardArgs) {
    // The board is a plain filter; a missing config file just means defaults.
    let (mut options, log_cfg) = match ConfigLoader::load_board(config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&log_cfg);

    if let Some(format) = args.format {
        options.format = format.into();
    }
    if args.strip_tags {
        options.strip_tags = true;
    }
    if let Some(width) = args.max_width {
        options.max_cell_width = Some(width);
    }

    let stdin = io::stdin();
    let mut tasks = Vec::new();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            // Unlike a bad note file, a broken input stream is fatal.
            Err(e) => {
                error!("Error reading task input: {e}");
                std::process::exit(1);
            }
        };
        if let Some(task) = parse_task(&line) {
            tasks.push(task);
        }
    }

    let board = build_board(&tasks, &options);
    println!("{}", render_board(&board, &options));
}
