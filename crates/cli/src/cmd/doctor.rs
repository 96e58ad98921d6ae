use notekit_core::config::loader::{default_config_path, ConfigLoader};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   nk doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("notes_root: {}", rc.notes_root.display());
            println!("max_title_search_lines: {}", rc.scan.max_title_search_lines);
            println!("max_context_lines: {}", rc.scan.max_context_lines);
            println!("min_query_length: {}", rc.min_query_length);
            println!("board.format: {}", rc.board.format.as_str());
            println!("board.strip_tags: {}", rc.board.strip_tags);
            println!(
                "board.max_cell_width: {}",
                rc.board
                    .max_cell_width
                    .map_or_else(|| "unset".to_string(), |w| w.to_string())
            );
        }
        Err(e) => {
            println!("FAIL nk doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
