//! Table rendering for a built board.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::{Board, BoardFormat, BoardOptions, Column};

/// Render the board as one table: a header row with the four column names,
/// then one row per slot of the deepest column, shorter columns padded with
/// empty cells. Cell truncation is cosmetic and off unless configured.
pub fn render_board(board: &Board, options: &BoardOptions) -> String {
    let mut builder = Builder::default();

    builder.push_record(Column::ALL.iter().map(|c| c.as_str()));

    for row in 0..board.depth() {
        builder.push_record(Column::ALL.iter().map(|c| {
            let cell =
                board.column(*c).get(row).map(String::as_str).unwrap_or_default();
            clip(cell, options.max_cell_width)
        }));
    }

    let mut table = builder.build();
    match options.format {
        BoardFormat::Markdown => table.with(Style::markdown()),
        BoardFormat::Grid => table.with(Style::ascii()),
    };

    table.to_string()
}

fn clip(cell: &str, max_width: Option<usize>) -> String {
    let max = match max_width {
        Some(max) if cell.chars().count() > max => max,
        _ => return cell.to_string(),
    };

    if max > 3 {
        let kept: String = cell.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        cell.chars().take(max).collect()
    }
}
