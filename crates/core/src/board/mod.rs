//! todo.txt task parsing, status grouping, and board rendering.

pub mod builder;
pub mod render;
pub mod task;

pub use builder::build_board;
pub use render::render_board;
pub use task::{parse_task, Task};

use serde::Deserialize;

/// Fixed status columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Todo,
    Doing,
    Done,
    Waiting,
}

impl Column {
    pub const ALL: [Column; 4] =
        [Column::Todo, Column::Doing, Column::Done, Column::Waiting];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Todo => "Todo",
            Column::Doing => "Doing",
            Column::Done => "Done",
            Column::Waiting => "Waiting",
        }
    }
}

/// One generated board: a rendered description list per status column.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub todo: Vec<String>,
    pub doing: Vec<String>,
    pub done: Vec<String>,
    pub waiting: Vec<String>,
}

impl Board {
    pub fn column(&self, column: Column) -> &[String] {
        match column {
            Column::Todo => &self.todo,
            Column::Doing => &self.doing,
            Column::Done => &self.done,
            Column::Waiting => &self.waiting,
        }
    }

    pub(crate) fn column_mut(&mut self, column: Column) -> &mut Vec<String> {
        match column {
            Column::Todo => &mut self.todo,
            Column::Doing => &mut self.doing,
            Column::Done => &mut self.done,
            Column::Waiting => &mut self.waiting,
        }
    }

    /// Length of the longest column; the rendered body row count.
    pub fn depth(&self) -> usize {
        Column::ALL.iter().map(|c| self.column(*c).len()).max().unwrap_or(0)
    }
}

/// Output dialect for the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFormat {
    #[default]
    Markdown,
    Grid,
}

impl BoardFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardFormat::Markdown => "markdown",
            BoardFormat::Grid => "grid",
        }
    }
}

/// Rendering knobs, settable from config or CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoardOptions {
    pub format: BoardFormat,
    /// Drop `@context`/`+project` annotations from rendered descriptions.
    pub strip_tags: bool,
    /// Truncate cells to this many characters.
    pub max_cell_width: Option<usize>,
}
