//! Status routing and description rendering.

use super::{Board, BoardOptions, Column, Task};

/// Context value that routes a task to the Doing column.
const CONTEXT_DOING: &str = "doing";
/// Context value that routes a task to the Waiting column.
const CONTEXT_WAITING: &str = "waiting";

/// Group tasks into the four status columns, in input order.
///
/// The done flag wins over any context tag; otherwise a `doing` context
/// beats a `waiting` one, and everything else lands in Todo.
pub fn build_board(tasks: &[Task], options: &BoardOptions) -> Board {
    let mut board = Board::default();

    for task in tasks {
        let rendered = render_description(task, options.strip_tags);
        board.column_mut(route(task)).push(rendered);
    }

    board
}

fn route(task: &Task) -> Column {
    if task.done {
        Column::Done
    } else if task.contexts.iter().any(|c| c == CONTEXT_DOING) {
        Column::Doing
    } else if task.contexts.iter().any(|c| c == CONTEXT_WAITING) {
        Column::Waiting
    } else {
        Column::Todo
    }
}

/// Cell text for one task. Unless tags are stripped, context tags come back
/// as `_@[[ctx]]_` and project tags as `**+[[proj]]**` after the free text.
fn render_description(task: &Task, strip_tags: bool) -> String {
    if strip_tags {
        return task.description.clone();
    }

    let mut parts: Vec<String> = Vec::new();
    if !task.description.is_empty() {
        parts.push(task.description.clone());
    }
    parts.extend(task.contexts.iter().map(|c| format!("_@[[{c}]]_")));
    parts.extend(task.projects.iter().map(|p| format!("**+[[{p}]]**")));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_task;

    fn tasks(lines: &[&str]) -> Vec<Task> {
        lines.iter().filter_map(|l| parse_task(l)).collect()
    }

    #[test]
    fn done_flag_beats_context_routing() {
        let board =
            build_board(&tasks(&["x @waiting Buy milk"]), &BoardOptions::default());

        assert_eq!(board.done.len(), 1);
        assert!(board.waiting.is_empty());
        assert!(board.done[0].contains("Buy milk"));
    }

    #[test]
    fn doing_context_beats_waiting_context() {
        let board =
            build_board(&tasks(&["Ship it @doing @waiting"]), &BoardOptions::default());

        assert_eq!(board.doing.len(), 1);
        assert!(board.waiting.is_empty());
    }

    #[test]
    fn waiting_context_routes_to_waiting() {
        let board = build_board(&tasks(&["Buy milk @waiting"]), &BoardOptions::default());
        assert_eq!(board.waiting.len(), 1);
    }

    #[test]
    fn untagged_task_defaults_to_todo() {
        let board = build_board(&tasks(&["Call mom"]), &BoardOptions::default());
        assert_eq!(board.todo, vec!["Call mom"]);
    }

    #[test]
    fn input_order_is_kept_within_a_column() {
        let board =
            build_board(&tasks(&["first", "second", "third"]), &BoardOptions::default());
        assert_eq!(board.todo, vec!["first", "second", "third"]);
    }

    #[test]
    fn tags_are_annotated_by_default() {
        let board = build_board(
            &tasks(&["Write report @doing +brain"]),
            &BoardOptions::default(),
        );
        assert_eq!(board.doing, vec!["Write report _@[[doing]]_ **+[[brain]]**"]);
    }

    #[test]
    fn strip_tags_leaves_description_alone() {
        let options = BoardOptions { strip_tags: true, ..BoardOptions::default() };
        let board = build_board(&tasks(&["Write report @doing +brain"]), &options);
        assert_eq!(board.doing, vec!["Write report"]);
    }

    #[test]
    fn tag_only_task_renders_without_leading_space() {
        let board = build_board(&tasks(&["@waiting +brain"]), &BoardOptions::default());
        assert_eq!(board.waiting, vec!["_@[[waiting]]_ **+[[brain]]**"]);
    }
}
