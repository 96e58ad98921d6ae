//! Parse-group-render pipeline over a small task list.

use notekit_core::board::{build_board, parse_task, render_board, BoardOptions, Task};

fn parse_all(lines: &[&str]) -> Vec<Task> {
    lines.iter().filter_map(|l| parse_task(l)).collect()
}

#[test]
fn tasks_land_in_their_status_columns() {
    let tasks = parse_all(&[
        "Buy milk @waiting",
        "x Paid rent",
        "Write report @doing +brain",
        "Call mom",
        "",
    ]);
    assert_eq!(tasks.len(), 4);

    let board = build_board(&tasks, &BoardOptions::default());

    assert_eq!(board.todo, vec!["Call mom"]);
    assert_eq!(board.doing, vec!["Write report _@[[doing]]_ **+[[brain]]**"]);
    assert_eq!(board.done, vec!["Paid rent"]);
    assert_eq!(board.waiting, vec!["Buy milk _@[[waiting]]_"]);
}

#[test]
fn rendered_table_pads_to_the_largest_column() {
    let tasks = parse_all(&["one", "two", "three", "x done once"]);
    let board = build_board(&tasks, &BoardOptions::default());
    let rendered = render_board(&board, &BoardOptions::default());

    // Header + markdown separator + 3 body rows (Todo is deepest).
    assert_eq!(rendered.lines().count(), 5);
    for line in rendered.lines() {
        assert_eq!(line.matches('|').count(), 5);
    }
}

#[test]
fn stripped_board_renders_clean_descriptions() {
    let options = BoardOptions { strip_tags: true, ..BoardOptions::default() };
    let tasks = parse_all(&["Write report @doing +brain"]);
    let board = build_board(&tasks, &options);
    let rendered = render_board(&board, &options);

    assert!(rendered.contains("Write report"));
    assert!(!rendered.contains("@[[doing]]"));
    assert!(!rendered.contains("+[[brain]]"));
}
