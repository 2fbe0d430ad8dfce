use crate::render::{board_view, boards_table, task_detail, tasks_table, truncate};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use taskman_core::{Board, Task, TaskStatus};

fn task(id: u64, title: &str, status: &str) -> Task {
    let at = Utc.with_ymd_and_hms(2025, 4, 2, 14, 30, 0).unwrap();
    Task {
        id,
        title: title.to_string(),
        description: String::new(),
        status: TaskStatus::from(status.to_string()),
        board_id: 1,
        created_at: at,
        updated_at: at,
    }
}

fn plain() {
    colored::control::set_override(false);
}

fn sample_board() -> Board {
    let mut board = Board::new(1, "Work");
    board.tasks = vec![
        task(1, "Write report", "done"),
        task(2, "Buy milk", "todo"),
        task(3, "Call bank", "todo"),
        task(4, "Mystery", "blocked"),
    ];
    board
}

#[test]
fn test_board_view_lists_columns_in_order() {
    plain();
    let out = board_view(&sample_board());

    let todo = out.find("Todo (2)").expect("todo column");
    let in_progress = out.find("In progress (0)").expect("in-progress column");
    let done = out.find("Done (1)").expect("done column");
    assert!(todo < in_progress && in_progress < done);

    let milk = out.find("#2 Buy milk").unwrap();
    let bank = out.find("#3 Call bank").unwrap();
    assert!(todo < milk && milk < bank && bank < in_progress);
}

#[test]
fn test_board_view_reports_hidden_tasks() {
    plain();
    let out = board_view(&sample_board());

    assert!(!out.contains("Mystery"));
    assert!(out.contains("1 task(s) with an unrecognised status not shown"));
}

#[test]
fn test_empty_column_placeholder() {
    plain();
    let out = board_view(&Board::new(9, "Empty"));
    assert_eq!(out.matches("No tasks").count(), 3);
}

#[test]
fn test_task_detail_fields() {
    plain();
    let mut t = task(5, "Buy milk", "in-progress");
    t.description = "2 litres".to_string();

    let out = task_detail(&t);
    assert!(out.contains("Buy milk"));
    assert!(out.contains("In progress"));
    assert!(out.contains("2 litres"));
    assert!(out.contains("2025-04-02 14:30 UTC"));
}

#[test]
fn test_tables_have_one_row_per_item() {
    plain();
    let board = sample_board();

    assert_eq!(tasks_table(&board.tasks).row_iter().count(), 4);

    let boards = boards_table(&[board, Board::new(2, "Home")]);
    assert_eq!(boards.row_iter().count(), 2);
    let rendered = boards.to_string();
    assert!(rendered.contains("Work"));
    assert!(rendered.contains("Home"));
}

#[test]
fn test_truncate_is_char_safe() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    assert_eq!(truncate("çöğüşıçöğüş", 6), "çöğ...");
}
