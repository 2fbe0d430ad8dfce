// ABOUTME: Text rendering for the terminal views: board columns, task detail and list tables
// ABOUTME: Pure functions over core types so the output can be checked without a terminal

use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use std::fmt::Write;
use taskman_core::{group_by_status, Board, Task, TaskStatus, User};

/// Column width for titles in tables
const TITLE_WIDTH: usize = 40;

/// The board view: one section per status column, tasks in server order
pub fn board_view(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("📋 {}", board.title).blue().bold());
    let _ = writeln!(out, "{}", format!("Board #{}", board.id).dimmed());

    for group in group_by_status(&board.tasks) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {} ({})",
            group.status.icon(),
            status_label(&group.status).bold(),
            group.len()
        );

        if group.is_empty() {
            let _ = writeln!(out, "   {}", "No tasks".dimmed());
            continue;
        }
        for task in group.tasks {
            let _ = write!(out, "   #{} {}", task.id, task.title);
            if !task.description.is_empty() {
                let _ = write!(out, " {}", format!("- {}", truncate(&task.description, 60)).dimmed());
            }
            let _ = writeln!(out);
        }
    }

    let hidden = board.tasks.iter().filter(|t| !t.status.is_known()).count();
    if hidden > 0 {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!("{} task(s) with an unrecognised status not shown", hidden).yellow()
        );
    }
    out
}

pub fn task_detail(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("{} {}", task.status.icon(), task.title).blue().bold());
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<12} {}", "ID:".bold(), task.id);
    let _ = writeln!(out, "{:<12} {}", "Status:".bold(), status_label(&task.status));
    let _ = writeln!(out, "{:<12} {}", "Board:".bold(), task.board_id);
    let description = if task.description.is_empty() {
        "—".dimmed().to_string()
    } else {
        task.description.clone()
    };
    let _ = writeln!(out, "{:<12} {}", "Description:".bold(), description);
    let _ = writeln!(out, "{:<12} {}", "Created:".bold(), format_datetime(&task.created_at));
    let _ = writeln!(out, "{:<12} {}", "Updated:".bold(), format_datetime(&task.updated_at));
    out
}

pub fn tasks_table(tasks: &[Task]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Status", "Board", "Updated"]);

    for task in tasks {
        table.add_row(vec![
            task.id.to_string(),
            truncate(&task.title, TITLE_WIDTH),
            format!("{} {}", task.status.icon(), task.status),
            task.board_id.to_string(),
            format_date(&task.updated_at),
        ]);
    }
    table
}

pub fn boards_table(boards: &[Board]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Todo", "In progress", "Done"]);

    for board in boards {
        let [todo, in_progress, done] = group_by_status(&board.tasks);
        table.add_row(vec![
            board.id.to_string(),
            truncate(&board.title, TITLE_WIDTH),
            todo.len().to_string(),
            in_progress.len().to_string(),
            done.len().to_string(),
        ]);
    }
    table
}

pub fn users_table(users: &[User]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Email", "Joined"]);

    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            truncate(&user.name, 30),
            user.email.clone(),
            format_date(&user.created_at),
        ]);
    }
    table
}

pub fn status_label(status: &TaskStatus) -> String {
    match status {
        TaskStatus::Todo => "Todo".to_string(),
        TaskStatus::InProgress => "In progress".to_string(),
        TaskStatus::Done => "Done".to_string(),
        TaskStatus::Other(s) => s.clone(),
    }
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Shorten to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
