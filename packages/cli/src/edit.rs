// ABOUTME: Pure helpers behind `tasks create` and `tasks edit`
// ABOUTME: Field merging, status choices and the default board, kept out of the prompts

use taskman_core::{Board, Task, TaskChanges, TaskStatus};

/// Changes for `task` where every field not given keeps its current value
pub fn apply_edits(
    task: &Task,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
) -> TaskChanges {
    let mut changes = TaskChanges::from_task(task);
    if let Some(title) = title {
        changes.title = title;
    }
    if let Some(description) = description {
        changes.description = description;
    }
    if let Some(status) = status {
        changes.status = status;
    }
    changes
}

/// Options for the status picker and the index of `current` among them.
///
/// An unrecognised status is offered as the last option and preselected, so
/// accepting the defaults leaves it unchanged.
pub fn status_choices(current: &TaskStatus) -> (Vec<TaskStatus>, usize) {
    let mut choices = TaskStatus::KNOWN.to_vec();
    if !current.is_known() {
        choices.push(current.clone());
    }
    let cursor = choices.iter().position(|s| s == current).unwrap_or(0);
    (choices, cursor)
}

/// The board a new task goes to: the one asked for, else the first board
pub fn target_board(requested: Option<u64>, boards: &[Board]) -> Option<u64> {
    requested.or_else(|| boards.first().map(|b| b.id))
}
