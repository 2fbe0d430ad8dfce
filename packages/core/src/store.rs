// ABOUTME: In-memory cache of boards and their tasks as last seen from the API
// ABOUTME: Applies server-confirmed creates, updates and deletes without refetching the list

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{Board, Task, TaskStatus};

/// Source of the timestamps the store stamps on locally merged changes
pub type Clock = fn() -> DateTime<Utc>;

/// Boards in server order, each owning its tasks.
///
/// The store is not authoritative. Every mutating method here must only be
/// called after the API confirmed the matching change.
#[derive(Debug, Clone)]
pub struct BoardStore {
    boards: Vec<Board>,
    clock: Clock,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            boards: Vec::new(),
            clock,
        }
    }

    pub fn from_boards(boards: Vec<Board>) -> Self {
        let mut store = Self::new();
        store.boards = boards;
        store
    }

    /// Replace everything with a fresh server listing
    pub fn replace_all(&mut self, boards: Vec<Board>) {
        debug!("Replacing store contents with {} boards", boards.len());
        self.boards = boards;
    }

    pub fn clear(&mut self) {
        self.boards.clear();
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn board(&self, board_id: u64) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    /// The board the board view displays
    pub fn first_board(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.boards
            .iter()
            .flat_map(|b| b.tasks.iter())
            .find(|t| t.id == task_id)
    }

    /// Append a newly created task to its board.
    ///
    /// Returns `false` when no board with `board_id` is held. There is no
    /// check for an existing task with the same id.
    pub fn create_task(
        &mut self,
        server_id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        board_id: u64,
    ) -> bool {
        let now = (self.clock)();
        let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) else {
            debug!("Board {} not in store, created task {} not merged", board_id, server_id);
            return false;
        };

        board.tasks.push(Task {
            id: server_id,
            title: title.into(),
            description: description.into(),
            status,
            board_id,
            created_at: now,
            updated_at: now,
        });
        debug!("Merged created task {} into board {}", server_id, board_id);
        true
    }

    /// Overwrite the editable fields of a task and stamp `updated_at`.
    ///
    /// Id, board and `created_at` are never touched. Returns `false` when the
    /// task is not held.
    pub fn update_task(
        &mut self,
        task_id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> bool {
        let now = (self.clock)();
        let Some(task) = self
            .boards
            .iter_mut()
            .flat_map(|b| b.tasks.iter_mut())
            .find(|t| t.id == task_id)
        else {
            return false;
        };

        task.title = title.into();
        task.description = description.into();
        task.status = status;
        task.updated_at = now;
        debug!("Merged update of task {}", task_id);
        true
    }

    /// Remove a task from whichever board holds it
    pub fn delete_task(&mut self, task_id: u64) -> Option<Task> {
        for board in &mut self.boards {
            if let Some(pos) = board.tasks.iter().position(|t| t.id == task_id) {
                debug!("Removed task {} from board {}", task_id, board.id);
                return Some(board.tasks.remove(pos));
            }
        }
        None
    }

    pub fn create_board(&mut self, server_id: u64, title: impl Into<String>) {
        self.boards.push(Board::new(server_id, title));
        debug!("Merged created board {}", server_id);
    }

    pub fn rename_board(&mut self, board_id: u64, title: impl Into<String>) -> bool {
        match self.boards.iter_mut().find(|b| b.id == board_id) {
            Some(board) => {
                board.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Remove a board together with its tasks
    pub fn delete_board(&mut self, board_id: u64) -> Option<Board> {
        let pos = self.boards.iter().position(|b| b.id == board_id)?;
        Some(self.boards.remove(pos))
    }
}
