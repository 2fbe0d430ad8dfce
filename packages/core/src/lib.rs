// ABOUTME: Core board and task types for TaskMan
// ABOUTME: Local board store with its reconciliation operations and the status grouping view

pub mod grouping;
pub mod store;
pub mod types;

pub use grouping::{group_by_status, StatusGroup};
pub use store::{BoardStore, Clock};
pub use types::{Board, NewTask, Task, TaskChanges, TaskStatus, UnknownStatus, User};
