// ABOUTME: Board, task and user type definitions shared by the client and the CLI
// ABOUTME: Field names follow the API's JSON (ID, Title, BoardID, ...) so responses map directly

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a task.
///
/// The API stores status as free text. The three known values drive the board
/// columns; anything else is kept verbatim in `Other` so it survives a round
/// trip through the store even though no column displays it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Other(String),
}

impl TaskStatus {
    /// Board columns, in display order
    pub const KNOWN: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }

    /// Glyph shown next to the status in board and detail views
    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "📝",
            TaskStatus::InProgress => "🔄",
            TaskStatus::Done => "✅",
            TaskStatus::Other(_) => "📋",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "todo" => TaskStatus::Todo,
            "in-progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}' (expected todo, in-progress or done)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

/// Parses user input. Only the three known statuses are accepted here;
/// deserialization from the API is more lenient.
impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Status", default)]
    pub status: TaskStatus,
    #[serde(rename = "BoardID")]
    pub board_id: u64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Tasks", default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }
}

/// Account as listed by `GET /users`. The password hash the server includes is
/// deliberately not part of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub board_id: u64,
}

/// Body of `PUT /tasks/:id`. Board and id are not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskChanges {
    /// Start from the task's current values
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("in-progress"));
        assert_eq!(serde_json::to_value(TaskStatus::Todo).unwrap(), json!("todo"));

        let parsed: TaskStatus = serde_json::from_value(json!("done")).unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let parsed: TaskStatus = serde_json::from_value(json!("blocked")).unwrap();
        assert_eq!(parsed, TaskStatus::Other("blocked".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("blocked"));
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert_eq!("In-Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!(" done ".parse::<TaskStatus>().unwrap(), TaskStatus::Done);

        let err = "archived".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_task_from_api_json() {
        let task: Task = serde_json::from_value(json!({
            "ID": 5,
            "Title": "Buy milk",
            "Description": null,
            "Status": "todo",
            "BoardID": 1,
            "CreatedAt": "2025-03-01T10:15:00.123456+03:00",
            "UpdatedAt": "2025-03-01T10:15:00.123456+03:00"
        }))
        .unwrap();

        assert_eq!(task.id, 5);
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.board_id, 1);
        assert_eq!(task.created_at.to_rfc3339(), "2025-03-01T07:15:00.123456+00:00");
    }

    #[test]
    fn test_missing_status_defaults_to_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);

        let task: Task = serde_json::from_value(json!({
            "ID": 8,
            "Title": "No status yet",
            "BoardID": 1,
            "CreatedAt": "2025-03-01T10:15:00Z",
            "UpdatedAt": "2025-03-01T10:15:00Z"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn test_board_with_null_tasks() {
        let board: Board = serde_json::from_value(json!({
            "ID": 2,
            "Title": "Home",
            "UserID": 7,
            "CreatedAt": "2025-03-01T10:15:00Z",
            "UpdatedAt": "2025-03-01T10:15:00Z",
            "Tasks": null
        }))
        .unwrap();

        assert_eq!(board, Board::new(2, "Home"));
    }

    #[test]
    fn test_user_ignores_password_hash() {
        let user: User = serde_json::from_value(json!({
            "ID": 1,
            "Name": "Ada",
            "Email": "ada@example.com",
            "Password": "$2a$10$abcdef",
            "CreatedAt": "2025-03-01T10:15:00Z",
            "UpdatedAt": "2025-03-01T10:15:00Z",
            "Boards": null
        }))
        .unwrap();

        assert_eq!(user.name, "Ada");
        assert!(!serde_json::to_string(&user).unwrap().contains("Password"));
    }

    #[test]
    fn test_new_task_body_uses_snake_case() {
        let body = NewTask {
            title: "Buy milk".to_string(),
            description: String::new(),
            status: TaskStatus::InProgress,
            board_id: 1,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "Buy milk", "description": "", "status": "in-progress", "board_id": 1})
        );
    }
}
