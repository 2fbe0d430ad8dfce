// ABOUTME: Groups a flat task list into the todo / in-progress / done board columns
// ABOUTME: Order within a column follows the source list; unknown statuses are not shown

use crate::types::{Task, TaskStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusGroup<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

impl StatusGroup<'_> {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Always returns the three columns, in `TaskStatus::KNOWN` order, even when
/// some of them are empty.
pub fn group_by_status(tasks: &[Task]) -> [StatusGroup<'_>; 3] {
    TaskStatus::KNOWN.map(|status| {
        let tasks = tasks.iter().filter(|t| t.status == status).collect();
        StatusGroup { status, tasks }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn task(id: u64, status: &str) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: String::new(),
            status: TaskStatus::from(status.to_string()),
            board_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ids(group: &StatusGroup<'_>) -> Vec<u64> {
        group.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_groups_in_fixed_order() {
        let tasks = vec![task(1, "done"), task(2, "todo"), task(3, "todo")];

        let groups = group_by_status(&tasks);

        assert_eq!(groups[0].status, TaskStatus::Todo);
        assert_eq!(groups[1].status, TaskStatus::InProgress);
        assert_eq!(groups[2].status, TaskStatus::Done);
        assert_eq!(ids(&groups[0]), vec![2, 3]);
        assert!(groups[1].is_empty());
        assert_eq!(ids(&groups[2]), vec![1]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let tasks = vec![
            task(7, "in-progress"),
            task(3, "done"),
            task(9, "in-progress"),
            task(1, "in-progress"),
            task(4, "done"),
        ];

        let groups = group_by_status(&tasks);

        assert_eq!(ids(&groups[1]), vec![7, 9, 1]);
        assert_eq!(ids(&groups[2]), vec![3, 4]);
    }

    #[test]
    fn test_unknown_status_is_excluded() {
        let tasks = vec![task(1, "todo"), task(2, "blocked"), task(3, "Done")];

        let groups = group_by_status(&tasks);
        let shown: usize = groups.iter().map(|g| g.len()).sum();

        assert_eq!(shown, 1);
        assert_eq!(ids(&groups[0]), vec![1]);
    }

    #[test]
    fn test_empty_input_yields_three_empty_groups() {
        let groups = group_by_status(&[]);
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.is_empty()));
    }
}
