//! Ticket task models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task status codes.
pub mod task_status {
    /// Open.
    pub const OPEN: u32 = 1;
    /// In progress.
    pub const IN_PROGRESS: u32 = 2;
    /// Completed.
    pub const COMPLETED: u32 = 3;
}

/// A unit of work attached to a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Status code, see [`task_status`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Seconds before `due_date` to remind the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_before: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response wrapper for single task operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTaskResponse {
    /// The task.
    pub task: Task,
}

/// Response wrapper for a ticket's tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTasksResponse {
    /// Tasks of the ticket.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_payload() {
        let task = Task {
            title: Some("Image laptop".to_string()),
            status: Some(task_status::OPEN),
            notify_before: Some(3600),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            serde_json::json!({"title": "Image laptop", "status": 1, "notify_before": 3600})
        );
    }

    #[test]
    fn test_task_null_closed_at() {
        let json = r#"{"task": {"id": 4, "title": "Ship it", "status": 2, "closed_at": null}}"#;
        let task = serde_json::from_str::<GetTaskResponse>(json).unwrap().task;
        assert_eq!(task.status, Some(task_status::IN_PROGRESS));
        assert_eq!(task.closed_at, None);
    }
}
