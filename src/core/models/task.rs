//! Task model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of a task
///
/// The states form an ordered workflow (todo → in progress → review →
/// done), but no transition validation is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting on mentor review
    Review,
    /// Finished
    Done,
}

impl TaskStatus {
    /// Column header used on the task board
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        };
        write!(f, "{as_str}")
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can slip
    Low,
    /// Default urgency
    Medium,
    /// Blocks other work
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{as_str}")
    }
}

/// A unit of work tracked within an internship's workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier (e.g., "t1")
    pub id: String,

    /// Internship the task belongs to
    pub internship_id: String,

    /// Short title
    pub title: String,

    /// Longer description, if any
    pub description: Option<String>,

    /// Due date (RFC 3339 date)
    pub due_date: Option<String>,

    /// Workflow state
    pub status: TaskStatus,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Priority, if assigned
    pub priority: Option<TaskPriority>,
}

impl Task {
    /// Whether the task has reached the done state
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.status, TaskStatus::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_form_matches_workflow_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize status");
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(TaskStatus::Done.to_string(), "done");
    }

    #[test]
    fn board_labels_are_human_readable() {
        assert_eq!(TaskStatus::Todo.label(), "To Do");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn is_done_tracks_status() {
        let task = Task {
            id: "t1".to_string(),
            internship_id: "i1".to_string(),
            title: "Set up development environment".to_string(),
            description: None,
            due_date: None,
            status: TaskStatus::Done,
            created_at: "2025-01-15T10:00:00Z".to_string(),
            priority: Some(TaskPriority::High),
        };
        assert!(task.is_done());
    }
}
