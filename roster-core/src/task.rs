//! Task model for the station roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Titles longer than this are cut after trimming (mirrors the form input cap).
pub const MAX_TITLE_LEN: usize = 100;

/// Where a task sits in its lifecycle. The derived `Ord` is the queue order
/// used when sorting a person's card: NotStarted < InProgress < Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    /// One click on a status badge: NotStarted -> InProgress -> Done -> NotStarted.
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::NotStarted => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::NotStarted,
        }
    }

    /// Display label (the deployment language is Spanish).
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Por empezar",
            TaskStatus::InProgress => "En proceso",
            TaskStatus::Done => "Terminada",
        }
    }
}

/// A titled unit of work owned by exactly one person. Tasks have no
/// lifecycle outside their owner's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New task with a random id and status NotStarted. The caller is
    /// responsible for rejecting titles that trim to empty.
    pub fn new(title: &str) -> Self {
        let title = crate::clip(title.trim(), MAX_TITLE_LEN);
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            status: TaskStatus::NotStarted,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycle_is_closed() {
        for s in TaskStatus::ALL {
            assert_eq!(s.next().next().next(), s);
        }
    }

    #[test]
    fn cycle_order_matches_queue() {
        assert_eq!(TaskStatus::NotStarted.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::NotStarted);
        assert!(TaskStatus::NotStarted < TaskStatus::InProgress);
        assert!(TaskStatus::InProgress < TaskStatus::Done);
    }

    #[test]
    fn new_task_starts_not_started_and_trims() {
        let t = Task::new("  Fix pump  ");
        assert_eq!(t.title, "Fix pump");
        assert_eq!(t.status, TaskStatus::NotStarted);
        assert!(!t.id.is_empty());
    }

    #[test]
    fn long_title_is_cut_at_cap() {
        let t = Task::new(&"x".repeat(300));
        assert_eq!(t.title.len(), MAX_TITLE_LEN);
    }
}
