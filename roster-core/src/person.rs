//! Person (station) model: a named owner of a bounded task list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskStatus};

/// Names longer than this are cut after trimming (mirrors the form input cap).
pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// New person with a random id and no tasks. The caller is responsible
    /// for rejecting names that trim to empty.
    pub fn new(name: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Used by seeding, which carries its own id scheme ("station-<n>").
    pub fn with_id(id: String, name: &str) -> Self {
        let name = crate::clip(name.trim(), MAX_NAME_LEN);
        Self {
            id,
            name,
            tasks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Tasks shown on the person's card: everything not yet Done, queue
    /// order first (NotStarted before InProgress), insertion order within
    /// a status. Done tasks live only in the history view.
    pub fn active_tasks(&self) -> Vec<&Task> {
        let mut out: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .collect();
        out.sort_by_key(|t| t.status);
        out
    }

    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, status: TaskStatus) -> Task {
        let mut t = Task::new(title);
        t.status = status;
        t
    }

    #[test]
    fn new_person_has_empty_tasks() {
        let p = Person::new("  Estación Norte  ");
        assert_eq!(p.name, "Estación Norte");
        assert!(p.tasks.is_empty());
    }

    #[test]
    fn active_tasks_exclude_done_and_sort_by_status() {
        let mut p = Person::new("A");
        p.tasks.push(task("in progress", TaskStatus::InProgress));
        p.tasks.push(task("done", TaskStatus::Done));
        p.tasks.push(task("fresh", TaskStatus::NotStarted));

        let active = p.active_tasks();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].title, "fresh");
        assert_eq!(active[1].title, "in progress");
        assert_eq!(p.completed_count(), 1);
    }

    #[test]
    fn active_sort_is_stable_within_status() {
        let mut p = Person::new("A");
        p.tasks.push(task("first", TaskStatus::NotStarted));
        p.tasks.push(task("second", TaskStatus::NotStarted));
        let active = p.active_tasks();
        assert_eq!(active[0].title, "first");
        assert_eq!(active[1].title, "second");
    }
}
