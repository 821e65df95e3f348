//! Roster — the canonical ordered list of people, unit of persistence.
//!
//! Every mutation is value-in/value-out: the current roster is borrowed,
//! a new roster is returned. Invalid input (empty-after-trim text, unknown
//! ids, caps reached) returns the roster unchanged. The front end keeps
//! those calls from happening via disabled controls; the store stays total
//! either way.

use serde::{Deserialize, Serialize};

use crate::person::Person;
use crate::task::{Task, TaskStatus};

pub const MAX_PEOPLE: usize = 200;
pub const MAX_TASKS_PER_PERSON: usize = 5;

/// Serialized transparently as a bare JSON array of people, which is the
/// shape the storage blob has always had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Append a new person with no tasks. No-op when the name trims to
    /// empty or the roster is at MAX_PEOPLE.
    pub fn add_person(&self, name: &str) -> Roster {
        if name.trim().is_empty() || self.people.len() >= MAX_PEOPLE {
            return self.clone();
        }
        let mut next = self.clone();
        next.people.push(Person::new(name));
        next
    }

    /// Replace a person's name, keeping id, tasks and created_at. No-op
    /// when the name trims to empty or the id is unknown.
    pub fn rename_person(&self, id: &str, name: &str) -> Roster {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self.clone();
        }
        self.map_person(id, |p| {
            p.name = crate::clip(trimmed, crate::person::MAX_NAME_LEN);
        })
    }

    /// Remove a person and, with them, all their tasks. No-op on unknown id.
    pub fn delete_person(&self, id: &str) -> Roster {
        let mut next = self.clone();
        next.people.retain(|p| p.id != id);
        next
    }

    /// Append a task (status NotStarted) to a person. No-op when the title
    /// trims to empty, the person is unknown, or they already hold
    /// MAX_TASKS_PER_PERSON tasks. The cap is checked only here: deleting
    /// a task frees a slot again.
    pub fn add_task(&self, person_id: &str, title: &str) -> Roster {
        if title.trim().is_empty() {
            return self.clone();
        }
        self.map_person(person_id, |p| {
            if p.tasks.len() < MAX_TASKS_PER_PERSON {
                p.tasks.push(Task::new(title));
            }
        })
    }

    /// Set a task's status directly. No-op when person or task is unknown.
    pub fn set_task_status(&self, person_id: &str, task_id: &str, status: TaskStatus) -> Roster {
        self.map_task(person_id, task_id, |t| t.status = status)
    }

    /// Advance a task one step around the status cycle.
    pub fn cycle_task_status(&self, person_id: &str, task_id: &str) -> Roster {
        self.map_task(person_id, task_id, |t| t.status = t.status.next())
    }

    /// Send a Done task back to the board (history "restore"). No-op when
    /// the task is not Done.
    pub fn restore_task(&self, person_id: &str, task_id: &str) -> Roster {
        self.map_task(person_id, task_id, |t| {
            if t.status == TaskStatus::Done {
                t.status = TaskStatus::NotStarted;
            }
        })
    }

    /// Remove a task permanently. No-op when person or task is unknown.
    pub fn delete_task(&self, person_id: &str, task_id: &str) -> Roster {
        self.map_person(person_id, |p| p.tasks.retain(|t| t.id != task_id))
    }

    fn map_person(&self, id: &str, f: impl FnOnce(&mut Person)) -> Roster {
        let mut next = self.clone();
        if let Some(p) = next.people.iter_mut().find(|p| p.id == id) {
            f(p);
        }
        next
    }

    fn map_task(&self, person_id: &str, task_id: &str, f: impl FnOnce(&mut Task)) -> Roster {
        self.map_person(person_id, |p| {
            if let Some(t) = p.tasks.iter_mut().find(|t| t.id == task_id) {
                f(t);
            }
        })
    }
}
