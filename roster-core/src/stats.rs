//! Aggregate statistics across the roster, driving the dashboard counters
//! and the per-person completed breakdown.

use crate::roster::Roster;
use crate::task::TaskStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub people: usize,
    pub total_tasks: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl RosterStats {
    pub fn compute(roster: &Roster) -> Self {
        let mut stats = Self {
            people: roster.len(),
            ..Self::default()
        };
        for p in roster.people() {
            for t in &p.tasks {
                stats.total_tasks += 1;
                match t.status {
                    TaskStatus::NotStarted => stats.not_started += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Done => stats.done += 1,
                }
            }
        }
        stats
    }

    pub fn by_status(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::NotStarted => self.not_started,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

/// One row of the clickable completed-tasks breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCount {
    pub owner_id: String,
    pub owner_name: String,
    pub count: usize,
}

/// Done-task counts per person, highest first, people without completed
/// tasks left out. Ties keep roster order (stable sort).
pub fn completed_by_person(roster: &Roster) -> Vec<CompletedCount> {
    let mut rows: Vec<CompletedCount> = roster
        .people()
        .iter()
        .map(|p| CompletedCount {
            owner_id: p.id.clone(),
            owner_name: p.name.clone(),
            count: p.completed_count(),
        })
        .filter(|row| row.count > 0)
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
