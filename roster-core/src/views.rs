//! Derived read-only views over a roster.
//!
//! Everything here is a pure function of the roster (plus a query/status
//! argument) and is recomputed per call. The data volume is tiny — at most
//! 200 people holding 5 tasks each — so nothing is cached.

use crate::roster::Roster;
use crate::task::{Task, TaskStatus};

/// A task flattened out of its owner's list, carrying enough owner context
/// to render and to address follow-up mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskWithOwner<'a> {
    pub task: &'a Task,
    pub owner_name: &'a str,
    pub owner_id: &'a str,
}

fn flatten(roster: &Roster, status: TaskStatus) -> Vec<TaskWithOwner<'_>> {
    let mut out: Vec<TaskWithOwner> = roster
        .people()
        .iter()
        .flat_map(|p| {
            p.tasks
                .iter()
                .filter(move |t| t.status == status)
                .map(move |t| TaskWithOwner {
                    task: t,
                    owner_name: &p.name,
                    owner_id: &p.id,
                })
        })
        .collect();
    // Newest first.
    out.sort_by(|a, b| b.task.created_at.cmp(&a.task.created_at));
    out
}

/// All tasks in a given status across the whole roster, newest first.
pub fn tasks_by_status(roster: &Roster, status: TaskStatus) -> Vec<TaskWithOwner<'_>> {
    flatten(roster, status)
}

/// The completed-task history: Done tasks across the roster, newest first,
/// filtered by a case-insensitive substring against the task title OR the
/// owner name, optionally restricted to one owner. An empty query matches
/// everything.
pub fn completed_history<'a>(
    roster: &'a Roster,
    query: &str,
    owner: Option<&str>,
) -> Vec<TaskWithOwner<'a>> {
    let needle = query.to_lowercase();
    flatten(roster, TaskStatus::Done)
        .into_iter()
        .filter(|t| {
            t.task.title.to_lowercase().contains(&needle)
                || t.owner_name.to_lowercase().contains(&needle)
        })
        .filter(|t| owner.is_none_or(|id| t.owner_id == id))
        .collect()
}

/// People who have at least one Done task (the history view's owner filter
/// only offers these).
pub fn people_with_completed(roster: &Roster) -> Vec<&crate::person::Person> {
    roster
        .people()
        .iter()
        .filter(|p| p.completed_count() > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn fixture() -> Roster {
        let r = Roster::new().add_person("Ana").add_person("Bea");
        let ana = r.people()[0].id.clone();
        let bea = r.people()[1].id.clone();
        let r = r
            .add_task(&ana, "Fix pump")
            .add_task(&ana, "Check valves")
            .add_task(&bea, "Clean tank");
        // Spread created_at so "newest first" is observable.
        let mut r = r;
        let base = Utc::now();
        let mut i: i64 = 0;
        for p in r.people().to_vec() {
            for t in &p.tasks {
                r = touch(&r, &p.id, &t.id, base - Duration::minutes(10 - i));
                i += 1;
            }
        }
        r
    }

    fn touch(r: &Roster, pid: &str, tid: &str, at: chrono::DateTime<Utc>) -> Roster {
        let mut people = r.people().to_vec();
        for p in &mut people {
            if p.id == pid {
                for t in &mut p.tasks {
                    if t.id == tid {
                        t.created_at = at;
                    }
                }
            }
        }
        Roster::from_people(people)
    }

    fn mark_done(r: &Roster, pid: &str, title: &str) -> Roster {
        let tid = r
            .person(pid)
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.title == title)
            .unwrap()
            .id
            .clone();
        r.set_task_status(pid, &tid, TaskStatus::Done)
    }

    #[test]
    fn by_status_flattens_with_owner_newest_first() {
        let r = fixture();
        let all = tasks_by_status(&r, TaskStatus::NotStarted);
        assert_eq!(all.len(), 3);
        // Bea's task was touched last, so it sorts first.
        assert_eq!(all[0].owner_name, "Bea");
        assert!(all[0].task.created_at >= all[1].task.created_at);
        assert!(all[1].task.created_at >= all[2].task.created_at);
    }

    #[test]
    fn history_holds_exactly_done_tasks() {
        let r = fixture();
        assert!(completed_history(&r, "", None).is_empty());

        let ana = r.people()[0].id.clone();
        let r = mark_done(&r, &ana, "Fix pump");
        let hist = completed_history(&r, "", None);
        assert_eq!(hist.len(), 1);
        assert_eq!(hist[0].task.title, "Fix pump");
        assert_eq!(hist[0].owner_name, "Ana");
    }

    #[test]
    fn history_filters_by_title_or_owner_case_insensitive() {
        let r = fixture();
        let ana = r.people()[0].id.clone();
        let bea = r.people()[1].id.clone();
        let r = mark_done(&r, &ana, "Fix pump");
        let r = mark_done(&r, &bea, "Clean tank");

        assert_eq!(completed_history(&r, "PUMP", None).len(), 1);
        assert_eq!(completed_history(&r, "bea", None).len(), 1);
        assert_eq!(completed_history(&r, "", Some(&ana)).len(), 1);
        assert_eq!(completed_history(&r, "tank", Some(&ana)).len(), 0);
        assert!(completed_history(&r, "zzz", None).is_empty());
    }

    #[test]
    fn restore_removes_from_history() {
        let r = fixture();
        let ana = r.people()[0].id.clone();
        let r = mark_done(&r, &ana, "Fix pump");
        let tid = completed_history(&r, "", None)[0].task.id.to_string();

        let r = r.restore_task(&ana, &tid);
        assert!(completed_history(&r, "", None).is_empty());
        let restored = r
            .person(&ana)
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == tid)
            .unwrap();
        assert_eq!(restored.status, TaskStatus::NotStarted);
    }

    #[test]
    fn people_with_completed_skips_zero_counts() {
        let r = fixture();
        assert!(people_with_completed(&r).is_empty());
        let ana = r.people()[0].id.clone();
        let r = mark_done(&r, &ana, "Fix pump");
        let withs = people_with_completed(&r);
        assert_eq!(withs.len(), 1);
        assert_eq!(withs[0].name, "Ana");
    }
}
