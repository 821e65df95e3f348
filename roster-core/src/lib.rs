//! roster-core: data model and derived views for the station task roster.
//!
//! The roster is a plain value: every mutation borrows the current roster
//! and returns a new one, and persistence is someone else's job (the CLI
//! saves the whole roster after each mutation). Views are pure functions
//! recomputed per call.

pub mod person;
pub mod roster;
pub mod search;
pub mod seed;
pub mod stats;
pub mod task;
pub mod views;

pub use person::{Person, MAX_NAME_LEN};
pub use roster::{Roster, MAX_PEOPLE, MAX_TASKS_PER_PERSON};
pub use search::{paginate, search_people, Page, PAGE_SIZE};
pub use seed::{parse_seed, seed_roster, SeedStation};
pub use stats::{completed_by_person, CompletedCount, RosterStats};
pub use task::{Task, TaskStatus, MAX_TITLE_LEN};
pub use views::{completed_history, people_with_completed, tasks_by_status, TaskWithOwner};

/// Cap user-entered text at a character count (the caps are character
/// limits, not byte limits, so this stays safe on accented names).
pub(crate) fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
