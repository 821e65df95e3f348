//! Search and pagination over the person list.

use crate::person::Person;
use crate::roster::Roster;

pub const PAGE_SIZE: usize = 12;

/// Case-insensitive substring match against person names. An empty query
/// matches everyone.
pub fn search_people<'a>(roster: &'a Roster, query: &str) -> Vec<&'a Person> {
    let needle = query.to_lowercase();
    roster
        .people()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// One page of a filtered person list.
#[derive(Debug)]
pub struct Page<'a> {
    pub people: Vec<&'a Person>,
    pub current: usize,
    pub total_pages: usize,
    pub filtered: usize,
}

impl Page<'_> {
    /// 1-based index of the first entry on this page, for "showing X-Y of N".
    pub fn start_index(&self) -> usize {
        if self.filtered == 0 {
            0
        } else {
            (self.current - 1) * PAGE_SIZE + 1
        }
    }

    pub fn end_index(&self) -> usize {
        (self.start_index() + self.people.len()).saturating_sub(1)
    }
}

/// Cut a filtered list into a page. `total_pages` is never 0 (an empty
/// result still renders as page 1 of 1) and the requested page is clamped
/// into range, so a query change can never strand the view past the end.
pub fn paginate(filtered: Vec<&Person>, requested: usize) -> Page<'_> {
    let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let current = requested.clamp(1, total_pages);
    let start = (current - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered.len());
    let count = filtered.len();
    Page {
        people: filtered[start..end].to_vec(),
        current,
        total_pages,
        filtered: count,
    }
}
