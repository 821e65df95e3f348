//! First-run seeding from the external station list.
//!
//! The seed source is an ordered list of `{id, name}` records. It is only
//! consulted when the restored roster is empty, so a roster that has ever
//! held a person is never overwritten by re-running the seeder.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::person::Person;
use crate::roster::Roster;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedStation {
    pub id: String,
    pub name: String,
}

pub fn parse_seed(json: &str) -> Result<Vec<SeedStation>> {
    serde_json::from_str(json).context("parse seed station list")
}

/// Populate an empty roster from the seed records; a non-empty roster is
/// returned untouched. Seeded people get deterministic "station-<id>" ids
/// and empty task lists.
pub fn seed_roster(roster: &Roster, stations: &[SeedStation]) -> Roster {
    if !roster.is_empty() {
        return roster.clone();
    }
    Roster::from_people(
        stations
            .iter()
            .map(|s| Person::with_id(format!("station-{}", s.id), &s.name))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_empty_roster_with_station_ids() {
        let stations = vec![SeedStation {
            id: "1".into(),
            name: "Station One".into(),
        }];
        let r = seed_roster(&Roster::new(), &stations);
        assert_eq!(r.len(), 1);
        assert_eq!(r.people()[0].id, "station-1");
        assert_eq!(r.people()[0].name, "Station One");
        assert!(r.people()[0].tasks.is_empty());
    }

    #[test]
    fn never_overwrites_nonempty_roster() {
        let stations = vec![SeedStation {
            id: "1".into(),
            name: "Station One".into(),
        }];
        let existing = Roster::new().add_person("Ana");
        let r = seed_roster(&existing, &stations);
        assert_eq!(r, existing);

        // A second startup against the seeded roster does not re-seed either.
        let seeded = seed_roster(&Roster::new(), &stations);
        let again = seed_roster(&seeded, &stations);
        assert_eq!(again, seeded);
    }

    #[test]
    fn parse_seed_reads_the_json_list() {
        let json = r#"[{"id":"1","name":"Station One"},{"id":"2","name":"Station Two"}]"#;
        let stations = parse_seed(json).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[1].name, "Station Two");
    }

    #[test]
    fn parse_seed_rejects_garbage() {
        assert!(parse_seed("not json").is_err());
    }
}
