//! Durable roster storage: one JSON blob under a fixed key.
//!
//! The blob lives at `<home>/task-manager-people.json`, where `<home>` is
//! `$ROSTER_HOME` or `~/.roster`. Loading is tolerant (missing or corrupt
//! blob falls back to an empty roster) and saving is best-effort: a failed
//! write is logged and swallowed, leaving memory ahead of disk until the
//! next successful save.

use anyhow::{Context, Result};
use roster_core::Roster;
use std::fs;
use std::path::PathBuf;

const STORE_KEY: &str = "task-manager-people";

pub fn roster_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROSTER_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".roster"))
}

pub fn ensure_roster_home() -> Result<PathBuf> {
    let dir = roster_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn store_path() -> Result<PathBuf> {
    Ok(ensure_roster_home()?.join(format!("{STORE_KEY}.json")))
}

pub fn seed_path() -> Result<PathBuf> {
    Ok(ensure_roster_home()?.join("stations.json"))
}

/// Read the roster back. Absence of the blob means a fresh client; corrupt
/// content must not take the session down, so it degrades to empty too.
pub fn load_roster() -> Result<Roster> {
    let p = store_path()?;
    if !p.exists() {
        return Ok(Roster::new());
    }
    let s = match fs::read_to_string(&p) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %p.display(), error = %e, "unreadable roster blob, starting empty");
            return Ok(Roster::new());
        }
    };
    match serde_json::from_str(&s) {
        Ok(roster) => Ok(roster),
        Err(e) => {
            tracing::warn!(path = %p.display(), error = %e, "malformed roster blob, starting empty");
            Ok(Roster::new())
        }
    }
}

/// Persist the whole roster after a mutation. Failures (quota, permissions)
/// are logged, never propagated.
pub fn save_roster(roster: &Roster) {
    let result = store_path().and_then(|p| {
        let json = serde_json::to_string_pretty(roster).context("serialize roster")?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "roster save failed; in-memory state is ahead of disk");
    }
}
