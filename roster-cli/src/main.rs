use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use roster_core::{
    completed_by_person, completed_history, paginate, parse_seed, search_people, seed_roster,
    tasks_by_status, Roster, RosterStats, TaskStatus, TaskWithOwner, MAX_PEOPLE,
    MAX_TASKS_PER_PERSON,
};
use std::path::PathBuf;

mod state;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Station task roster CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage people (stations)
    Person {
        #[command(subcommand)]
        command: PersonCommand,
    },

    /// Manage a person's tasks
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },

    /// Show one person's card: active tasks plus completed count
    Show {
        person_id: String,
    },

    /// List every task in a given status across the roster
    Status {
        /// not-started | in-progress | done
        status: String,
    },

    /// Completed-task history
    History {
        /// Filter by substring of task title or owner name
        #[arg(long, default_value = "")]
        search: String,

        /// Restrict to one station id
        #[arg(long)]
        station: Option<String>,

        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },

    /// Aggregate counters and the per-person completed breakdown
    Stats,

    /// Populate an empty roster from the station seed file
    Seed {
        /// Seed JSON (defaults to <home>/stations.json)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum PersonCommand {
    /// Add a person (up to 200)
    Add { name: String },

    /// Rename a person, keeping their tasks
    Rename { id: String, name: String },

    /// Delete a person and all their tasks
    Delete { id: String },

    /// List people, searchable and paged (12 per page)
    List {
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand, Debug)]
enum TaskCommand {
    /// Add a task to a person (up to 5 each, status starts at not-started)
    Add { person_id: String, title: String },

    /// Advance a task one step: not-started -> in-progress -> done -> not-started
    Cycle { person_id: String, task_id: String },

    /// Set a task's status directly
    Set {
        person_id: String,
        task_id: String,
        /// not-started | in-progress | done
        status: String,
    },

    /// Delete a task
    Delete { person_id: String, task_id: String },
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Send a completed task back to the board as not-started
    Restore { person_id: String, task_id: String },

    /// Delete a completed task permanently
    Purge { person_id: String, task_id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let roster = state::load_roster()?;

    match cli.command {
        Command::Person { command } => match command {
            PersonCommand::Add { name } => {
                commit(&roster, roster.add_person(&name), || {
                    format!("Added person \"{}\"", name.trim())
                });
            }
            PersonCommand::Rename { id, name } => {
                commit(&roster, roster.rename_person(&id, &name), || {
                    format!("Renamed {id} to \"{}\"", name.trim())
                });
            }
            PersonCommand::Delete { id } => {
                commit(&roster, roster.delete_person(&id), || {
                    format!("Deleted person {id}")
                });
            }
            PersonCommand::List { search, page } => list_people(&roster, &search, page),
        },

        Command::Task { command } => match command {
            TaskCommand::Add { person_id, title } => {
                commit(&roster, roster.add_task(&person_id, &title), || {
                    format!("Added task \"{}\" to {person_id}", title.trim())
                });
            }
            TaskCommand::Cycle { person_id, task_id } => {
                let next = roster.cycle_task_status(&person_id, &task_id);
                let label = next
                    .person(&person_id)
                    .and_then(|p| p.tasks.iter().find(|t| t.id == task_id))
                    .map(|t| t.status.label())
                    .unwrap_or("?");
                commit(&roster, next, || {
                    format!("Task {task_id} is now: {label}")
                });
            }
            TaskCommand::Set {
                person_id,
                task_id,
                status,
            } => {
                let status = parse_status(&status)?;
                commit(
                    &roster,
                    roster.set_task_status(&person_id, &task_id, status),
                    || format!("Task {task_id} is now: {}", status.label()),
                );
            }
            TaskCommand::Delete { person_id, task_id } => {
                commit(&roster, roster.delete_task(&person_id, &task_id), || {
                    format!("Deleted task {task_id}")
                });
            }
        },

        Command::Show { person_id } => show_person(&roster, &person_id)?,

        Command::Status { status } => {
            let status = parse_status(&status)?;
            let rows = tasks_by_status(&roster, status);
            println!("{} ({}):\n", status.label(), rows.len());
            print_task_rows(&rows);
        }

        Command::History {
            search,
            station,
            command,
        } => match command {
            None => {
                let rows = completed_history(&roster, &search, station.as_deref());
                println!("Completed tasks ({}):\n", rows.len());
                print_task_rows(&rows);
            }
            Some(HistoryCommand::Restore { person_id, task_id }) => {
                commit(&roster, roster.restore_task(&person_id, &task_id), || {
                    format!("Restored task {task_id} to: {}", TaskStatus::NotStarted.label())
                });
            }
            Some(HistoryCommand::Purge { person_id, task_id }) => {
                commit(&roster, roster.delete_task(&person_id, &task_id), || {
                    format!("Purged task {task_id}")
                });
            }
        },

        Command::Stats => print_stats(&roster),

        Command::Seed { file } => seed(&roster, file)?,
    }

    Ok(())
}

/// Persist and report a mutation, or say so when the store rejected it
/// (blank input, unknown id, or a cap was hit).
fn commit(before: &Roster, after: Roster, message: impl FnOnce() -> String) {
    if after == *before {
        println!("No change (invalid input, unknown id, or cap reached).");
        return;
    }
    state::save_roster(&after);
    println!("{}", message());
}

fn parse_status(s: &str) -> Result<TaskStatus> {
    match s {
        "not-started" => Ok(TaskStatus::NotStarted),
        "in-progress" => Ok(TaskStatus::InProgress),
        "done" => Ok(TaskStatus::Done),
        other => bail!("unknown status {other:?} (expected not-started, in-progress or done)"),
    }
}

fn list_people(roster: &Roster, search: &str, page: usize) {
    let filtered = search_people(roster, search);
    let page = paginate(filtered, page);

    if page.filtered == 0 {
        if search.is_empty() {
            println!("No people yet ({MAX_PEOPLE} max). Try: roster seed");
        } else {
            println!("No people match \"{search}\".");
        }
        return;
    }

    println!(
        "Showing {}-{} of {} people (page {}/{})\n",
        page.start_index(),
        page.end_index(),
        page.filtered,
        page.current,
        page.total_pages
    );
    for p in &page.people {
        let active = p.active_tasks().len();
        let done = p.completed_count();
        println!(
            "{}  {}  [{} active / {} task slots, {} completed]",
            p.id, p.name, active, MAX_TASKS_PER_PERSON, done
        );
    }
}

fn show_person(roster: &Roster, person_id: &str) -> Result<()> {
    let person = roster
        .person(person_id)
        .with_context(|| format!("no person with id {person_id}"))?;

    println!("{} ({})", person.name, person.id);
    let active = person.active_tasks();
    println!("{}/{} active tasks", active.len(), MAX_TASKS_PER_PERSON);
    for t in &active {
        println!("  [{}] {}  ({})", t.status.label(), t.title, t.id);
    }
    let done = person.completed_count();
    if done > 0 {
        println!("(+{done} completed, see: roster history)");
    }
    Ok(())
}

fn print_task_rows(rows: &[TaskWithOwner<'_>]) {
    for r in rows {
        println!(
            "{}  {}  by {} ({})  created {}",
            r.task.id,
            r.task.title,
            r.owner_name,
            r.owner_id,
            r.task.created_at.to_rfc3339()
        );
    }
}

fn print_stats(roster: &Roster) {
    let stats = RosterStats::compute(roster);
    println!("People:      {}", stats.people);
    println!("Tasks total: {}", stats.total_tasks);
    for status in TaskStatus::ALL {
        println!("{:<12} {}", format!("{}:", status.label()), stats.by_status(status));
    }

    let breakdown = completed_by_person(roster);
    if !breakdown.is_empty() {
        println!("\nCompleted by person:");
        for row in breakdown {
            println!("  {:>3}  {} ({})", row.count, row.owner_name, row.owner_id);
        }
    }
}

fn seed(roster: &Roster, file: Option<PathBuf>) -> Result<()> {
    if !roster.is_empty() {
        println!(
            "Roster already has {} people; seeding skipped.",
            roster.len()
        );
        return Ok(());
    }

    let path = match file {
        Some(p) => p,
        None => state::seed_path()?,
    };
    if !path.exists() {
        bail!("seed file not found: {} (pass --file <path>)", path.display());
    }

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    let stations = parse_seed(&json)?;

    let seeded = seed_roster(roster, &stations);
    state::save_roster(&seeded);
    println!(
        "Seeded {} stations from {}",
        seeded.len(),
        path.display()
    );
    Ok(())
}
