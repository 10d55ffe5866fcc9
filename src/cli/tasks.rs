//! `tasks` command implementation: the single-user flat task list.
//!
//! Commands load the store, operate on the in-memory collection, and
//! save the whole document back before printing anything.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::{exit_codes, Error, Result};
use crate::query::{filter_tasks, sample_tasks, search_tasks, TaskFilter};
use crate::store::Store;
use crate::task::{next_id, split_tags, Task};

/// tasks - Simple JSON-backed todo CLI
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(version, about = "Simple JSON-backed todo CLI", long_about = None)]
pub struct Cli {
    /// Tasks JSON file
    #[arg(
        short,
        long,
        global = true,
        env = "TASKS_FILE",
        default_value = "tasks.json"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Task category (e.g. household, schoolwork)
        #[arg(long)]
        category: Option<String>,
    },

    /// List tasks
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,

        /// Filter by comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Filter by category (exact match)
        #[arg(long)]
        category: Option<String>,
    },

    /// Search tasks by text or tag
    Search {
        /// Search query
        query: String,

        /// Filter search by category (exact match)
        #[arg(long)]
        category: Option<String>,
    },

    /// Recommend N random tasks to complete
    Recommend {
        /// Number of tasks to recommend
        #[arg(allow_hyphen_values = true)]
        count: String,

        /// Include completed tasks as candidates
        #[arg(long)]
        all: bool,

        /// Filter candidates by comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Filter candidates by category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Seed for deterministic sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            Cli::command().print_help()?;
            println!();
            process::exit(exit_codes::INPUT_ERROR);
        };

        let store = Store::new(self.file);
        match command {
            Command::Add {
                title,
                tags,
                category,
            } => run_add(&store, &title, &tags, category.as_deref()),
            Command::List {
                all,
                tags,
                category,
            } => run_list(&store, all, tags.as_deref(), category.as_deref()),
            Command::Search { query, category } => {
                run_search(&store, &query, category.as_deref())
            }
            Command::Recommend {
                count,
                all,
                tags,
                category,
                seed,
            } => run_recommend(
                &store,
                &count,
                all,
                tags.as_deref(),
                category.as_deref(),
                seed,
            ),
        }
    }
}

fn run_add(store: &Store, title: &str, tags: &str, category: Option<&str>) -> Result<()> {
    let mut tasks: Vec<Task> = store.load()?;
    let task = Task::create(next_id(&tasks), title, tags, category)?;
    let line = format!("Added task {}: {}", task.id, task.title);
    tasks.push(task);
    store.save(&tasks)?;
    println!("{line}");
    Ok(())
}

fn run_list(store: &Store, all: bool, tags: Option<&str>, category: Option<&str>) -> Result<()> {
    let tasks: Vec<Task> = store.load()?;
    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    let filter = TaskFilter {
        include_done: all,
        tags: tags.map(split_tags).unwrap_or_default(),
        category: category.map(str::to_string),
    };
    for task in filter_tasks(&tasks, &filter) {
        println!("{}", format_task(&task));
    }
    Ok(())
}

fn run_search(store: &Store, query: &str, category: Option<&str>) -> Result<()> {
    let tasks: Vec<Task> = store.load()?;
    let matches = search_tasks(&tasks, query);
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    // The category filter narrows after the empty check, so a query that
    // matched something can still print zero lines.
    let matches: Vec<Task> = match category {
        Some(category) => matches
            .into_iter()
            .filter(|task| task.category == category)
            .collect(),
        None => matches,
    };
    for task in &matches {
        println!("{}", format_task(task));
    }
    Ok(())
}

fn run_recommend(
    store: &Store,
    count: &str,
    all: bool,
    tags: Option<&str>,
    category: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let tasks: Vec<Task> = store.load()?;
    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    let filter = TaskFilter {
        include_done: all,
        tags: tags.map(split_tags).unwrap_or_default(),
        category: category.map(str::to_string),
    };
    let candidates = filter_tasks(&tasks, &filter);
    if candidates.is_empty() {
        println!("No matching tasks to recommend.");
        return Ok(());
    }

    let count: usize = count
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCount(count.to_string()))?;

    let picks = sample_tasks(&candidates, count, seed);
    println!("Recommended {} task(s):", picks.len());
    for task in &picks {
        println!("{}", format_task(task));
    }
    Ok(())
}

/// One display line per task.
///
/// The tag bracket is omitted entirely when there are no tags:
/// `  1. [x] Buy milk [shopping, food] <general> (created: ...)`
pub fn format_task(task: &Task) -> String {
    let tags = if task.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", task.tags.join(", "))
    };
    let status = if task.done { "x" } else { " " };
    format!(
        "{:>3}. [{}] {}{} <{}> (created: {})",
        task.id, status, task.title, tags, task.category, task.created
    )
}
