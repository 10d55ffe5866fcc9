//! `taskmgr` command implementation: the multi-user task store.
//!
//! Every error path leaves the store untouched; the document is only
//! saved after validation and ownership checks pass.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::{exit_codes, Error, Result};
use crate::roster::{OwnedTask, Roster, User};
use crate::store::Store;

/// taskmgr - Multi-user JSON-backed task manager
#[derive(Parser, Debug)]
#[command(name = "taskmgr")]
#[command(version, about = "Multi-user JSON-backed task manager", long_about = None)]
pub struct Cli {
    /// Tasks JSON file
    #[arg(
        short,
        long,
        global = true,
        env = "TASKMGR_FILE",
        default_value = "data/tasks.json"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new user
    CreateUser {
        /// Display name for the new user
        display_name: String,
    },

    /// List users sorted by display name
    ListUsers,

    /// List a user's tasks
    ListTasks {
        /// Owner id
        user_id: String,
    },

    /// Add a task for a user
    AddTask {
        /// Owner id
        user_id: String,

        /// Task title
        #[arg(long)]
        title: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Task category (at most 50 characters)
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove a user's task
    RemoveTask {
        /// Owner id
        user_id: String,

        /// Task id
        task_id: String,
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
            Command::CreateUser { display_name } => run_create_user(&store, &display_name),
            Command::ListUsers => run_list_users(&store),
            Command::ListTasks { user_id } => run_list_tasks(&store, &user_id),
            Command::AddTask {
                user_id,
                title,
                due,
                category,
            } => run_add_task(&store, &user_id, &title, &due, category.as_deref()),
            Command::RemoveTask { user_id, task_id } => {
                run_remove_task(&store, &user_id, &task_id)
            }
        }
    }
}

fn run_create_user(store: &Store, display_name: &str) -> Result<()> {
    let user = User::create(display_name)?;
    let user_id = user.id.clone();

    let mut roster: Roster = store.load()?;
    roster.users.push(user);
    store.save(&roster)?;

    println!("CREATED {user_id}");
    Ok(())
}

fn run_list_users(store: &Store) -> Result<()> {
    let roster: Roster = store.load()?;
    let mut users = roster.users;
    users.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    for user in &users {
        println!("{}\t{}", user.id, user.display_name);
    }
    Ok(())
}

fn run_list_tasks(store: &Store, user_id: &str) -> Result<()> {
    let roster: Roster = store.load()?;
    require_user(&roster, user_id)?;

    for task in roster.tasks_for(user_id) {
        println!(
            "{}\t{}\t{}\t{}",
            task.id,
            task.due_date,
            task.category.as_deref().unwrap_or(""),
            task.title
        );
    }
    Ok(())
}

fn run_add_task(
    store: &Store,
    user_id: &str,
    title: &str,
    due: &str,
    category: Option<&str>,
) -> Result<()> {
    let mut roster: Roster = store.load()?;
    require_user(&roster, user_id)?;

    let task = OwnedTask::create(user_id, title, due, category)?;
    let task_id = task.id.clone();
    roster.tasks.push(task);
    store.save(&roster)?;

    println!("TASK-ADDED {task_id}");
    Ok(())
}

fn run_remove_task(store: &Store, user_id: &str, task_id: &str) -> Result<()> {
    let mut roster: Roster = store.load()?;
    require_user(&roster, user_id)?;

    if !roster.remove_task(user_id, task_id) {
        return Err(Error::TaskNotFound(task_id.to_string()));
    }
    store.save(&roster)?;

    println!("TASK-REMOVED {task_id}");
    Ok(())
}

fn require_user(roster: &Roster, user_id: &str) -> Result<()> {
    if roster.find_user(user_id).is_none() {
        return Err(Error::UserNotFound(user_id.to_string()));
    }
    Ok(())
}
