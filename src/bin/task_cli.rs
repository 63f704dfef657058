use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use fractic_server_error::ServerError;
use record_tracker::{
    config::{MalformedPolicy, StoreConfig},
    entities::{Outcome, RecordId, TaskStatus},
    logging,
    printers::TaskPrinter,
    util::{parse_status, TaskTracker},
};

/// Task Tracker CLI
#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Track tasks in a local JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the task store
    #[arg(long, global = true, env = "TASK_CLI_FILE", default_value = "tasks.json")]
    file: PathBuf,

    /// Fail instead of starting from an empty list when the store is malformed
    #[arg(long, global = true)]
    strict: bool,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// Change a task's description
    Update {
        /// Task ID
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task ID
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: u64,
    },

    /// Set a task's status (todo, in-progress, done)
    Mark {
        /// Task ID
        id: u64,

        /// New status
        status: String,
    },

    /// List tasks, optionally only those with the given status
    List {
        /// Status filter (todo, in-progress, done)
        status: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let malformed_policy = if cli.strict {
        MalformedPolicy::Fail
    } else {
        MalformedPolicy::Discard
    };
    let config = StoreConfig::new(cli.file)
        .with_malformed_policy(malformed_policy)
        .with_indent(2);
    let tracker = TaskTracker::new(config);
    let printer = TaskPrinter::new();

    match run(&tracker, &printer, cli.command).await {
        Ok(message) => {
            println!("{}", message.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    tracker: &TaskTracker,
    printer: &TaskPrinter,
    command: Command,
) -> Result<String, ServerError> {
    let message = match command {
        Command::Add { description } => printer.print_added(tracker.add(description).await?),
        Command::Update { id, description } => {
            outcome_message(printer, tracker.update(id, description).await?, |p| {
                p.print_updated(RecordId(id))
            })
        }
        Command::Delete { id } => outcome_message(printer, tracker.delete(id).await?, |p| {
            p.print_deleted(RecordId(id))
        }),
        Command::MarkInProgress { id } => {
            let outcome = tracker.mark_as(id, TaskStatus::InProgress).await?;
            outcome_message(printer, outcome, |p| {
                p.print_marked(RecordId(id), TaskStatus::InProgress)
            })
        }
        Command::MarkDone { id } => {
            let outcome = tracker.mark_as(id, TaskStatus::Done).await?;
            outcome_message(printer, outcome, |p| {
                p.print_marked(RecordId(id), TaskStatus::Done)
            })
        }
        Command::Mark { id, status: raw } => match parse_status(&raw) {
            Ok(status) => {
                let outcome = tracker.mark_as(id, status).await?;
                outcome_message(printer, outcome, |p| p.print_marked(RecordId(id), status))
            }
            Err(_) => printer.print_invalid_status(&raw),
        },
        Command::List { status } => match tracker.list(status.as_deref()).await? {
            Outcome::Success(tasks) => printer.print_list(&tasks),
            Outcome::InvalidStatus(raw) => printer.print_invalid_status(&raw),
            Outcome::NotFound(id) => printer.print_not_found(id),
            Outcome::NoRecords | Outcome::InvalidMonth(_) => printer.print_no_records(),
        },
    };
    Ok(message)
}

fn outcome_message(
    printer: &TaskPrinter,
    outcome: Outcome<()>,
    on_success: impl FnOnce(&TaskPrinter) -> String,
) -> String {
    match outcome {
        Outcome::Success(()) => on_success(printer),
        Outcome::NotFound(id) => printer.print_not_found(id),
        Outcome::InvalidStatus(raw) => printer.print_invalid_status(&raw),
        Outcome::NoRecords | Outcome::InvalidMonth(_) => printer.print_no_records(),
    }
}
