use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use fractic_server_error::ServerError;
use iso_currency::Currency;
use record_tracker::{
    config::{MalformedPolicy, StoreConfig},
    entities::Outcome,
    logging,
    printers::ExpensePrinter,
    util::{parse_amount, parse_currency, ExpenseTracker},
};

/// Expense Tracker Application
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "Track expenses in a local JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the expense store
    #[arg(
        long,
        global = true,
        env = "EXPENSE_TRACKER_FILE",
        default_value = "expenses.json"
    )]
    file: PathBuf,

    /// Fail instead of starting from an empty list when the store is malformed
    #[arg(long, global = true)]
    strict: bool,

    /// Currency used to print amounts (ISO 4217 code)
    #[arg(long, global = true, default_value = "USD", value_parser = currency_arg)]
    currency: Currency,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add an expense
    Add {
        /// Expense description
        #[arg(long)]
        description: String,

        /// Expense amount
        #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
        amount: f64,
    },

    /// Update an expense
    Update {
        /// Expense ID
        #[arg(long)]
        id: u64,

        /// Updated description
        #[arg(long)]
        description: Option<String>,

        /// Updated amount
        #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
        amount: Option<f64>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: u64,
    },

    /// List all expenses
    List,

    /// Show expenses summary
    Summary {
        /// Month number (1-12) to restrict the total to, across all years
        #[arg(long, allow_hyphen_values = true)]
        month: Option<String>,
    },
}

fn amount_arg(s: &str) -> Result<f64, String> {
    parse_amount(s).map_err(|e| e.to_string())
}

fn currency_arg(s: &str) -> Result<Currency, String> {
    parse_currency(s).map_err(|e| e.to_string())
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
        .with_indent(4);
    let tracker = ExpenseTracker::new(config);
    let printer = ExpensePrinter::new(cli.currency);

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
    tracker: &ExpenseTracker,
    printer: &ExpensePrinter,
    command: Command,
) -> Result<String, ServerError> {
    let message = match command {
        Command::Add {
            description,
            amount,
        } => printer.print_added(tracker.add(description, amount).await?),
        Command::Update {
            id,
            description,
            amount,
        } => outcome_message(
            printer,
            tracker.update(id, description, amount).await?,
            |p, ()| p.print_updated(),
        ),
        Command::Delete { id } => {
            outcome_message(printer, tracker.delete(id).await?, |p, ()| p.print_deleted())
        }
        Command::List => outcome_message(printer, tracker.list().await?, |p, expenses| {
            p.print_list(&expenses)
        }),
        Command::Summary { month } => outcome_message(
            printer,
            tracker.summary(month.as_deref()).await?,
            |p, summary| p.print_summary(&summary),
        ),
    };
    Ok(message)
}

fn outcome_message<T>(
    printer: &ExpensePrinter,
    outcome: Outcome<T>,
    on_success: impl FnOnce(&ExpensePrinter, T) -> String,
) -> String {
    match outcome {
        Outcome::Success(value) => on_success(printer, value),
        Outcome::NotFound(id) => printer.print_not_found(id),
        Outcome::InvalidMonth(raw) => printer.print_invalid_month(&raw),
        Outcome::NoRecords | Outcome::InvalidStatus(_) => printer.print_no_records(),
    }
}
