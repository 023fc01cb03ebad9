use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tick::model::Filter;
use tick::output::Format;
use tick::task_id::TaskId;

#[derive(Parser)]
#[command(
    name = "tick",
    version,
    about = "File-backed tracker for short to-do tasks"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Backing file (default: data/tasks.json, or $TICK_FILE)
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the backing file if it does not exist
    Init,
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },
    /// List tasks in insertion order
    List {
        /// Filter by completion status
        #[arg(long, value_enum, default_value = "all")]
        status: Filter,
    },
    /// Mark a task as completed
    Complete {
        /// Task ID to complete
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        id: String,
    },
}

fn parse_id(input: &str) -> tick::error::Result<TaskId> {
    Ok(input.parse::<TaskId>()?)
}

fn run(cli: Cli) -> tick::error::Result<()> {
    let store_path = tick::config::resolve_store_path(cli.file);
    match cli.command {
        Commands::Init => tick::commands::init::run(&store_path, cli.format),
        Commands::Add { description } => {
            tick::commands::add::run(&store_path, description, cli.format)
        }
        Commands::List { status } => tick::commands::list::run(&store_path, status, cli.format),
        Commands::Complete { id } => {
            tick::commands::complete::run(&store_path, &parse_id(&id)?, cli.format)
        }
        Commands::Delete { id } => {
            tick::commands::delete::run(&store_path, &parse_id(&id)?, cli.format)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let format = cli.format;
    if let Err(e) = run(cli) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
