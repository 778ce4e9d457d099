use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ganttline_cli::{CliResult, Command};
use ganttline_layout::{InMemorySource, JsonFileSource};

/// Environment variable name for the data file path
const GANTT_DATA_PATH_ENV: &str = "GANTT_DATA_PATH";

/// Default data file path relative to project root or current working directory
const DEFAULT_DATA_PATH: &str = ".gantt/tasks.json";

/// Ganttline - Gantt timeline layout from the command line
#[derive(Parser)]
#[command(name = "gantt")]
#[command(version = "0.1.0")]
#[command(about = "Gantt timeline layout from the command line", long_about = None)]
struct Args {
    /// Path to the JSON data file (can also be set via GANTT_DATA_PATH env var)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Find the project root by running `git rev-parse --show-toplevel`.
///
/// Returns `None` if not in a git repository or the command fails.
fn find_project_root() -> Option<PathBuf> {
    let output = process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}

/// Get the data file path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --data argument
/// 2. GANTT_DATA_PATH environment variable (if non-empty)
/// 3. Default path (<project root>/.gantt/tasks.json)
fn resolve_data_path(cli_data: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_data {
        return path;
    }

    if let Ok(env_path) = std::env::var(GANTT_DATA_PATH_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    find_project_root()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_PATH)
}

/// Data source for `cmd`, or `None` when the command never reads data.
///
/// The data path is only resolved for commands that need it.
fn data_source(cmd: &Command, cli_data: Option<PathBuf>) -> Option<JsonFileSource> {
    if !cmd.needs_data() {
        return None;
    }
    let data_path = resolve_data_path(cli_data);
    debug!("Using data file {}", data_path.display());
    Some(JsonFileSource::new(data_path))
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=ganttline_layout=debug` - debug logs from the engine only
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(e) = run_with_args(&args) {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Run the application with the given arguments
fn run_with_args(args: &Args) -> CliResult<()> {
    match &args.command {
        Some(cmd) => {
            let result = match data_source(cmd, args.data.clone()) {
                Some(source) => cmd.execute(&source)?,
                None => cmd.execute(&InMemorySource::default())?,
            };
            println!("{}", result);
        }
        None => {
            println!("Welcome to Ganttline!");
            println!("Use 'gantt --help' for usage information.");
        }
    }

    Ok(())
}
