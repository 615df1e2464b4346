//! Command-line argument parsing for smart-todo.
//!
//! Options must come before the command; everything after `suggest` is
//! taken as the task description.

use std::path::PathBuf;
use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print suggestions for one task and exit
    Suggest { task: String },
    /// Run the interactive session (default)
    Interactive,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Explicit config file (`--config <path>`)
    pub config: Option<PathBuf>,
    pub command: CliCommand,
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("suggest needs a task description")]
    MissingTask,
}

/// Usage text printed by `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: smart-todo [--config <path>] [command]

Commands:
  suggest <task...>   Print follow-up suggestions for a task
  (none)              Start an interactive session

Options:
  -c, --config <path> Read settings from this TOML file
  -V, --version       Print version
  -h, --help          Print this help";

/// Parse command-line arguments.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use smart_todo::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["smart-todo".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut config = None;
    let mut words: Vec<String> = Vec::new();

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        if !words.is_empty() {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    config,
                    command: CliCommand::Version,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    config,
                    command: CliCommand::Help,
                })
            }
            "--config" | "-c" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--config"))?;
                config = Some(PathBuf::from(path));
            }
            other if other.starts_with("--config=") => {
                config = Some(PathBuf::from(&other["--config=".len()..]));
            }
            other if other.starts_with('-') => {
                return Err(ArgsError::UnknownOption(other.to_string()));
            }
            _ => words.push(arg),
        }
    }

    let command = match words.split_first() {
        None => CliCommand::Interactive,
        Some((first, rest)) if first == "suggest" => {
            let task = rest.join(" ").trim().to_string();
            if task.is_empty() {
                return Err(ArgsError::MissingTask);
            }
            CliCommand::Suggest { task }
        }
        Some((first, _)) => return Err(ArgsError::UnknownCommand(first.clone())),
    };

    Ok(CliArgs { config, command })
}
