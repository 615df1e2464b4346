//! CLI module for smart-todo.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - One-shot suggestions
//! - The interactive session
//!
//! # Usage
//!
//! ```ignore
//! use smart_todo::cli::{parse_args, CliCommand};
//!
//! let args = parse_args(std::env::args())?;
//! match args.command {
//!     CliCommand::Suggest { task } => { /* print suggestions */ }
//!     _ => {}
//! }
//! ```

pub mod args;
pub mod session;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use session::{Session, SessionCommand};
pub use version::{version_string, VERSION};

use std::io::{self, Write};

use crate::client::SuggestionClient;
use crate::traits::HttpClient;

/// Handle `suggest <task>`: print one suggestion per line.
pub async fn run_suggest_command<C, W>(
    client: &SuggestionClient<C>,
    task: &str,
    out: &mut W,
) -> io::Result<()>
where
    C: HttpClient,
    W: Write,
{
    for suggestion in client.suggest(task).await {
        writeln!(out, "{}", suggestion)?;
    }
    Ok(())
}
