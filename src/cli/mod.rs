//! CLI handling.
//!
//! Called early in main() so flags are handled before the terminal is touched:
//!
//! ```ignore
//! use catfact::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     std::process::exit(result?);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod once;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use once::{handle_once_command, run_once};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::FactConfig;

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the exit code.
pub fn run_cli_command(command: &CliCommand, config: &FactConfig) -> Option<Result<i32>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(0))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(0))
        }
        CliCommand::Once => Some(handle_once_command(config)),
        CliCommand::RunTui => None,
    }
}
