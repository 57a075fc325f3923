//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch one fact, print it, exit
    Once,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Command to run
    pub command: CliCommand,
    /// Endpoint override from `--endpoint`
    pub endpoint: Option<String>,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: catfact [OPTIONS]

Shows a random cat fact in the terminal.

Options:
      --once             Print one fact and exit
      --endpoint <URL>   Fetch from URL instead of https://catfact.ninja/fact
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  CATFACT_ENDPOINT   Endpoint override (flag wins)
  CATFACT_LOG        Log filter, e.g. debug (falls back to RUST_LOG)
  CATFACT_LOG_FILE   Log file path";

/// Parse command-line arguments (including the program name).
///
/// `--version` and `--help` win over everything else. Unknown arguments are
/// ignored. `--endpoint` accepts both `--endpoint URL` and `--endpoint=URL`.
///
/// # Examples
///
/// ```
/// use catfact::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["catfact".to_string(), "--once".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Once);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut endpoint = None;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                command = CliCommand::Version;
                break;
            }
            "--help" | "-h" => {
                command = CliCommand::Help;
                break;
            }
            "--once" => command = CliCommand::Once,
            "--endpoint" => endpoint = args.next(),
            other => {
                if let Some(value) = other.strip_prefix("--endpoint=") {
                    endpoint = Some(value.to_string());
                }
            }
        }
    }

    CliArgs {
        command,
        endpoint: endpoint.filter(|e| !e.is_empty()),
    }
}
