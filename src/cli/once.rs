//! `--once`: fetch a single fact without the TUI.

use color_eyre::Result;
use std::io::{self, Write};
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::FactConfig;
use crate::fetcher::FactClient;

/// Fetch one fact and write it to `out`, or the error to `err`.
///
/// Returns the process exit code: 0 on success, 1 on a fetch failure.
pub async fn run_once<O: Write, E: Write>(
    client: &FactClient,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    match client.fetch_fact().await {
        Ok(fact) => {
            writeln!(out, "{}", fact.fact)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "Error: {}", e.user_message())?;
            Ok(1)
        }
    }
}

/// Handle the --once command against the real fact service.
pub fn handle_once_command(config: &FactConfig) -> Result<i32> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = FactClient::new(Arc::new(ReqwestHttpClient::new()), config.endpoint.clone());

    let code = runtime.block_on(async {
        let stdout = io::stdout();
        let stderr = io::stderr();
        run_once(&client, &mut stdout.lock(), &mut stderr.lock()).await
    })?;
    Ok(code)
}
