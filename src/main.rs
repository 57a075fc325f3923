use catfact::adapters::ReqwestHttpClient;
use catfact::app::{App, AppMessage};
use catfact::cli::{parse_args, run_cli_command, CliCommand};
use catfact::config::{FactConfig, ENV_LOG};
use catfact::fetcher::FactClient;
use catfact::logging::{init_file_logging_or_warn, init_stderr_logging};
use catfact::terminal::{setup_panic_hook, TerminalManager};
use catfact::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame interval
const TICK: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    let args = parse_args(std::env::args());

    let mut config = FactConfig::from_env();
    if let Some(endpoint) = args.endpoint.clone() {
        config = config.with_endpoint(endpoint);
    }

    color_eyre::install()?;

    let log_requested = std::env::var_os(ENV_LOG).is_some() || std::env::var_os("RUST_LOG").is_some();
    if args.command == CliCommand::Once && log_requested {
        init_stderr_logging(&config);
    }
    if let Some(result) = run_cli_command(&args.command, &config) {
        std::process::exit(result?);
    }

    // Panic hook restores the terminal before color-eyre prints the report
    setup_panic_hook();

    let log_path = init_file_logging_or_warn(&config, &mut std::io::stderr());
    tracing::info!(endpoint = %config.endpoint, log = ?log_path, "Starting catfact");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = FactClient::new(Arc::new(ReqwestHttpClient::new()), config.endpoint.clone());
        let mut app = App::new(client);

        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore();

        tracing::info!("Exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // The view is displayed from here on
    app.start();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Input stream error");
                        return Err(e.into());
                    }
                    // Input closed
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
