//! Application state and the fact fetch lifecycle.
//!
//! [`App`] owns the [`ViewState`] and is the only thing that mutates it.
//! Fetches run as spawned tokio tasks and report back over an unbounded
//! channel as [`AppMessage`]s, which the event loop feeds to
//! [`App::handle_message`].

mod handlers;
mod messages;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::fetcher::FactClient;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ViewState;

/// Main application state.
pub struct App {
    /// State the view renders from
    pub state: ViewState,
    /// Fact service client (cloned into each fetch task)
    pub client: FactClient,
    /// Receiver for async messages; the event loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into each fetch task)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed and the screen needs a redraw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Clickable regions from the last rendered frame
    pub hit_areas: HitAreaRegistry,
    /// Whether the initial fetch was issued
    started: bool,
    /// Id handed to the next fetch
    next_request_id: u64,
}

impl App {
    /// Create a new app around `client`. No request is made until [`App::start`].
    pub fn new(client: FactClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::new(),
            client,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            hit_areas: HitAreaRegistry::new(),
            started: false,
            next_request_id: 1,
        }
    }

    /// Issue the initial fetch when the view is first displayed.
    ///
    /// Only the first call does anything. Must be called inside a tokio
    /// runtime.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.fetch_fact();
        true
    }

    /// Activate the refresh control.
    ///
    /// Returns `false` without side effects while a fetch is in flight.
    pub fn refresh(&mut self) -> bool {
        if !self.state.can_refresh() {
            tracing::debug!("Refresh ignored: fetch in flight");
            return false;
        }
        self.fetch_fact();
        true
    }

    /// Reset the view and spawn one fetch. Returns the request id.
    ///
    /// Does not check for an in-flight request; [`App::refresh`] does. If two
    /// fetches overlap, each result is applied as it arrives.
    pub fn fetch_fact(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.state.begin_fetch();
        self.mark_dirty();

        tracing::debug!(request_id, url = %self.client.endpoint(), "Starting fetch");

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_fact().await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(AppMessage::FactFetched { request_id, result });
        });

        request_id
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Advance animations. Only the spinner animates, so only loading redraws.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.loading {
            self.mark_dirty();
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
