//! Application state for the TUI

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::client::{ApiClient, ApiError};
use crate::config::Config;
use crate::model::{AnalysisSummary, SearchRequest, SearchResponse, SearchResult};

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Search,
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Prompt,
}

/// Per-card reveal offset for the search results list. Presentation only.
pub const STAGGER_DELAY: Duration = Duration::from_millis(80);

/// What a finished backend call produced.
#[derive(Debug)]
pub enum FetchOutcome {
    Analysis(Result<AnalysisSummary, ApiError>),
    Search(Result<SearchResponse, ApiError>),
}

/// A fetch worker's message back into the event loop. The token stamps which
/// request cycle produced it; stale tokens are discarded on delivery.
#[derive(Debug)]
pub struct Delivery {
    pub token: u64,
    pub outcome: FetchOutcome,
}

/// Main application state
pub struct App {
    client: Arc<ApiClient>,
    tx: mpsc::Sender<Delivery>,

    // Payloads (replaced wholesale on every successful fetch)
    pub analysis: Option<AnalysisSummary>,
    pub results: Vec<SearchResult>,
    pub summary: Option<String>,

    // Search input
    pub prompt: String,
    pub top_k: usize,
    pub summarize: bool,

    // View state
    pub view: View,
    pub mode: Mode,
    pub scroll: usize,

    // Request cycle tracking. `in_flight` disables the triggering controls;
    // `latest_token` lets delivery drop superseded responses.
    pub in_flight: bool,
    latest_token: u64,

    // Stagger clock for result cards
    pub revealed_at: Option<Instant>,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Build the app plus the receiving end of the fetch channel the event
    /// loop polls.
    pub fn new(config: &Config) -> Result<(Self, mpsc::Receiver<Delivery>), ApiError> {
        let client = ApiClient::new(config.base_url(), config.timeout())?;
        let (tx, rx) = mpsc::channel();
        let app = Self {
            client: Arc::new(client),
            tx,
            analysis: None,
            results: Vec::new(),
            summary: None,
            prompt: String::new(),
            top_k: config.search.top_k,
            summarize: config.search.summarize,
            view: View::Dashboard,
            mode: Mode::Normal,
            scroll: 0,
            in_flight: false,
            latest_token: 0,
            revealed_at: None,
            status_message: None,
        };
        Ok((app, rx))
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Claim the next request token, or None while a request is in flight.
    /// The in-flight guard is what disables the triggering controls.
    fn begin_request(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.latest_token += 1;
        Some(self.latest_token)
    }

    /// Kick off an analytics fetch on a worker thread.
    pub fn refresh_analysis(&mut self) {
        let Some(token) = self.begin_request() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = FetchOutcome::Analysis(client.fetch_analysis());
            let _ = tx.send(Delivery { token, outcome });
        });
    }

    /// Submit the current prompt. No-op for empty prompts and while a
    /// request is already in flight.
    pub fn submit_search(&mut self) {
        if self.prompt.trim().is_empty() {
            self.set_status("Type a prompt first".to_string());
            return;
        }
        let Some(token) = self.begin_request() else {
            return;
        };
        let request = SearchRequest::new(self.prompt.trim(), self.top_k, self.summarize);
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = FetchOutcome::Search(client.search(&request));
            let _ = tx.send(Delivery { token, outcome });
        });
        self.mode = Mode::Normal;
    }

    /// Stop waiting on the current request. The worker keeps running, but its
    /// eventual delivery carries a stale token and gets dropped.
    pub fn abandon_request(&mut self) {
        if self.in_flight {
            self.in_flight = false;
            // Invalidate the outstanding token, otherwise the worker's
            // eventual delivery would still match and land as stale data.
            self.latest_token += 1;
            self.set_status("Request abandoned".to_string());
        }
    }

    /// Fold one worker delivery into the state. Responses from superseded
    /// request cycles are discarded so a slow fetch can never overwrite a
    /// newer one.
    pub fn deliver(&mut self, delivery: Delivery) {
        if delivery.token != self.latest_token {
            return;
        }
        self.in_flight = false;
        match delivery.outcome {
            FetchOutcome::Analysis(Ok(summary)) => {
                self.analysis = Some(summary);
                self.set_status("Analytics updated".to_string());
            }
            FetchOutcome::Search(Ok(response)) => {
                self.results = response.results;
                self.summary = response.summary;
                self.scroll = 0;
                self.revealed_at = Some(Instant::now());
                let n = self.results.len();
                self.set_status(format!("{} result(s)", n));
            }
            FetchOutcome::Analysis(Err(e)) | FetchOutcome::Search(Err(e)) => {
                self.set_status(e.status_text());
            }
        }
    }

    /// Whether result card `index` is past its stagger delay.
    pub fn card_visible(&self, index: usize) -> bool {
        match self.revealed_at {
            Some(at) => at.elapsed() >= STAGGER_DELAY * index as u32,
            None => false,
        }
    }

    /// Periodic tick for animations
    pub fn tick(&mut self) {
        // Clear status message after 3 seconds
        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed().as_secs() >= 3 {
                self.status_message = None;
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Dashboard => View::Search,
            View::Search => View::Dashboard,
        };
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Upper bound is enforced at draw time; results vary in height.
        if self.scroll + 1 < self.results.len().max(1) {
            self.scroll += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.scroll = 0;
    }
}
