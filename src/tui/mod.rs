//! Terminal User Interface for Reelboard
//!
//! An interactive dashboard over the movie-recommendation backend.
//! Features:
//! - Analytics view with four charts and a standout movies table
//! - Search view with prompt input and staggered result cards
//! - Background fetches delivered over a channel, with stale-response
//!   tokens so a superseded request can never clobber newer data

pub mod app;
pub mod events;
pub mod ui;
pub mod views;
pub mod widgets;

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use app::{App, Delivery};
use events::handle_event;

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app, ensuring cleanup happens even on error
    let result = run_app_inner(&mut terminal, config);

    // Restore terminal - this MUST run even if app fails
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_app_inner<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, rx) = App::new(config)?;

    // Page-load fetch: the dashboard starts loading immediately.
    app.refresh_analysis();

    run_event_loop(terminal, &mut app, rx)
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetch_rx: mpsc::Receiver<Delivery>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Draw the UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle input with timeout
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            if let Event::Key(key) = read()? {
                if handle_event(app, key) {
                    return Ok(()); // Quit signal
                }
            }
        }

        // Drain finished fetches (non-blocking)
        while let Ok(delivery) = fetch_rx.try_recv() {
            app.deliver(delivery);
        }

        // Tick for animations/updates
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
