//! UI rendering for the TUI

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::{App, View};
use super::views::{dashboard, search};

/// Main draw function - orchestrates all rendering
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, footer
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Footer/status
    ])
    .split(area);

    draw_header(frame, app, main_layout[0]);

    match app.view {
        View::Dashboard => dashboard::draw(frame, app, main_layout[1]),
        View::Search => search::draw(frame, app, main_layout[1]),
    }

    draw_footer(frame, app, main_layout[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let view_name = match app.view {
        View::Dashboard => "Dashboard",
        View::Search => "Search",
    };

    let fetch_indicator = if app.in_flight { " [fetching…]" } else { "" };

    let header_text = format!(
        " Reelboard │ {} │ {}{}",
        view_name,
        app.base_url(),
        fetch_indicator
    );

    let header =
        Paragraph::new(header_text).style(Style::default().bg(Color::Blue).fg(Color::White).bold());

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.status_message {
        Some((message, _)) => Paragraph::new(format!(" {}", message))
            .style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(" q quit │ tab view │ r refresh │ / search │ j/k scroll")
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, area);
}
