//! Dashboard view - four analytics charts plus the standout movies table

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::chart::{self, palette};
use crate::format::format_millions;
use crate::model::AnalysisSummary;
use crate::tui::app::App;
use crate::tui::widgets::charts;

/// Draw the analytics dashboard
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.analysis else {
        let hint = if app.in_flight {
            "Fetching analytics…"
        } else {
            "No analytics loaded. Press r to fetch."
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    // Every render cycle rebuilds all four specs from the current payload;
    // nothing is cached across fetches.
    let specs = chart::dashboard(summary, &palette::BASE);

    let table_height = (summary.top_movies_by_profit_and_margin.len() as u16 + 3)
        .clamp(3, (area.height / 3).max(3));
    let rows = Layout::vertical([Constraint::Min(12), Constraint::Length(table_height)])
        .split(area);
    let chart_rows =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chart_rows[0]);
    let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chart_rows[1]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];
    for (spec, cell) in specs.iter().zip(cells) {
        charts::render(frame, cell, spec);
    }

    draw_standouts(frame, summary, rows[1]);
}

fn draw_standouts(frame: &mut Frame, summary: &AnalysisSummary, area: Rect) {
    let header = Row::new(["Title", "Genre", "Year", "Revenue", "Profit", "Margin"])
        .style(Style::default().fg(Color::DarkGray).bold());

    let rows: Vec<Row> = summary
        .top_movies_by_profit_and_margin
        .iter()
        .map(|movie| {
            Row::new(vec![
                Cell::from(movie.title.clone()).style(Style::default().bold()),
                Cell::from(movie.genre.clone()),
                Cell::from(movie.release_year.to_string()),
                Cell::from(format_millions(movie.revenue)),
                Cell::from(format_millions(movie.profit)),
                Cell::from(format!("{:.0}%", movie.margin * 100.0)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(16),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Standout Movies ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(table, area);
}
