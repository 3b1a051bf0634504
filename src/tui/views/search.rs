//! Search view - prompt input, optional summary, staggered result cards

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::table::build_table;
use crate::tui::app::{App, Mode};

/// Draw the search view
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints = vec![Constraint::Length(3)];
    if app.summary.is_some() {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(3));
    let chunks = Layout::vertical(constraints).split(area);

    draw_input(frame, app, chunks[0]);

    let mut next = 1;
    if let Some(summary) = &app.summary {
        let block = Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(summary.as_str())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, chunks[next]);
        next += 1;
    }

    draw_results(frame, app, chunks[next]);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let (border, hint) = if app.mode == Mode::Prompt {
        (Style::default().fg(Color::Yellow), "enter to search")
    } else {
        (Style::default().fg(Color::DarkGray), "press / to edit")
    };

    let title = format!(" Prompt — top {} — {} ", app.top_k, hint);
    let mut spans = vec![Span::raw(app.prompt.as_str())];
    if app.mode == Mode::Prompt {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    if app.in_flight {
        spans.push(Span::styled(
            "  [searching…]",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    if app.results.is_empty() {
        let empty = Paragraph::new("No results yet. Press / and type a prompt.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut y = area.y;
    for (index, result) in app.results.iter().enumerate().skip(app.scroll) {
        // Stagger reveal: later cards appear once their delay has elapsed.
        if !app.card_visible(index) {
            break;
        }
        if y + 3 > area.bottom() {
            break;
        }

        let table = build_table(&result.payload);
        let mut lines: Vec<Line> = Vec::new();
        for row in &table.rows {
            if row.block {
                lines.push(Line::styled(
                    format!("{}:", row.label),
                    Style::default().fg(Color::DarkGray),
                ));
                for raw in row.value.lines() {
                    lines.push(Line::raw(format!("  {}", raw)));
                }
            } else {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", row.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(row.value.clone()),
                ]));
            }
        }

        let height = (lines.len() as u16 + 2).min(area.bottom() - y);
        let rect = Rect::new(area.x, y, area.width, height);
        let title = format!(
            " {}. {}  score={:.4} ",
            index + 1,
            result.display_title(),
            result.score
        );
        let card = Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(card, rect);
        y += height;
    }
}
