//! Chart rendering primitives for the terminal
//!
//! Translates a declarative `ChartSpec` into ratatui widgets. This is one of
//! the two spec consumers (the HTML report's script is the other); nothing in
//! here decides data policy, it only draws what the spec says.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph,
    },
};

use crate::chart::{ChartKind, ChartSpec};

/// Draw one chart spec inside a bordered block.
pub fn render(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let block = ratatui::widgets::Block::default()
        .title(format!(" {} ", spec.title))
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(color_from_hex(&spec.style.grid_color)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 3 {
        return;
    }
    // An empty spec is valid: draw an empty frame, never an error.
    if spec.is_empty() || spec.series.is_empty() {
        let empty = Paragraph::new("no data")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    match spec.kind {
        ChartKind::Bar => draw_bars(frame, inner, spec),
        ChartKind::HorizontalBar => draw_horizontal_bars(frame, inner, spec),
        ChartKind::Line => draw_lines(frame, inner, spec),
        ChartKind::Radar => draw_radar(frame, inner, spec),
    }
}

/// Vertical bars. Values may be negative, so bars are drawn relative to the
/// data minimum and the true value goes in the text label.
fn draw_bars(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let series = &spec.series[0];
    let floor = series.values.iter().copied().fold(0.0_f64, f64::min);
    let count = spec.labels.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(count) / count).clamp(3, 12);

    let bars: Vec<Bar> = spec
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, &v))| {
            let color = point_color(series, i);
            // Two fixed-point decimals keep small differences visible.
            let scaled = ((v - floor) * 100.0).round().max(0.0) as u64;
            Bar::default()
                .value(scaled)
                .text_value(spec.axis.tick_label(v))
                .label(Line::from(truncate(label, bar_width as usize)))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// Horizontal bars growing out of a zero line, one row per label. Per-point
/// colors (the correlation sign branch) are honored here.
fn draw_horizontal_bars(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let series = &spec.series[0];
    let lo = spec.axis.min.unwrap_or(0.0);
    let hi = spec
        .axis
        .max
        .unwrap_or_else(|| series.values.iter().copied().fold(1.0_f64, f64::max));
    let span = (hi - lo).max(f64::EPSILON);

    let label_width = spec
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(20);
    let value_width = 6;
    let bar_width = (area.width as usize).saturating_sub(label_width + value_width + 2);
    if bar_width < 4 {
        return;
    }

    let cell = |v: f64| ((v - lo) / span * (bar_width - 1) as f64).round() as usize;
    let zero = cell(0.0_f64.clamp(lo, hi));
    let dim = Style::default().fg(color_from_hex(&spec.style.text_color));
    let grid = Style::default().fg(color_from_hex(&spec.style.grid_color));

    let mut lines: Vec<Line> = Vec::with_capacity(spec.labels.len() + 1);
    for (i, (label, &v)) in spec.labels.iter().zip(&series.values).enumerate() {
        let fill = Style::default().fg(point_color(series, i));
        let target = cell(v.clamp(lo, hi));
        let (start, end) = if target >= zero {
            (zero, target)
        } else {
            (target, zero)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$} ", truncate(label, label_width), width = label_width),
            dim,
        )];
        for x in 0..bar_width {
            if x >= start && x <= end && v != 0.0 {
                spans.push(Span::styled("█", fill));
            } else if x == zero {
                spans.push(Span::styled("┆", grid));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        spans.push(Span::styled(
            format!(" {}", spec.axis.tick_label(v)),
            dim,
        ));
        lines.push(Line::from(spans));
    }

    // Domain footer so the fixed bounds are always readable.
    let lo_text = spec.axis.tick_label(lo);
    let hi_text = spec.axis.tick_label(hi);
    let pad = bar_width.saturating_sub(lo_text.chars().count() + hi_text.chars().count());
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(label_width + 1)),
        Span::styled(format!("{}{}{}", lo_text, " ".repeat(pad), hi_text), grid),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Multi-series line chart over evenly spaced x labels.
fn draw_lines(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let n = spec.labels.len();
    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect()
        })
        .collect();

    let all = spec.series.iter().flat_map(|s| s.values.iter().copied());
    let mut y_min = all.clone().fold(0.0_f64, f64::min);
    let mut y_max = all.fold(f64::MIN, f64::max).max(y_min);
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    } else {
        y_max += (y_max - y_min) * 0.05;
    }

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(&points)
        .map(|(s, data)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color_from_hex(&s.color)))
                .data(data)
        })
        .collect();

    let grid = Style::default().fg(color_from_hex(&spec.style.grid_color));
    let text = Style::default().fg(color_from_hex(&spec.style.text_color));

    let x_labels: Vec<Span> = [0, n.saturating_sub(1) / 2, n.saturating_sub(1)]
        .iter()
        .map(|&i| Span::styled(spec.labels[i].clone(), text))
        .collect();
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|&v| Span::styled(spec.axis.tick_label(v), text))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .bounds([0.0, n.saturating_sub(1).max(1) as f64])
                .labels(x_labels)
                .style(grid),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_labels)
                .style(grid),
        );
    frame.render_widget(chart, area);
}

/// Radar chart on a canvas: spokes, outer ring, and the data polygon. With
/// fewer than three axes a polygon degenerates, so fall back to a plain list.
fn draw_radar(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let series = &spec.series[0];
    let n = spec.labels.len();
    let text = Style::default().fg(color_from_hex(&spec.style.text_color));

    if n < 3 {
        let lines: Vec<Line> = spec
            .labels
            .iter()
            .zip(&series.values)
            .map(|(label, &v)| {
                Line::styled(format!("{}: {}", label, spec.axis.tick_label(v)), text)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let hi = series.values.iter().copied().fold(0.0_f64, f64::max);
    let lo = series.values.iter().copied().fold(0.0_f64, f64::min);
    let span = (hi - lo).max(1.0);
    let radius = move |v: f64| (v - lo) / span;
    let point = move |i: usize, r: f64| {
        let angle = FRAC_PI_2 - TAU * i as f64 / n as f64;
        (r * angle.cos(), r * angle.sin())
    };

    let grid_color = color_from_hex(&spec.style.grid_color);
    let line_color = color_from_hex(&series.color);
    let labels = spec.labels.clone();
    let values = series.values.clone();
    let lo_tick = spec.axis.tick_label(lo);
    let hi_tick = spec.axis.tick_label(hi);

    let canvas = Canvas::default()
        .x_bounds([-1.8, 1.8])
        .y_bounds([-1.4, 1.4])
        .paint(move |ctx| {
            for i in 0..n {
                let (x, y) = point(i, 1.0);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: grid_color,
                });
                let (nx, ny) = point((i + 1) % n, 1.0);
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: y,
                    x2: nx,
                    y2: ny,
                    color: grid_color,
                });
            }
            for i in 0..n {
                let (x1, y1) = point(i, radius(values[i]));
                let (x2, y2) = point((i + 1) % n, radius(values[(i + 1) % n]));
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: line_color,
                });
            }
            for (i, label) in labels.iter().enumerate() {
                let (x, y) = point(i, 1.22);
                ctx.print(x, y, Span::styled(truncate(label, 12), text));
            }
            // Scale ticks stay printed even when every value sits at zero.
            ctx.print(0.04, -0.12, Span::styled(lo_tick.clone(), text));
            ctx.print(0.04, 1.0, Span::styled(hi_tick.clone(), text));
        });
    frame.render_widget(canvas, area);
}

fn point_color(series: &crate::chart::Series, index: usize) -> Color {
    series
        .point_colors
        .as_ref()
        .and_then(|colors| colors.get(index))
        .map(|c| color_from_hex(c))
        .unwrap_or_else(|| color_from_hex(&series.color))
}

/// Parse `#rrggbb` into an RGB color, falling back to gray.
fn color_from_hex(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&digits[0..2], 16),
            u8::from_str_radix(&digits[2..4], 16),
            u8::from_str_radix(&digits[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Gray
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let char_len = max_len.saturating_sub(1);
        let truncated: String = s.chars().take(char_len).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(color_from_hex("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(color_from_hex("60a5fa"), Color::Rgb(96, 165, 250));
        assert_eq!(color_from_hex("not-a-color"), Color::Gray);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Sci-Fi", 10), "Sci-Fi");
        assert_eq!(truncate("Documentary", 5), "Docu…");
    }
}
