//! HTML report generation with Chart.js visualizations
//!
//! `reelboard report` writes a self-contained dashboard page: the four chart
//! specs are embedded as JSON and a small script hands each one to Chart.js.
//! The Rust side stays declarative; the script only translates fields.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::chart::{self, palette};
use crate::format::format_millions;
use crate::model::AnalysisSummary;

/// Write the full report to `path`.
pub fn generate(path: &Path, summary: &AnalysisSummary) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, summary)
}

/// Write the full HTML document to any writer.
pub fn write<W: Write>(writer: &mut W, summary: &AnalysisSummary) -> io::Result<()> {
    let specs = chart::dashboard(summary, &palette::BASE);
    let json_specs = serde_json::to_string(&specs)
        .map_err(io::Error::other)?
        // Keep arbitrary strings from terminating the script block early.
        .replace("</", "<\\/");
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");

    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Reelboard Analytics</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
    <style>
        :root {{
            --bg: #0f172a;
            --card: #1e293b;
            --border: #334155;
            --text: #e2e8f0;
            --dim: #94a3b8;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: {font};
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 2.5rem 1.5rem; }}
        .header {{
            display: flex;
            align-items: baseline;
            gap: 1rem;
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }}
        .logo {{ font-size: 1.75rem; font-weight: 700; }}
        .subtitle {{ color: var(--dim); font-size: 0.875rem; }}
        .charts {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.25rem;
            margin-bottom: 2rem;
        }}
        .chart-card {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.25rem;
        }}
        .chart-title {{ font-size: 0.9rem; font-weight: 600; margin-bottom: 0.75rem; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 0.6rem 0.8rem; text-align: left; }}
        th {{
            color: var(--dim);
            font-size: 0.7rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            border-bottom: 1px solid var(--border);
        }}
        td {{ border-bottom: 1px solid rgba(148, 163, 184, 0.12); }}
        .num {{ text-align: right; font-variant-numeric: tabular-nums; }}
    </style>
</head>
<body>
<div class="container">
    <div class="header">
        <div class="logo">Reelboard</div>
        <div class="subtitle">Movie dataset analytics &middot; generated {generated}</div>
    </div>
    <div class="charts">
"#,
        font = palette::BASE.font_family,
        generated = generated,
    )?;

    for (index, spec) in specs.iter().enumerate() {
        write!(
            writer,
            r#"        <div class="chart-card">
            <div class="chart-title">{title}</div>
            <canvas id="chart-{index}"></canvas>
        </div>
"#,
            title = escape(&spec.title),
            index = index,
        )?;
    }

    writeln!(writer, "    </div>")?;
    write_standout_table(writer, summary)?;

    write!(
        writer,
        r#"</div>
<script>
const SPECS = {json_specs};

function datasets(spec) {{
    return spec.series.map((s) => ({{
        label: s.name,
        data: s.values,
        borderColor: s.color,
        backgroundColor: s.point_colors ?? (s.fill ? s.color + "44" : s.color),
        fill: s.fill,
        tension: s.tension,
        borderWidth: 2,
    }}));
}}

function tick(axis) {{
    return (value) => Number(value).toFixed(axis.decimals) + axis.suffix;
}}

function options(spec) {{
    const axis = spec.axis;
    const grid = {{ color: spec.style.grid_color }};
    const base = {{
        responsive: true,
        plugins: {{
            legend: {{ labels: {{ color: spec.style.text_color }} }},
            tooltip: {{
                backgroundColor: spec.style.tooltip_bg,
                titleColor: spec.style.tooltip_text,
                bodyColor: spec.style.tooltip_text,
            }},
        }},
    }};
    if (spec.kind === "radar") {{
        base.scales = {{
            r: {{
                min: axis.min,
                max: axis.max,
                grid,
                angleLines: grid,
                pointLabels: {{ color: spec.style.text_color }},
                ticks: {{
                    callback: tick(axis),
                    color: spec.style.text_color,
                    showLabelBackdrop: false,
                    display: true,
                }},
            }},
        }};
        return base;
    }}
    const valueScale = {{
        min: axis.min,
        max: axis.max,
        grid,
        ticks: {{ callback: tick(axis), color: spec.style.text_color }},
    }};
    const labelScale = {{ grid, ticks: {{ color: spec.style.text_color }} }};
    if (spec.kind === "horizontal_bar") {{
        base.indexAxis = "y";
        base.scales = {{ x: valueScale, y: labelScale }};
    }} else {{
        base.scales = {{ x: labelScale, y: valueScale }};
    }}
    return base;
}}

function kind(spec) {{
    if (spec.kind === "horizontal_bar") return "bar";
    return spec.kind;
}}

SPECS.forEach((spec, index) => {{
    const ctx = document.getElementById("chart-" + index);
    new Chart(ctx, {{
        type: kind(spec),
        data: {{ labels: spec.labels, datasets: datasets(spec) }},
        options: options(spec),
    }});
}});
</script>
</body>
</html>
"#,
        json_specs = json_specs,
    )?;

    Ok(())
}

fn write_standout_table<W: Write>(writer: &mut W, summary: &AnalysisSummary) -> io::Result<()> {
    write!(
        writer,
        r#"    <div class="chart-card">
        <div class="chart-title">Standout Movies (Profit &amp; Margin)</div>
        <table>
            <thead>
                <tr>
                    <th>Title</th><th>Genre</th><th>Year</th>
                    <th class="num">Revenue</th><th class="num">Profit</th><th class="num">Margin</th>
                </tr>
            </thead>
            <tbody>
"#
    )?;

    for movie in &summary.top_movies_by_profit_and_margin {
        write!(
            writer,
            r#"                <tr>
                    <td>{title}</td><td>{genre}</td><td>{year}</td>
                    <td class="num">{revenue}</td><td class="num">{profit}</td><td class="num">{margin:.0}%</td>
                </tr>
"#,
            title = escape(&movie.title),
            genre = escape(&movie.genre),
            year = movie.release_year,
            revenue = format_millions(movie.revenue),
            profit = format_millions(movie.profit),
            margin = movie.margin * 100.0,
        )?;
    }

    writeln!(writer, "            </tbody>\n        </table>\n    </div>")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CorrelationPair, GenreProfit, StandoutMovie};

    fn sample_summary() -> AnalysisSummary {
        AnalysisSummary {
            top_genres_average_profit: vec![GenreProfit {
                genre: "Sci-Fi <3".to_string(),
                average_profit: 212.4,
            }],
            metric_correlations: vec![CorrelationPair {
                pair: "Budget vs Revenue".to_string(),
                value: -0.2,
            }],
            top_movies_by_profit_and_margin: vec![StandoutMovie {
                title: "Alien & Aliens".to_string(),
                genre: "Horror".to_string(),
                release_year: 1979,
                revenue: 184.5,
                profit: 173.5,
                margin: 15.77,
            }],
            ..Default::default()
        }
    }

    fn render_to_string(summary: &AnalysisSummary) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer, summary).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_is_a_full_document() {
        let html = render_to_string(&sample_summary());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
        assert!(html.contains("chart.js"));
        // One canvas per chart spec
        for index in 0..4 {
            assert!(html.contains(&format!("chart-{}", index)));
        }
    }

    #[test]
    fn test_report_embeds_specs_and_escapes_markup() {
        let html = render_to_string(&sample_summary());
        assert!(html.contains("const SPECS = ["));
        assert!(html.contains("Sci-Fi <3")); // inside the JSON blob
        assert!(html.contains("Alien &amp; Aliens")); // escaped in the table
        assert!(html.contains("1577%") || html.contains("1,577%") || html.contains("1577"));
    }

    #[test]
    fn test_standout_columns_carry_a_single_unit() {
        let mut summary = sample_summary();
        summary.top_movies_by_profit_and_margin[0].revenue = 2_201_600.0;
        let html = render_to_string(&summary);
        assert!(html.contains("2,201,600 M"));
        assert!(!html.contains("M M"));
    }

    #[test]
    fn test_empty_summary_still_renders() {
        let html = render_to_string(&AnalysisSummary::default());
        assert!(html.contains("Standout Movies"));
        assert!(html.contains("const SPECS = ["));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        generate(&path, &sample_summary()).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Reelboard"));
    }
}
