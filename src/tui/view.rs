// ===== benchdash/src/tui/view.rs =====
//
// Draw functions: pure projection of the app state onto the frame.
// Mutable access to the app is only needed because trend values carry a
// live random term and are regenerated on every render.

use crate::catalog;
use crate::state::ViewMode;
use crate::synth::scores::{self, PerfRating, SCORE_CEILING};
use crate::synth::telemetry::{self, Severity};
use crate::synth::trend::{self, WeekSample};
use crate::tui::app::{App, Focus, SidebarRow};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, ListState, Paragraph,
};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(f.area());

    draw_sidebar(f, columns[0], app);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    draw_header(f, main[0], app);

    match app.state.view_mode() {
        ViewMode::PickProgram => draw_prompt(
            f,
            main[1],
            "Select a Program",
            "Choose a CPU program from the sidebar to view benchmark results",
        ),
        ViewMode::ProgramTrends => draw_trends(f, main[1], app),
        ViewMode::PickBuild => draw_prompt(
            f,
            main[1],
            "Select a Build",
            "Choose a build to view gaming benchmark results",
        ),
        ViewMode::Results => draw_results(f, main[1], app),
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut line = vec![Span::styled(
        "Gaming Benchmark Dashboard",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    line.push(Span::styled(
        format!(
            "  {} {} Settings • {} Game Suite",
            catalog::RESOLUTION,
            catalog::SETTINGS,
            catalog::GAMES.len()
        ),
        Style::default().fg(Color::DarkGray),
    ));
    if let (Some(program), Some(sku), Some(build)) =
        (&app.state.program, &app.state.sku, &app.state.build)
    {
        line.push(Span::styled(
            format!("  │  {} / {} / {}", program, sku, build),
            Style::default().fg(Color::Cyan),
        ));
    }

    let header = Paragraph::new(Line::from(line))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let rows = app.sidebar_rows();
    let items: Vec<ListItem> = rows.iter().map(|row| sidebar_item(row, app)).collect();

    let highlight = if app.focus == Focus::Sidebar {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Programs & Builds"),
        )
        .highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(app.sidebar_cursor.min(rows.len().saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn sidebar_item<'a>(row: &SidebarRow, app: &App) -> ListItem<'a> {
    match row {
        SidebarRow::Program(name) => {
            let expanded = app.state.expanded_programs.contains(*name);
            let chevron = if expanded { "▾ " } else { "▸ " };
            let selected = app.state.program.as_deref() == Some(*name);
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let color = catalog::program(name)
                .map(|p| hex_color(p.color))
                .unwrap_or(Color::White);
            ListItem::new(Line::from(vec![
                Span::raw(chevron),
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(name.to_string(), style),
            ]))
        }
        SidebarRow::Sku(name) => {
            let selected = app.state.sku.as_deref() == Some(*name);
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(format!("    {}", name), style)))
        }
        SidebarRow::BuildHeader => ListItem::new(Line::from(Span::styled(
            "  BUILDS",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))),
        SidebarRow::Build(label) => {
            let selected = app.state.build.as_deref() == Some(*label);
            let style = if selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(format!("    {}", label), style)))
        }
    }
}

fn draw_prompt(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(area);

    let text = Text::from(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    let prompt = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(prompt, rows[1]);
}

fn draw_trends(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(program_name) = app.state.program.clone() else {
        return;
    };
    let Some(program) = catalog::program(&program_name) else {
        draw_prompt(f, area, "No data", "Unknown program");
        return;
    };

    let samples = trend::weekly_trend(&program_name, &mut app.rng);
    if samples.is_empty() {
        draw_prompt(f, area, "No data", "No trend data for this program");
        return;
    }

    let n = program.skus.len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, n); n as usize])
        .split(area);

    for (idx, sku) in program.skus.iter().enumerate() {
        if idx >= chunks.len() {
            break;
        }
        draw_sku_chart(f, chunks[idx], sku, idx, &samples);
    }
}

fn draw_sku_chart(f: &mut Frame, area: Rect, sku: &str, sku_idx: usize, samples: &[WeekSample]) {
    let series = trend::sku_series(samples, sku_idx);
    let Some(stats) = trend::series_stats(&series) else {
        return;
    };
    let color = hex_color(catalog::SKU_PALETTE[sku_idx % catalog::SKU_PALETTE.len()]);
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let (glyph, glyph_color) = delta_glyph(stats.delta);
    let title = Line::from(vec![
        Span::styled(
            format!("{} ", sku),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:.0} FPS ", stats.latest)),
        Span::styled(
            format!("{} {:.1} vs last week", glyph, stats.delta.abs()),
            Style::default().fg(glyph_color),
        ),
    ]);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let x_labels: Vec<Line> = [
        samples.first(),
        samples.get(samples.len() / 2),
        samples.last(),
    ]
    .into_iter()
    .flatten()
    .map(|s| Line::from(s.week.clone()))
    .collect();

    let y_lo = stats.min - 3.0;
    let y_hi = stats.max + 3.0;
    let datasets = vec![Dataset::default()
        .name(sku.to_string())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (samples.len().saturating_sub(1)) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Line::from(format!("{:.0}", y_lo)),
                    Line::from(format!("{:.0}", (y_lo + y_hi) / 2.0)),
                    Line::from(format!("{:.0}", y_hi)),
                ]),
        );
    f.render_widget(chart, parts[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "Min {:.0} FPS   Max {:.0} FPS   Range {:.0} FPS",
            stats.min,
            stats.max,
            stats.max - stats.min
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, parts[1]);
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_summary_cards(f, rows[0], app);
    draw_results_table(f, rows[1], app);
}

fn draw_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let avg = scores::average_fps(&app.results);
    let values = [
        ("Average FPS", avg.to_string(), Color::Cyan),
        ("Total Games", app.results.len().to_string(), Color::Green),
        ("Resolution", catalog::RESOLUTION.to_string(), Color::Magenta),
        ("Settings", catalog::SETTINGS.to_string(), Color::Yellow),
    ];

    for (i, (label, value, color)) in values.into_iter().enumerate() {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(label))
        .alignment(Alignment::Center);
        f.render_widget(card, cards[i]);
    }
}

fn draw_results_table(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game Performance Results");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        format!(
            "  {:<28} {:>9} {:>11}   {}",
            "GAME TITLE", "FPS", "PERCENTILE", "PERFORMANCE"
        ),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(header, parts[0]);

    let items: Vec<ListItem> = app.results.iter().map(|r| result_item(r, app)).collect();
    let highlight = if app.focus == Focus::Table {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(
        app.table_cursor.min(app.results.len().saturating_sub(1)),
    ));
    f.render_stateful_widget(list, parts[1], &mut list_state);
}

fn result_item<'a>(result: &scores::GameResult, app: &App) -> ListItem<'a> {
    let expanded = app.state.expanded_games.contains(result.game);
    let chevron = if expanded { "▾" } else { "▸" };
    let rating = result.rating();
    let color = rating_color(rating);

    let bar_width = 10usize;
    let filled = ((result.score as usize * bar_width) / SCORE_CEILING as usize).min(bar_width);
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} {:<28.28}", chevron, result.game)),
        Span::styled(
            format!(" {:>5} FPS", result.score),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {:>10}%", result.percentile)),
        Span::styled(format!("   {} ", bar), Style::default().fg(color)),
        Span::styled(rating.to_string(), Style::default().fg(color)),
    ])];

    if expanded {
        // Telemetry is derived on every render, never cached.
        let m = telemetry::cpu_metrics(result.game);
        let clip_color = severity_color(m.clipping.severity());
        let temp_color = severity_color(telemetry::temp_severity(m.package_temp_c));
        lines.push(Line::from(vec![
            Span::styled("      P-core ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.2} GHz", m.p_core_ghz)),
            Span::styled("   E-core ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.2} GHz", m.e_core_ghz)),
            Span::styled("   IA ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1} W", m.ia_power_w)),
            Span::styled("   Package ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1} W", m.package_power_w)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("      Clipping ", Style::default().fg(Color::DarkGray)),
            Span::styled(m.clipping.to_string(), Style::default().fg(clip_color)),
            Span::styled("   Package Temp ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}°C", m.package_temp_c),
                Style::default().fg(temp_color),
            ),
        ]));
    }

    ListItem::new(Text::from(lines))
}

fn rating_color(rating: PerfRating) -> Color {
    match rating {
        PerfRating::Excellent => Color::Green,
        PerfRating::Good => Color::Yellow,
        PerfRating::Fair => Color::Red,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Nominal => Color::Green,
        Severity::Elevated => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

fn delta_glyph(delta: f64) -> (&'static str, Color) {
    if delta > 0.0 {
        ("↗", Color::Green)
    } else if delta < 0.0 {
        ("↘", Color::Red)
    } else {
        ("→", Color::DarkGray)
    }
}

/// Parse a "#rrggbb" catalog color; anything malformed falls back to
/// white instead of faulting.
fn hex_color(hex: &str) -> Color {
    let h = hex.trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).unwrap_or(0xff);
    Color::Rgb(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_and_fallback() {
        assert_eq!(hex_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(hex_color("nonsense"), Color::White);
    }

    #[test]
    fn delta_glyph_direction() {
        assert_eq!(delta_glyph(2.0).0, "↗");
        assert_eq!(delta_glyph(-1.0).0, "↘");
        assert_eq!(delta_glyph(0.0).0, "→");
    }
}
