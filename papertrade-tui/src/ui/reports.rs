//! Reports screen — activity stats, class distribution, performance chart.

use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use papertrade_core::reports::ReportSummary;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(session) = &app.session else { return };
    let report = ReportSummary::from_ledger(&session.ledger, &session.feed, Utc::now());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("  Trades ", theme::secondary()),
        Span::styled(format!("{}", report.total_trades), theme::text()),
        Span::styled("   Buys ", theme::secondary()),
        Span::styled(format!("{}", report.total_buys), theme::positive()),
        Span::styled("   Sells ", theme::secondary()),
        Span::styled(format!("{}", report.total_sells), theme::negative()),
        Span::styled("   Unrealized P&L ", theme::secondary()),
        Span::styled(
            format!(
                "${:+.2} ({:+.2}%)",
                report.unrealized_pnl, report.unrealized_pnl_percent
            ),
            theme::pnl(report.unrealized_pnl),
        ),
    ]));
    lines.push(Line::from(""));

    match &report.most_traded {
        Some(most) => lines.push(Line::from(vec![
            Span::styled("  Most traded: ", theme::secondary()),
            Span::styled(format!("{} ({})", most.symbol, most.name), theme::accent()),
            Span::styled(format!(" — {} trades", most.trades), theme::muted()),
        ])),
        None => lines.push(Line::from(Span::styled(
            "  No trades yet.",
            theme::muted(),
        ))),
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("  Allocation", theme::title())));
    for slice in &report.class_distribution {
        let bar_len = (slice.percent / 100.0 * 30.0).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16} ", slice.asset_class.label()),
                theme::secondary(),
            ),
            Span::styled("█".repeat(bar_len), theme::accent()),
            Span::styled(format!(" {:.1}%", slice.percent), theme::text()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    render_performance(f, chunks[1], &report);
}

fn render_performance(f: &mut Frame, area: Rect, report: &ReportSummary) {
    let history = &report.performance_history;
    if history.len() < 2 {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Trade at least once to see the performance chart.",
                theme::muted(),
            ))),
            area,
        );
        return;
    }

    let data: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.portfolio_value))
        .collect();
    let min_y = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max_y = data.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs().max(1.0) * 0.05;

    let dataset = Dataset::default()
        .name("Portfolio value")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::POSITIVE))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Trades", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, (data.len() - 1) as f64])
                .labels(vec![
                    Span::styled("first", theme::muted()),
                    Span::styled("now", theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Value", theme::muted()))
                .style(theme::muted())
                .bounds([min_y - padding, max_y + padding])
                .labels(vec![
                    Span::styled(format!("{:.0}", min_y - padding), theme::muted()),
                    Span::styled(format!("{:.0}", max_y + padding), theme::muted()),
                ]),
        );
    f.render_widget(chart, area);
}
