//! Dashboard — account summary and the live market ticker.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use papertrade_core::valuation::valuate;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(session) = &app.session else { return };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    // Account summary.
    let snapshot = valuate(&session.ledger, &session.feed);
    let summary = vec![
        Line::from(vec![
            Span::styled(format!("  {} ", session.user.name), theme::title()),
            Span::styled(format!("<{}>", session.user.email), theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("  Cash ", theme::secondary()),
            Span::styled(format!("${:>12.2}", snapshot.cash_balance), theme::text()),
            Span::styled("   Holdings ", theme::secondary()),
            Span::styled(
                format!("${:>12.2}", snapshot.total_portfolio_value),
                theme::text(),
            ),
            Span::styled("   Equity ", theme::secondary()),
            Span::styled(format!("${:>12.2}", snapshot.equity), theme::accent()),
        ]),
        Line::from(vec![
            Span::styled("  Unrealized P&L ", theme::secondary()),
            Span::styled(
                format!(
                    "${:+.2} ({:+.2}%)",
                    snapshot.total_unrealized_pnl, snapshot.total_unrealized_pnl_percent
                ),
                theme::pnl(snapshot.total_unrealized_pnl),
            ),
            Span::styled("   Movers ", theme::secondary()),
            top_movers_span(session),
        ]),
    ];
    f.render_widget(Paragraph::new(summary), chunks[0]);

    // Market ticker.
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "  {:<6} {:<22} {:<10} {:>12} {:>10} {:>8}",
            "Sym", "Name", "Class", "Price", "Change", "Chg%"
        ),
        theme::title(),
    )));
    for asset in session.feed.assets() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<6} ", asset.symbol), theme::text()),
            Span::styled(format!("{:<22} ", truncate(&asset.name, 22)), theme::secondary()),
            Span::styled(format!("{:<10} ", asset.asset_class.label()), theme::muted()),
            Span::styled(format!("{:>11.2} ", asset.current_price), theme::text()),
            Span::styled(
                format!("{:>+9.2} ", asset.price_change),
                theme::pnl(asset.price_change),
            ),
            Span::styled(
                format!("{:>+7.2}%", asset.price_change_percent),
                theme::pnl(asset.price_change_percent),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[1]);
}

/// The three assets with the largest session move, either direction.
fn top_movers_span(session: &papertrade_core::session::Session) -> Span<'static> {
    let mut movers: Vec<(&str, f64)> = session
        .feed
        .assets()
        .iter()
        .map(|a| (a.symbol.as_str(), a.price_change_percent))
        .collect();
    movers.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let text = movers
        .iter()
        .take(3)
        .map(|(sym, pct)| format!("{sym} {pct:+.2}%"))
        .collect::<Vec<_>>()
        .join("  ");
    Span::styled(text, theme::accent())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
