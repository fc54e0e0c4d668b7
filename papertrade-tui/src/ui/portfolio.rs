//! Portfolio screen — per-position valuation table and history.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use papertrade_core::valuation::valuate;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(session) = &app.session else { return };
    let snapshot = valuate(&session.ledger, &session.feed);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(area);

    // Totals header.
    let totals = vec![Line::from(vec![
        Span::styled("  Holdings ", theme::secondary()),
        Span::styled(
            format!("${:.2}", snapshot.total_portfolio_value),
            theme::text(),
        ),
        Span::styled("   Cost basis ", theme::secondary()),
        Span::styled(format!("${:.2}", snapshot.total_cost_basis), theme::text()),
        Span::styled("   P&L ", theme::secondary()),
        Span::styled(
            format!(
                "${:+.2} ({:+.2}%)",
                snapshot.total_unrealized_pnl, snapshot.total_unrealized_pnl_percent
            ),
            theme::pnl(snapshot.total_unrealized_pnl),
        ),
    ])];
    f.render_widget(Paragraph::new(totals), chunks[0]);

    // Position table.
    let mut lines: Vec<Line> = Vec::new();
    if snapshot.positions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No open positions. Press 2 to start trading.",
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "  {:<6} {:>12} {:>12} {:>12} {:>14} {:>14}",
                "Sym", "Qty", "Avg Price", "Price", "Value", "P&L"
            ),
            theme::title(),
        )));
        for (i, row) in snapshot.positions.iter().enumerate() {
            let is_cursor = i == app.portfolio_cursor;
            let base = if is_cursor { theme::selected() } else { theme::text() };
            let pnl_style = if is_cursor {
                base
            } else {
                theme::pnl(row.unrealized_pnl)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<6} ", row.symbol), base),
                Span::styled(format!("{:>11.4} ", row.quantity), base),
                Span::styled(format!("{:>11.2} ", row.average_buy_price), base),
                Span::styled(format!("{:>11.2} ", row.current_price), base),
                Span::styled(format!("{:>13.2} ", row.market_value), base),
                Span::styled(
                    format!("{:>+8.2} ({:+.2}%)", row.unrealized_pnl, row.unrealized_pnl_percent),
                    pnl_style,
                ),
            ]));
        }
    }
    f.render_widget(Paragraph::new(lines), chunks[1]);

    // Recent trades.
    let mut history: Vec<Line> = Vec::new();
    history.push(Line::from(Span::styled("  Recent trades", theme::title())));
    for entry in session.ledger.entries().iter().rev().take(4) {
        history.push(Line::from(vec![
            Span::styled(
                format!("  {} ", entry.executed_at.format("%Y-%m-%d %H:%M")),
                theme::muted(),
            ),
            Span::styled(
                format!("{:<4} ", entry.side.label()),
                theme::side(entry.side == papertrade_core::domain::OrderSide::Buy),
            ),
            Span::styled(
                format!(
                    "{} {} @ ${:.2} (${:.2})",
                    entry.quantity, entry.symbol, entry.execution_price, entry.total_value
                ),
                theme::secondary(),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(history), chunks[2]);
}
