//! Trading screen — asset picker, price chart, and the order form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use papertrade_core::domain::OrderSide;
use papertrade_core::feed::PricePoint;

use crate::app::{AppState, TradeField};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(session) = &app.session else { return };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(area);

    render_asset_list(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(columns[1]);

    render_chart(f, right[0], &app.chart_series, &app.chart_symbol);
    render_order_form(f, right[1], app, session);
}

fn render_asset_list(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(session) = &app.session else { return };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {:<6} {:>12} {:>8}", "Sym", "Price", "Chg%"),
        theme::title(),
    )));
    for (i, asset) in session.feed.assets().iter().enumerate() {
        let is_cursor = i == app.trade.asset_cursor;
        let row_style = if is_cursor { theme::selected() } else { theme::text() };
        let pnl_style = if is_cursor {
            row_style
        } else {
            theme::pnl(asset.price_change_percent)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<6} ", asset.symbol), row_style),
            Span::styled(format!("{:>11.2} ", asset.current_price), row_style),
            Span::styled(format!("{:>+7.2}%", asset.price_change_percent), pnl_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [j/k] move [b]uy [s]ell [t]oggle",
        theme::muted(),
    )));
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, series: &[PricePoint], symbol: &str) {
    if series.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No price history for this asset.",
                theme::muted(),
            ))),
            area,
        );
        return;
    }

    let data: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();

    let min_y = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max_y = data.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs() * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = data.len().saturating_sub(1) as f64;

    let dataset = Dataset::default()
        .name(symbol)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Days", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(format!("-{}", data.len().saturating_sub(1)), theme::muted()),
                    Span::styled("now", theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_order_form(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    session: &papertrade_core::session::Session,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::screen_border(app.trade.focus != TradeField::AssetList))
        .title(" Order ")
        .title_style(theme::title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let asset = session.feed.assets().get(app.trade.asset_cursor);
    let held = asset
        .and_then(|a| session.ledger.position(a.id))
        .map_or(0.0, |p| p.quantity);

    let estimate = asset
        .and_then(|a| app.trade.quantity.trim().parse::<f64>().ok().map(|q| q * a.current_price));

    let quantity_focus = app.trade.focus == TradeField::Quantity;
    let note_focus = app.trade.focus == TradeField::Note;

    let lines = vec![
        Line::from(vec![
            Span::styled(" Side: ", theme::secondary()),
            Span::styled(
                app.trade.side.label(),
                theme::side(app.trade.side == OrderSide::Buy),
            ),
            Span::styled(
                format!(
                    "   {}  (held: {})",
                    asset.map_or("-", |a| a.symbol.as_str()),
                    held
                ),
                theme::muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                if quantity_focus { " > Quantity: " } else { "   Quantity: " },
                if quantity_focus { theme::accent() } else { theme::secondary() },
            ),
            Span::styled(
                format!("{}{}", app.trade.quantity, if quantity_focus { "_" } else { "" }),
                theme::text(),
            ),
            match estimate {
                Some(v) => Span::styled(format!("   ≈ ${v:.2}"), theme::muted()),
                None => Span::raw(""),
            },
        ]),
        Line::from(vec![
            Span::styled(
                if note_focus { " > Note: " } else { "   Note: " },
                if note_focus { theme::accent() } else { theme::secondary() },
            ),
            Span::styled(
                format!("{}{}", app.trade.note, if note_focus { "_" } else { "" }),
                theme::text(),
            ),
        ]),
        Line::from(Span::styled(
            " [Enter] submit  [Tab] next field  [Esc] back to list",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
