//! Bottom status bar — screen hints plus the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Dash 2:Trade 3:Portfolio 4:News 5:Reports 6:Help q:Quit L:Logout",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    if let Some(session) = &app.session {
        spans.push(Span::styled(
            format!("${:.2} ", session.ledger.cash_balance()),
            theme::accent(),
        ));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
