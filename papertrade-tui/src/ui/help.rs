//! Help screen — key bindings and session info.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let bindings: &[(&str, &str)] = &[
        ("1-6 / Tab", "switch screens"),
        ("j / k, arrows", "move cursor in lists"),
        ("b / s", "open order form to buy / sell"),
        ("t", "toggle order side"),
        ("Enter", "submit form / expand article"),
        ("Esc", "leave a text field"),
        ("L", "log out"),
        ("q", "quit"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("  Key bindings", theme::title())),
        Line::from(""),
    ];
    for (keys, what) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<16}"), theme::accent()),
            Span::styled(*what, theme::secondary()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Session", theme::title())));
    lines.push(Line::from(Span::styled(
        format!(
            "  Prices tick every {}s. All trading is simulated; nothing leaves this terminal.",
            app.config.tick_interval_secs
        ),
        theme::secondary(),
    )));
    if let Some(seed) = app.config.seed {
        lines.push(Line::from(Span::styled(
            format!("  Price feed seed: {seed} (reproducible run)"),
            theme::muted(),
        )));
    }
    if let Some(log_path) = &app.log_path {
        lines.push(Line::from(Span::styled(
            format!("  Log file: {}", log_path.display()),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
