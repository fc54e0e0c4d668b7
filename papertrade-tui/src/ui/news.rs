//! News screen — headline list with an expandable article body.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.news_expanded {
        render_article(f, area, app);
    } else {
        render_list(f, area, app);
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, article) in app.news.iter().enumerate() {
        let is_cursor = i == app.news_cursor;
        let title_style = if is_cursor { theme::selected() } else { theme::text() };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", article.title), title_style),
            Span::styled(
                format!("[{}]", article.category.label()),
                theme::warning(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "   {} — {}",
                    article.source,
                    article.published_at.format("%Y-%m-%d %H:%M")
                ),
                theme::muted(),
            ),
            if article.related_symbols.is_empty() {
                Span::raw("")
            } else {
                Span::styled(
                    format!("  {}", article.related_symbols.join(" ")),
                    theme::accent(),
                )
            },
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", article.summary),
            theme::secondary(),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " [j/k] move  [Enter] read",
        theme::muted(),
    )));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_article(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(article) = app.news.get(app.news_cursor) else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(format!(" {}", article.title), theme::title())),
        Line::from(Span::styled(
            format!(
                " {} — {} — {}",
                article.source,
                article.published_at.format("%Y-%m-%d %H:%M"),
                article.url
            ),
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", article.body), theme::text())),
        Line::from(""),
        Line::from(Span::styled(" [Enter/Esc] back", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
