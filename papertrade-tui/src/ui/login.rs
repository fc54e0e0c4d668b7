//! Login screen — sign-in / create-account form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{AppState, LoginField, LoginForm, LoginMode};
use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let dialog = centered_rect(50, 60, area);
    f.render_widget(Clear, dialog);

    let title = match app.login.mode {
        LoginMode::SignIn => " PaperTrade — Sign In ",
        LoginMode::Register => " PaperTrade — Create Account ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(title)
        .title_style(theme::title());
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for &field in app.login.fields() {
        lines.push(field_line(&app.login, field));
        lines.push(Line::from(""));
    }

    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            theme::negative(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  [Tab] next field  [Enter] submit  [Ctrl-R] switch mode  [Esc] quit",
        theme::muted(),
    )));
    if app.login.mode == LoginMode::SignIn {
        lines.push(Line::from(Span::styled(
            "  demo 2FA code: 123456",
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn field_line(form: &LoginForm, field: LoginField) -> Line<'_> {
    let (label, value): (&str, String) = match field {
        LoginField::Name => ("Name", form.name.clone()),
        LoginField::Email => ("Email", form.email.clone()),
        // Secrets render masked.
        LoginField::Password => ("Password", "*".repeat(form.password.chars().count())),
        LoginField::TwoFactorCode => ("2FA Code", form.two_factor_code.clone()),
    };

    let focused = form.focus == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused { theme::accent() } else { theme::secondary() };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{marker}{label:>9}: "), label_style),
        Span::styled(format!("{value}{cursor}"), theme::text()),
    ])
}
