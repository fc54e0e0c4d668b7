//! Top-level UI layout — one screen at a time plus a status bar.

pub mod dashboard;
pub mod help;
pub mod login;
pub mod news;
pub mod portfolio;
pub mod reports;
pub mod status_bar;
pub mod trading;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Screen};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Before login the form owns the whole frame.
    if app.session.is_none() {
        login::render(f, f.area(), app);
        return;
    }

    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_screen(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

/// Draw the active screen with its border.
fn draw_screen(f: &mut Frame, area: Rect, app: &AppState) {
    let screen = app.screen;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::screen_border(true))
        .title(format!(" {} [{}] ", screen.label(), screen.index() + 1))
        .title_style(theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match screen {
        Screen::Dashboard => dashboard::render(f, inner, app),
        Screen::Trading => trading::render(f, inner, app),
        Screen::Portfolio => portfolio::render(f, inner, app),
        Screen::News => news::render(f, inner, app),
        Screen::Reports => reports::render(f, inner, app),
        Screen::Help => help::render(f, inner, app),
    }
}

/// Compute a centered rect for dialogs.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
