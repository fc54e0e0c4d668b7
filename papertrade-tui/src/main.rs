//! PaperTrade TUI — a simulated trading floor in the terminal.
//!
//! Screens:
//! 1. Dashboard — account summary and live market ticker
//! 2. Trading — asset picker, price chart, order form
//! 3. Portfolio — per-position valuation and recent trades
//! 4. News — canned market headlines
//! 5. Reports — activity stats and performance chart
//! 6. Help — key bindings

mod app;
mod input;
mod logging;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use papertrade_core::config::SimConfig;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let log_path = logging::init().ok();

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("papertrade");
    let config_path = config_dir.join("config.toml");
    let state_path = config_dir.join("state.json");

    let config = SimConfig::from_file(&config_path)?;
    let persisted = persistence::load(&state_path);

    let mut app = AppState::new(
        config,
        state_path.clone(),
        persisted.remembered_email,
        log_path,
    );
    app.screen = persisted.last_screen;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let remembered_email = match &app.session {
        Some(session) => Some(session.user.email.clone()),
        None if !app.login.email.is_empty() => Some(app.login.email.clone()),
        None => None,
    };
    let persisted = persistence::PersistedState {
        remembered_email,
        last_screen: app.screen,
    };
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Advance the price feed on wall-clock time.
        app.on_tick();

        // 3. Poll for input events (50ms timeout keeps the ticker fresh)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
