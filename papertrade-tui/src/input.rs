//! Keyboard input dispatch — login form first, then global keys, then
//! screen-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, LoginField, Screen, TradeField};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Before login, the login form consumes everything.
    if app.session.is_none() {
        handle_login_key(app, key);
        return;
    }

    // 2. Text fields on the trading screen need raw characters, so they
    // take precedence over global shortcuts.
    if app.screen == Screen::Trading && app.trade.focus != TradeField::AssetList {
        handle_trade_input_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('L') => {
            app.logout();
            return;
        }
        KeyCode::Char('1') => { app.screen = Screen::Dashboard; return; }
        KeyCode::Char('2') => { app.screen = Screen::Trading; return; }
        KeyCode::Char('3') => { app.screen = Screen::Portfolio; return; }
        KeyCode::Char('4') => { app.screen = Screen::News; return; }
        KeyCode::Char('5') => { app.screen = Screen::Reports; return; }
        KeyCode::Char('6') | KeyCode::Char('?') => { app.screen = Screen::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.screen = app.screen.prev();
            } else {
                app.screen = app.screen.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.screen = app.screen.prev();
            return;
        }
        _ => {}
    }

    // 4. Screen-specific keys.
    match app.screen {
        Screen::Dashboard => {}
        Screen::Trading => handle_trading_key(app, key),
        Screen::Portfolio => handle_portfolio_key(app, key),
        Screen::News => handle_news_key(app, key),
        Screen::Reports => {}
        Screen::Help => {}
    }
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Tab | KeyCode::Down => app.login.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.login.focus_prev(),
        KeyCode::Enter => app.submit_login(),
        // Ctrl-R flips between sign-in and create-account.
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.toggle_mode();
        }
        KeyCode::Backspace => {
            app.login.field_mut().pop();
        }
        KeyCode::Char(c) => {
            // The 2FA field only takes digits.
            if app.login.focus == LoginField::TwoFactorCode && !c.is_ascii_digit() {
                return;
            }
            app.login.field_mut().push(c);
        }
        _ => {}
    }
}

/// Keys while a trading text field (quantity or note) has focus.
fn handle_trade_input_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.trade.focus = TradeField::AssetList;
        }
        KeyCode::Tab => {
            app.trade.focus = match app.trade.focus {
                TradeField::Quantity => TradeField::Note,
                _ => TradeField::AssetList,
            };
        }
        KeyCode::Enter => {
            app.submit_trade();
            app.trade.focus = TradeField::AssetList;
        }
        KeyCode::Backspace => {
            match app.trade.focus {
                TradeField::Quantity => app.trade.quantity.pop(),
                TradeField::Note => app.trade.note.pop(),
                TradeField::AssetList => None,
            };
        }
        KeyCode::Char(c) => match app.trade.focus {
            TradeField::Quantity => {
                if c.is_ascii_digit() || c == '.' {
                    app.trade.quantity.push(c);
                }
            }
            TradeField::Note => app.trade.note.push(c),
            TradeField::AssetList => {}
        },
        _ => {}
    }
}

fn handle_trading_key(app: &mut AppState, key: KeyEvent) {
    let Some(session) = &app.session else { return };
    let asset_count = session.feed.assets().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.trade.asset_cursor + 1 < asset_count {
                app.trade.asset_cursor += 1;
                app.refresh_chart();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.trade.asset_cursor > 0 {
                app.trade.asset_cursor -= 1;
                app.refresh_chart();
            }
        }
        KeyCode::Char('b') => {
            app.trade.side = papertrade_core::domain::OrderSide::Buy;
            app.trade.focus = TradeField::Quantity;
        }
        KeyCode::Char('s') => {
            app.trade.side = papertrade_core::domain::OrderSide::Sell;
            app.trade.focus = TradeField::Quantity;
        }
        KeyCode::Char('t') => app.trade.toggle_side(),
        KeyCode::Enter => {
            app.trade.focus = TradeField::Quantity;
        }
        _ => {}
    }
}

fn handle_portfolio_key(app: &mut AppState, key: KeyEvent) {
    let Some(session) = &app.session else { return };
    let row_count = session.ledger.positions().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.portfolio_cursor + 1 < row_count {
                app.portfolio_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.portfolio_cursor = app.portfolio_cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_news_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.news_cursor + 1 < app.news.len() {
                app.news_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.news_cursor = app.news_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.news_expanded = !app.news_expanded;
        }
        KeyCode::Esc => {
            app.news_expanded = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoginMode;
    use papertrade_core::config::SimConfig;
    use papertrade_core::domain::OrderSide;
    use papertrade_core::session::DEMO_TWO_FACTOR_CODE;
    use std::path::PathBuf;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(
            SimConfig {
                seed: Some(7),
                ..SimConfig::default()
            },
            PathBuf::from("/tmp/papertrade-input-test.json"),
            None,
            None,
        )
    }

    fn logged_in() -> AppState {
        let mut app = app();
        for c in "trader@example.com".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Tab));
        for c in "hunter22".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Tab));
        for c in DEMO_TWO_FACTOR_CODE.chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.session.is_some());
        app
    }

    #[test]
    fn typed_login_succeeds() {
        let app = logged_in();
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn two_factor_field_rejects_letters() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.login.focus, LoginField::TwoFactorCode);
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.login.two_factor_code, "1");
    }

    #[test]
    fn ctrl_r_toggles_register_mode() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.login.mode, LoginMode::Register);
        assert_eq!(app.login.focus, LoginField::Name);
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = logged_in();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.screen, Screen::Portfolio);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.screen, Screen::News);
    }

    #[test]
    fn quantity_field_accepts_only_numeric() {
        let mut app = logged_in();
        app.screen = Screen::Trading;
        handle_key(&mut app, press(KeyCode::Char('b')));
        assert_eq!(app.trade.side, OrderSide::Buy);
        assert_eq!(app.trade.focus, TradeField::Quantity);

        for c in "1a.5x".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.trade.quantity, "1.5");
    }

    #[test]
    fn enter_in_quantity_submits_order() {
        let mut app = logged_in();
        app.screen = Screen::Trading;
        handle_key(&mut app, press(KeyCode::Char('b')));
        handle_key(&mut app, press(KeyCode::Char('2')));
        let entries_before = app.session.as_ref().unwrap().ledger.entries().len();
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(
            app.session.as_ref().unwrap().ledger.entries().len(),
            entries_before + 1
        );
        assert_eq!(app.trade.focus, TradeField::AssetList);
    }

    #[test]
    fn asset_cursor_stays_in_bounds() {
        let mut app = logged_in();
        app.screen = Screen::Trading;
        let count = app.session.as_ref().unwrap().feed.assets().len();
        for _ in 0..count + 5 {
            handle_key(&mut app, press(KeyCode::Char('j')));
        }
        assert_eq!(app.trade.asset_cursor, count - 1);
        for _ in 0..count + 5 {
            handle_key(&mut app, press(KeyCode::Char('k')));
        }
        assert_eq!(app.trade.asset_cursor, 0);
    }

    #[test]
    fn capital_l_logs_out() {
        let mut app = logged_in();
        handle_key(&mut app, press(KeyCode::Char('L')));
        assert!(app.session.is_none());
    }
}
