//! Application state — single-owner, main-thread only.
//!
//! Everything the UI renders lives here: the login form before a session
//! exists, and the session plus per-screen cursors afterwards. The price
//! feed ticks on wall-clock time inside `on_tick`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use papertrade_core::config::SimConfig;
use papertrade_core::domain::{NewsArticle, OrderSide, OrderTicket};
use papertrade_core::feed::PricePoint;
use papertrade_core::fixtures;
use papertrade_core::session::{self, Session};

/// Which screen is active once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Dashboard,
    Trading,
    Portfolio,
    News,
    Reports,
    Help,
}

impl Screen {
    pub fn index(self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::Trading => 1,
            Screen::Portfolio => 2,
            Screen::News => 3,
            Screen::Reports => 4,
            Screen::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Screen::Dashboard),
            1 => Some(Screen::Trading),
            2 => Some(Screen::Portfolio),
            3 => Some(Screen::News),
            4 => Some(Screen::Reports),
            5 => Some(Screen::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Trading => "Trading",
            Screen::Portfolio => "Portfolio",
            Screen::News => "News",
            Screen::Reports => "Reports",
            Screen::Help => "Help",
        }
    }

    pub fn next(self) -> Screen {
        Screen::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Screen {
        Screen::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which login form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Email,
    Password,
    TwoFactorCode,
}

/// Sign-in vs. create-account mode on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    SignIn,
    Register,
}

/// Login screen form state.
#[derive(Debug)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub two_factor_code: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(remembered_email: Option<String>) -> Self {
        Self {
            mode: LoginMode::SignIn,
            name: String::new(),
            email: remembered_email.unwrap_or_default(),
            password: String::new(),
            two_factor_code: String::new(),
            focus: LoginField::Email,
            error: None,
        }
    }

    /// Fields visible in the current mode, in tab order.
    pub fn fields(&self) -> &'static [LoginField] {
        match self.mode {
            LoginMode::SignIn => &[
                LoginField::Email,
                LoginField::Password,
                LoginField::TwoFactorCode,
            ],
            LoginMode::Register => &[LoginField::Name, LoginField::Email, LoginField::Password],
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = fields[(at + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = fields[(at + fields.len() - 1) % fields.len()];
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Name => &mut self.name,
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
            LoginField::TwoFactorCode => &mut self.two_factor_code,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        };
        self.focus = self.fields()[0];
        self.error = None;
    }
}

/// Which trade form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeField {
    AssetList,
    Quantity,
    Note,
}

/// Trading screen form state.
#[derive(Debug)]
pub struct TradeForm {
    pub asset_cursor: usize,
    pub side: OrderSide,
    pub quantity: String,
    pub note: String,
    pub focus: TradeField,
}

impl TradeForm {
    pub fn new() -> Self {
        Self {
            asset_cursor: 0,
            side: OrderSide::Buy,
            quantity: String::new(),
            note: String::new(),
            focus: TradeField::AssetList,
        }
    }

    pub fn toggle_side(&mut self) {
        self.side = match self.side {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        };
    }
}

pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub login: LoginForm,
    pub session: Option<Session>,
    pub news: Vec<NewsArticle>,
    pub trade: TradeForm,
    pub news_cursor: usize,
    pub news_expanded: bool,
    pub portfolio_cursor: usize,
    pub status_message: Option<(String, StatusLevel)>,
    /// Cached history for the asset under the trading cursor. Refreshed on
    /// tick and on cursor moves so rendering stays read-only.
    pub chart_series: Vec<PricePoint>,
    pub chart_symbol: String,
    pub config: SimConfig,
    pub state_path: PathBuf,
    pub log_path: Option<PathBuf>,
    last_tick: Instant,
}

impl AppState {
    pub fn new(
        config: SimConfig,
        state_path: PathBuf,
        remembered_email: Option<String>,
        log_path: Option<PathBuf>,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            login: LoginForm::new(remembered_email),
            session: None,
            news: fixtures::seed_news(),
            trade: TradeForm::new(),
            news_cursor: 0,
            news_expanded: false,
            portfolio_cursor: 0,
            status_message: None,
            chart_series: Vec::new(),
            chart_symbol: String::new(),
            config,
            state_path,
            log_path,
            last_tick: Instant::now(),
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Advance the price feed if the tick interval has elapsed.
    pub fn on_tick(&mut self) {
        let interval = Duration::from_secs(self.config.tick_interval_secs.max(1));
        if self.last_tick.elapsed() < interval {
            return;
        }
        self.last_tick = Instant::now();
        if let Some(session) = &mut self.session {
            let moved = session.feed.tick();
            tracing::debug!(assets = moved.len(), "price tick");
        }
        self.refresh_chart();
    }

    /// Rebuild the cached price chart for the asset under the cursor.
    pub fn refresh_chart(&mut self) {
        let days = self.config.history_days;
        let cursor = self.trade.asset_cursor;
        if let Some(session) = &mut self.session {
            let Some(asset) = session.feed.assets().get(cursor) else {
                return;
            };
            let id = asset.id;
            self.chart_symbol = asset.symbol.clone();
            self.chart_series = session.feed.price_history(id, days).unwrap_or_default();
        }
    }

    /// Submit the login form. On success the session is created and the
    /// app lands on the dashboard.
    pub fn submit_login(&mut self) {
        let result = match self.login.mode {
            LoginMode::SignIn => session::login(
                &self.login.email,
                &self.login.password,
                &self.login.two_factor_code,
            ),
            LoginMode::Register => session::register(
                &self.login.name,
                &self.login.email,
                &self.login.password,
            ),
        };
        match result {
            Ok(user) => {
                let greeting = format!("Welcome, {}", user.name);
                tracing::info!(email = %user.email, "session started");
                self.session = Some(Session::start(user, &self.config));
                self.login.error = None;
                self.login.password.clear();
                self.login.two_factor_code.clear();
                self.screen = Screen::Dashboard;
                self.refresh_chart();
                self.set_status(greeting);
            }
            Err(e) => {
                self.login.error = Some(e.to_string());
            }
        }
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.user.email, "session ended");
        }
        self.trade = TradeForm::new();
        self.portfolio_cursor = 0;
        self.set_status("Logged out");
    }

    /// Submit the trade form against the ledger.
    pub fn submit_trade(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        let Ok(quantity) = self.trade.quantity.trim().parse::<f64>() else {
            self.set_error("Quantity must be a number");
            return;
        };
        let Some(asset) = session.feed.assets().get(self.trade.asset_cursor) else {
            return;
        };
        let asset_id = asset.id;
        let symbol = asset.symbol.clone();

        let mut ticket = OrderTicket::new(asset_id, self.trade.side, quantity);
        let note = self.trade.note.trim();
        if !note.is_empty() {
            ticket = ticket.with_note(note);
        }

        match session
            .ledger
            .place_order(&ticket, &session.feed, Utc::now())
        {
            Ok(entry) => {
                tracing::info!(
                    %symbol,
                    side = %entry.side,
                    quantity = entry.quantity,
                    price = entry.execution_price,
                    "order executed"
                );
                self.trade.quantity.clear();
                self.trade.note.clear();
                self.set_status(format!(
                    "{} {} {} @ ${:.2} (${:.2})",
                    entry.side, entry.quantity, symbol, entry.execution_price, entry.total_value
                ));
            }
            Err(e) => {
                tracing::warn!(%symbol, error = %e, "order rejected");
                self.set_error(format!("Order rejected: {e}"));
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(
            SimConfig {
                seed: Some(7),
                ..SimConfig::default()
            },
            PathBuf::from("/tmp/papertrade-test-state.json"),
            None,
            None,
        )
    }

    fn logged_in() -> AppState {
        let mut app = app();
        app.login.email = "trader@example.com".into();
        app.login.password = "hunter22".into();
        app.login.two_factor_code = session::DEMO_TWO_FACTOR_CODE.into();
        app.submit_login();
        assert!(app.session.is_some());
        app
    }

    #[test]
    fn screen_cycle_wraps() {
        assert_eq!(Screen::Help.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.prev(), Screen::Help);
    }

    #[test]
    fn login_failure_sets_error_and_no_session() {
        let mut app = app();
        app.login.email = "trader@example.com".into();
        app.login.password = "hunter22".into();
        app.login.two_factor_code = "000000".into();
        app.submit_login();
        assert!(app.session.is_none());
        assert!(app.login.error.is_some());
    }

    #[test]
    fn login_clears_secrets() {
        let app = logged_in();
        assert!(app.login.password.is_empty());
        assert!(app.login.two_factor_code.is_empty());
    }

    #[test]
    fn trade_submission_executes_against_ledger() {
        let mut app = logged_in();
        let cash_before = app.session.as_ref().unwrap().ledger.cash_balance();
        app.trade.asset_cursor = 0; // AAPL
        app.trade.quantity = "2".into();
        app.submit_trade();

        let session = app.session.as_ref().unwrap();
        assert!(session.ledger.cash_balance() < cash_before);
        assert!(matches!(
            app.status_message,
            Some((_, StatusLevel::Info))
        ));
    }

    #[test]
    fn bad_quantity_is_reported_not_executed() {
        let mut app = logged_in();
        let entries_before = app.session.as_ref().unwrap().ledger.entries().len();
        app.trade.quantity = "lots".into();
        app.submit_trade();
        assert_eq!(
            app.session.as_ref().unwrap().ledger.entries().len(),
            entries_before
        );
        assert!(matches!(
            app.status_message,
            Some((_, StatusLevel::Error))
        ));
    }

    #[test]
    fn rejected_order_surfaces_ledger_error() {
        let mut app = logged_in();
        app.trade.quantity = "999999".into();
        app.submit_trade();
        assert!(matches!(
            app.status_message,
            Some((ref m, StatusLevel::Error)) if m.contains("rejected")
        ));
    }

    #[test]
    fn logout_drops_session_and_resets_forms() {
        let mut app = logged_in();
        app.trade.quantity = "5".into();
        app.logout();
        assert!(app.session.is_none());
        assert!(app.trade.quantity.is_empty());
    }

    #[test]
    fn login_form_tab_order_differs_by_mode() {
        let mut form = LoginForm::new(None);
        assert_eq!(form.focus, LoginField::Email);
        form.focus_next();
        assert_eq!(form.focus, LoginField::Password);
        form.focus_next();
        assert_eq!(form.focus, LoginField::TwoFactorCode);
        form.focus_next();
        assert_eq!(form.focus, LoginField::Email);

        form.toggle_mode();
        assert_eq!(form.focus, LoginField::Name);
        form.focus_prev();
        assert_eq!(form.focus, LoginField::Password);
    }
}
