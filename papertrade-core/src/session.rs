//! Demo authentication and session assembly.
//!
//! The login flow is a hardcoded stub, faithful to the original demo: any
//! email/password pair is accepted as long as the fields are present and
//! the fixed two-factor code matches. No credential is ever verified
//! against anything, and none of this is security.

use thiserror::Error;

use crate::config::SimConfig;
use crate::domain::User;
use crate::feed::SimulatedFeed;
use crate::fixtures;
use crate::ledger::PositionLedger;

/// The only accepted two-factor code.
pub const DEMO_TWO_FACTOR_CODE: &str = "123456";

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid two-factor authentication code")]
    InvalidTwoFactorCode,

    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
}

/// Validate the login form. The user's display name is the local part of
/// the email address.
pub fn login(email: &str, password: &str, two_factor_code: &str) -> Result<User, SessionError> {
    if email.is_empty() || password.is_empty() || two_factor_code.is_empty() {
        return Err(SessionError::MissingFields);
    }
    if two_factor_code != DEMO_TWO_FACTOR_CODE {
        return Err(SessionError::InvalidTwoFactorCode);
    }
    let name = email.split('@').next().unwrap_or(email);
    Ok(User::new(name, email))
}

/// Validate the registration form.
pub fn register(name: &str, email: &str, password: &str) -> Result<User, SessionError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(SessionError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SessionError::PasswordTooShort);
    }
    Ok(User::new(name, email))
}

/// One user's in-memory trading session: the ledger, the feed, and the
/// canned news. Created at login, dropped at logout — nothing outlives it.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub ledger: PositionLedger,
    pub feed: SimulatedFeed,
}

impl Session {
    /// Start a session with the demo catalog and the seed portfolio.
    pub fn start(user: User, config: &SimConfig) -> Self {
        let mut feed = SimulatedFeed::new(fixtures::asset_catalog(), config.seed);
        let ledger = fixtures::seeded_ledger(&mut feed, config.starting_balance);
        Self { user, ledger, feed }
    }

    /// Start a session with an empty portfolio (used by scripted runs).
    pub fn start_empty(user: User, config: &SimConfig) -> Self {
        let feed = SimulatedFeed::new(fixtures::asset_catalog(), config.seed);
        let ledger = PositionLedger::new(config.starting_balance);
        Self { user, ledger, feed }
    }
}
