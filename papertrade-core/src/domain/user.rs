use serde::{Deserialize, Serialize};

/// The demo user's fixed starting cash balance.
pub const STARTING_BALANCE: f64 = 10_000.0;

/// The session's user. Demo-grade: there is one user per session and no
/// server-side identity behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
