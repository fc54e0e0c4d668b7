//! App state persistence — JSON save/load across restarts.
//!
//! Only cosmetic state persists: the remembered login email and the last
//! active screen. The ledger itself is session-scoped by design.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::Screen;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub remembered_email: Option<String>,
    pub last_screen: Screen,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            remembered_email: None,
            last_screen: Screen::Dashboard,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("papertrade_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            remembered_email: Some("trader@example.com".into()),
            last_screen: Screen::Portfolio,
        };
        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.remembered_email.as_deref(), Some("trader@example.com"));
        assert_eq!(loaded.last_screen, Screen::Portfolio);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.remembered_email.is_none());
        assert_eq!(loaded.last_screen, Screen::Dashboard);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("papertrade_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.remembered_email.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
