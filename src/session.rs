//! Key-value session storage kept in a JSON file, the command-line
//! counterpart of the browser's local storage. The signed-in user lives
//! under the `user` key.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{BilledError, Result};
use crate::models::Session;

pub const USER_KEY: &str = "user";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: Map<String, Value>,
}

impl LocalStorage {
    /// Open the storage file; a missing or corrupt file starts empty.
    pub fn open(path: &Path) -> Self {
        let items = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            items,
        }
    }

    pub fn default_path() -> PathBuf {
        crate::settings::config_dir().join("session.json")
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).and_then(Value::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items
            .insert(key.to_string(), Value::String(value.to_string()));
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }
}

/// The stored user, if any. A value that does not parse counts as signed out.
pub fn current_user(storage: &LocalStorage) -> Option<Session> {
    let raw = storage.get_item(USER_KEY)?;
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed session user");
            None
        }
    }
}

pub fn sign_in(storage: &mut LocalStorage, session: &Session) -> Result<()> {
    if !is_valid_email(&session.email) {
        return Err(BilledError::InvalidEmail(session.email.clone()));
    }
    let json = serde_json::to_string(session)?;
    storage.set_item(USER_KEY, &json)
}

pub fn sign_out(storage: &mut LocalStorage) -> Result<()> {
    storage.remove_item(USER_KEY)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
