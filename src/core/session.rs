//! Session state
//!
//! The session is the single piece of mutable application state: the
//! currently logged-in user, mirrored to a JSON file so it survives
//! process restarts. There is no token and no expiry; this is a
//! client-side marker, not authentication.

use crate::core::models::User;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed session store
///
/// The store is an explicit object handed to the router and views rather
/// than a process-wide global, so tests can construct isolated sessions
/// against temporary files.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Backing file holding the JSON-encoded user
    path: PathBuf,
    /// In-memory current user; authoritative for this process
    current: Option<User>,
}

impl SessionStore {
    /// Open the session backed by the given file
    ///
    /// Absent or malformed session data yields a logged-out store; a
    /// broken session file is never surfaced to the caller as an error.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let current = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok());

        Self { path, current }
    }

    /// Create a logged-out store backed by the given file
    #[must_use]
    pub const fn empty(path: PathBuf) -> Self {
        Self {
            path,
            current: None,
        }
    }

    /// The currently logged-in user, if any
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log a user in and persist the session
    ///
    /// The in-memory user is set unconditionally; it stays authoritative
    /// for this process even when the write fails.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be written.
    pub fn login(&mut self, user: User) -> Result<(), String> {
        self.current = Some(user);

        let encoded = serde_json::to_string_pretty(&self.current)
            .map_err(|e| format!("Failed to encode session: {e}"))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create session directory: {e}"))?;
        }
        fs::write(&self.path, encoded)
            .map_err(|e| format!("Failed to write session file {}: {e}", self.path.display()))
    }

    /// Log out and clear the persisted session
    ///
    /// A missing session file is not an error; the call is idempotent.
    ///
    /// # Errors
    /// Returns an error if the session file exists but cannot be removed.
    pub fn logout(&mut self) -> Result<(), String> {
        self.current = None;

        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                format!("Failed to remove session file {}: {e}", self.path.display())
            })?;
        }
        Ok(())
    }
}
