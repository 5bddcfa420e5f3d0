//! Username availability collaborators and local validation
//!
//! The editor never talks to a network itself; it consumes two narrow
//! collaborator traits. Availability checks are debounced with a
//! generation token (see [`crate::state::UsernameState`]): the handler bumps
//! the token on every keystroke and discards results carrying an older one,
//! so "last request wins" is structural rather than a timing accident.

use pagegrid_core::prelude::*;

/// Remote username directory.
///
/// `exists` returns whether the candidate is already claimed. Transport
/// failures bubble up as errors; the handler treats them as "unavailable"
/// (fail-closed) and lets the user retry by typing again.
#[trait_variant::make(UsernameDirectory: Send)]
pub trait LocalUsernameDirectory {
    async fn exists(&self, username: &str) -> Result<bool>;
}

/// Read-only view of the authenticated session.
///
/// The editor does not initiate authentication; it only reads the result to
/// decide whether to proceed and what to show in the header.
#[cfg_attr(test, mockall::automock)]
pub trait AccountSession {
    /// The signed-in user's display name.
    fn display_name(&self) -> String;

    /// Permanent username, once one has been assigned.
    fn assigned_username(&self) -> Option<String>;
}

/// In-memory directory backed by a claimed-name list.
///
/// Stands in for the remote directory when the editor runs offline; route
/// names and already-claimed handles live here.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    claimed: Vec<String>,
}

impl StaticDirectory {
    /// Directory pre-seeded with names that can never be claimed because
    /// they collide with page routes.
    pub fn with_reserved_names() -> Self {
        Self {
            claimed: ["admin", "api", "app", "login", "signup", "settings", "root"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn claim(&mut self, username: impl Into<String>) {
        self.claimed.push(username.into());
    }
}

impl UsernameDirectory for StaticDirectory {
    async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.claimed.iter().any(|c| c == username))
    }
}

/// Offline session: a fixed display name and, optionally, an already
/// assigned username.
///
/// Stands in for the remote session the same way [`StaticDirectory`] stands
/// in for the remote directory. The display name defaults to the shell's
/// `USER` when available.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    display_name: String,
    username: Option<String>,
}

impl StaticSession {
    pub fn new(display_name: impl Into<String>, username: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            username,
        }
    }

    /// Session named after the local shell user.
    pub fn from_environment() -> Self {
        let name = std::env::var("USER").unwrap_or_else(|_| "guest".to_string());
        Self::new(name, None)
    }
}

impl AccountSession for StaticSession {
    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn assigned_username(&self) -> Option<String> {
        self.username.clone()
    }
}

/// Local username syntax rule: lowercase alphanumeric plus `-`/`_`,
/// 3 to 30 characters. Invalid input never schedules a directory call.
pub fn is_valid_username(candidate: &str) -> bool {
    static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        regex::Regex::new(r"^[a-z0-9_-]{3,30}$").expect("username pattern is valid")
    });
    re.is_match(candidate)
}
