//! User and preference types for the single-session model.
//!
//! There is no registration or credential check anywhere in the prototype:
//! a [`User`] is minted at login from nothing but a username, and at most
//! one user is current at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Preferences ─────────────────────────────────────────────────────────────

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

/// Per-user display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
  #[serde(default)]
  pub theme:         Theme,
  #[serde(default = "default_notifications")]
  pub notifications: bool,
}

fn default_notifications() -> bool { true }

impl Default for Preferences {
  fn default() -> Self {
    Self { theme: Theme::Light, notifications: true }
  }
}

impl Preferences {
  /// Shallow merge: keys present in `update` overwrite, omitted keys keep
  /// their previous value.
  pub fn merged(mut self, update: PreferencesUpdate) -> Self {
    if let Some(theme) = update.theme {
      self.theme = theme;
    }
    if let Some(notifications) = update.notifications {
      self.notifications = notifications;
    }
    self
  }
}

/// Partial input to [`SessionStore::update_preferences`].
///
/// [`SessionStore::update_preferences`]: crate::session::SessionStore::update_preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PreferencesUpdate {
  pub theme:         Option<Theme>,
  pub notifications: Option<bool>,
}

// ─── User ────────────────────────────────────────────────────────────────────

/// The current (and only) authenticated user.
///
/// Created at login with `created_at == last_login_at`; `last_login_at` is
/// touched when a persisted session is restored at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id:            Uuid,
  pub username:      String,
  pub email:         Option<String>,
  pub created_at:    DateTime<Utc>,
  pub last_login_at: DateTime<Utc>,
  #[serde(default)]
  pub preferences:   Preferences,
}

impl User {
  /// Mint a fresh user at login time.
  pub(crate) fn new(username: String, email: Option<String>) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      username,
      email,
      created_at: now,
      last_login_at: now,
      preferences: Preferences::default(),
    }
  }
}
