//! [`SessionStore`] — owner of the single current-user record.
//!
//! The store is an explicitly-owned, dependency-injected instance (never an
//! ambient global): the journal and the presentation layer are handed a
//! shared reference by the [`Storefront`](crate::app::Storefront) facade.
//! Cross-component rules (a login or logout also resetting the journal)
//! live in the facade, not here.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::{
  error::{Error, Result},
  slot::{SlotStore, USER_SLOT},
  user::{PreferencesUpdate, User},
};

/// Holds the current authenticated user (or none) and persists it through
/// the [`SlotStore`] under [`USER_SLOT`].
///
/// Persistence is degraded-graceful per the storefront contract: a failed
/// slot write surfaces as [`Error::Persistence`] but the in-memory session
/// stays valid for the rest of the process lifetime.
pub struct SessionStore<S> {
  slots: Arc<S>,
  user:  Mutex<Option<User>>,
}

impl<S: SlotStore> SessionStore<S> {
  pub fn new(slots: Arc<S>) -> Self {
    Self { slots, user: Mutex::new(None) }
  }

  fn state(&self) -> MutexGuard<'_, Option<User>> {
    self.user.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// The current user, if any. Pure read.
  pub fn current_user(&self) -> Option<User> {
    self.state().clone()
  }

  pub fn is_active(&self) -> bool {
    self.state().is_some()
  }

  /// Start a session for `username`, replacing any existing one.
  ///
  /// Any non-empty username succeeds — the login flow is a mock with no
  /// credential check. Whitespace-only usernames are rejected with
  /// [`Error::EmptyUsername`] before any state is touched.
  pub async fn login(&self, username: &str, email: Option<&str>) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
      return Err(Error::EmptyUsername);
    }
    let email = email
      .map(str::trim)
      .filter(|e| !e.is_empty())
      .map(str::to_owned);

    let user = User::new(username.to_owned(), email);
    *self.state() = Some(user.clone());

    self.persist(&user).await?;
    Ok(user)
  }

  /// End the current session. Idempotent: with no session this only
  /// re-removes an already-absent slot.
  pub async fn logout(&self) -> Result<()> {
    *self.state() = None;
    self
      .slots
      .remove(USER_SLOT)
      .await
      .map_err(|e| Error::Persistence(e.to_string()))
  }

  /// Shallow-merge `update` into the current user's preferences and persist
  /// immediately. Requires an active session.
  pub async fn update_preferences(&self, update: PreferencesUpdate) -> Result<User> {
    let user = {
      let mut state = self.state();
      let user = state.as_mut().ok_or(Error::NoActiveSession)?;
      user.preferences = user.preferences.merged(update);
      user.clone()
    };

    self.persist(&user).await?;
    Ok(user)
  }

  /// Load a previously persisted user, if present and well-formed. Invoked
  /// once at process start.
  ///
  /// A malformed slot is treated as absent: it is logged, wiped, and
  /// `Ok(None)` is returned. A well-formed user gets `last_login_at`
  /// touched and re-persisted.
  pub async fn restore(&self) -> Result<Option<User>> {
    let raw = self
      .slots
      .load(USER_SLOT)
      .await
      .map_err(|e| Error::Persistence(e.to_string()))?;
    let Some(raw) = raw else {
      return Ok(None);
    };

    let mut user: User = match serde_json::from_str(&raw) {
      Ok(user) => user,
      Err(parse_err) => {
        let err = Error::MalformedState { slot: USER_SLOT };
        tracing::warn!(%err, %parse_err, "clearing unreadable session slot");
        if let Err(e) = self.slots.remove(USER_SLOT).await {
          tracing::warn!(error = %e, "failed to clear malformed session slot");
        }
        return Ok(None);
      }
    };

    user.last_login_at = Utc::now();
    *self.state() = Some(user.clone());
    self.persist(&user).await?;
    Ok(Some(user))
  }

  async fn persist(&self, user: &User) -> Result<()> {
    let json = serde_json::to_string(user)?;
    self.slots.save(USER_SLOT, &json).await.map_err(|e| {
      tracing::warn!(error = %e, "session write failed; continuing in memory");
      Error::Persistence(e.to_string())
    })
  }
}
