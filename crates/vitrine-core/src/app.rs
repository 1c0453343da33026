//! [`Storefront`] — the facade presentation adapters consume.
//!
//! Composes one [`SessionStore`] and one [`EventJournal`] over a shared
//! slot store and a sink, and owns the rules that span both components:
//! a logout empties the journal, and a new login starts a fresh one.

use std::sync::Arc;

use crate::{
  analytics::Summary,
  error::{Error, Result},
  event::{Event, NewEvent},
  journal::EventJournal,
  session::SessionStore,
  sink::EventSink,
  slot::SlotStore,
  user::{PreferencesUpdate, User},
};

pub struct Storefront<S, K> {
  session: Arc<SessionStore<S>>,
  journal: EventJournal<S, K>,
}

impl<S, K> Storefront<S, K>
where
  S: SlotStore,
  K: EventSink + 'static,
{
  pub fn new(slots: Arc<S>, sink: Arc<K>) -> Self {
    let session = Arc::new(SessionStore::new(Arc::clone(&slots)));
    let journal = EventJournal::new(slots, Arc::clone(&session), sink);
    Self { session, journal }
  }

  /// Restore persisted session and journal. Call once at process start.
  ///
  /// With no restorable session, any leftover journal slot belongs to
  /// nobody and is cleared.
  pub async fn restore(&self) -> Result<Option<User>> {
    let user = self.session.restore().await?;
    match user {
      Some(_) => self.journal.restore().await?,
      None => self.journal.clear().await?,
    }
    Ok(user)
  }

  // ── Session ───────────────────────────────────────────────────────────────

  /// Log in, replacing any existing session. The journal of the previous
  /// session is cleared: its events carry the previous user's id and would
  /// be stranded under the new one.
  pub async fn login(&self, username: &str, email: Option<&str>) -> Result<User> {
    let outcome = self.session.login(username, email).await;
    if let Err(Error::EmptyUsername) = outcome {
      // Validation failed before any state changed; the prior session and
      // its journal stay intact.
      return outcome;
    }
    self.journal.clear().await?;
    outcome
  }

  /// Log out and empty the journal. Idempotent.
  pub async fn logout(&self) -> Result<()> {
    self.journal.clear().await?;
    self.session.logout().await
  }

  pub fn current_user(&self) -> Option<User> {
    self.session.current_user()
  }

  pub async fn update_preferences(&self, update: PreferencesUpdate) -> Result<User> {
    self.session.update_preferences(update).await
  }

  // ── Journal ───────────────────────────────────────────────────────────────

  pub async fn record(&self, input: NewEvent) -> Result<Event> {
    self.journal.record(input).await
  }

  pub async fn clear_history(&self) -> Result<()> {
    self.journal.clear().await
  }

  pub fn events(&self) -> Vec<Event> {
    self.journal.all()
  }

  pub fn recent_events(&self, n: usize) -> Vec<Event> {
    self.journal.recent(n)
  }

  pub fn is_liked(&self, product_id: u32) -> bool {
    self.journal.is_liked(product_id)
  }

  pub fn liked_products(&self) -> Vec<u32> {
    self.journal.liked_products()
  }

  pub fn summary(&self) -> Summary {
    self.journal.summary()
  }

  // ── Component access ──────────────────────────────────────────────────────

  /// The underlying session store, for adapters that only need session
  /// state.
  pub fn session(&self) -> &Arc<SessionStore<S>> {
    &self.session
  }

  pub fn journal(&self) -> &EventJournal<S, K> {
    &self.journal
  }
}
