//! The `SlotStore` trait — the narrow durable key-value seam.
//!
//! The host environment provides named slots holding whole JSON documents:
//! one for the current user, one for the session's event sequence. Every
//! write replaces the whole value; absence of a slot means "no session" /
//! "empty journal". Backends (e.g. `vitrine-store-sqlite`) implement this
//! trait; the core never sees anything wider.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex, PoisonError},
};

/// Slot holding the persisted current-user record.
pub const USER_SLOT: &str = "session.user";

/// Slot holding the persisted event sequence for the current session.
pub const EVENTS_SLOT: &str = "session.events";

/// Abstraction over the host's local persistent key-value facility.
///
/// All methods return `Send` futures so implementations can be driven from
/// multi-threaded async runtimes. Reads and writes are whole-value and
/// atomic at the granularity of one slot.
pub trait SlotStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read a slot. `None` if the slot has never been written or was removed.
  fn load<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Replace a slot's value, creating the slot if absent.
  fn save<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a slot. Removing an absent slot is a no-op.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// Slot store held entirely in memory — useful for tests and for embedding
/// the core without durability.
#[derive(Clone, Default)]
pub struct MemorySlots {
  slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
  pub fn new() -> Self { Self::default() }

  /// Direct synchronous peek at a slot; test affordance.
  pub fn peek(&self, key: &str) -> Option<String> {
    self
      .slots
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .get(key)
      .cloned()
  }

  /// Direct synchronous write to a slot; test affordance for seeding state.
  pub fn seed(&self, key: &str, value: &str) {
    self
      .slots
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .insert(key.to_owned(), value.to_owned());
  }
}

impl SlotStore for MemorySlots {
  type Error = Infallible;

  async fn load(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.peek(key))
  }

  async fn save(&self, key: &str, value: &str) -> Result<(), Infallible> {
    self.seed(key, value);
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), Infallible> {
    self
      .slots
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .remove(key);
    Ok(())
  }
}
