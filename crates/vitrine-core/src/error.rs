//! Error types for `vitrine-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Login rejected: the username was empty after trimming.
  #[error("username must not be empty")]
  EmptyUsername,

  /// An operation that needs a session was called with none active.
  #[error("no active session")]
  NoActiveSession,

  /// A durable slot read or write failed. For writes, the in-memory state
  /// change that triggered the write still stands; the session remains
  /// usable for the rest of the process lifetime.
  #[error("persistence error: {0}")]
  Persistence(String),

  /// A persisted slot failed to parse on restore. The slot is wiped and
  /// restore proceeds as if it were absent; this variant is only visible in
  /// logs, never returned to callers.
  #[error("malformed state in slot {slot:?}")]
  MalformedState { slot: &'static str },

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
