//! Remote sync client for the vitrine event journal.
//!
//! Forwards recorded events to a write-only, key-addressed object store —
//! one object per event, keyed by user, calendar hour, event type, and
//! product. Delivery is best-effort and at-most-once: one attempt per
//! event, outcome reported to the caller, never propagated into the
//! journal's append path. Retry with backoff and an outbox queue are a
//! named extension point, not part of this design; the key scheme is
//! already retry-safe because the uniqueness suffix is the event's own id.
//!
//! The transport is a stub. [`transport::MemoryObjectStore`] stands in for
//! the real bucket; no network call is made anywhere in this crate.

#![allow(async_fn_in_trait)]

pub mod error;
pub mod key;
pub mod sink;
pub mod transport;

use serde::Deserialize;

pub use error::{Error, Result};
pub use sink::{AnalyticsReport, ObjectStoreSink};
pub use transport::{MemoryObjectStore, ObjectStore};

#[cfg(test)]
mod tests;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Remote sink configuration, deserialised from a config file or
/// `VITRINE_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
  #[serde(default = "default_bucket")]
  pub bucket: String,
  #[serde(default = "default_region")]
  pub region: String,
  /// Leading key segment for every uploaded object.
  #[serde(default = "default_prefix")]
  pub prefix: String,
}

fn default_bucket() -> String { "vitrine-events".to_owned() }
fn default_region() -> String { "us-east-1".to_owned() }
fn default_prefix() -> String { "events".to_owned() }

impl Default for SyncConfig {
  fn default() -> Self {
    Self {
      bucket: default_bucket(),
      region: default_region(),
      prefix: default_prefix(),
    }
  }
}
