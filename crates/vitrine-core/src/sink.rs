//! The `EventSink` trait — best-effort forwarding seam for recorded events.
//!
//! The journal hands every freshly-recorded event to a sink on a detached
//! task. Delivery is at-most-once: the sink attempts once and reports the
//! outcome, and the journal logs and swallows failures. Nothing downstream
//! of this trait may ever gate or roll back the local append.

use std::{convert::Infallible, future::Future};

use crate::event::Event;

/// Forwarder of recorded events to a remote sink.
///
/// `forward` returns the remote key the event was stored under, for logging
/// only — callers must not depend on it for correctness.
pub trait EventSink: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn forward(
    &self,
    event: Event,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;
}

/// Sink that drops every event. The default when no remote forwarding is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
  type Error = Infallible;

  async fn forward(&self, event: Event) -> Result<String, Infallible> {
    tracing::debug!(event_id = %event.id, "no sink configured; dropping event");
    Ok(String::new())
  }
}
