//! [`ObjectStoreSink`] — serializes events and puts them to an
//! [`ObjectStore`], one self-describing JSON document per event.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use uuid::Uuid;
use vitrine_core::{event::Event, sink::EventSink};

use crate::{Error, Result, SyncConfig, key::event_key, transport::ObjectStore};

/// Remote sync client over any [`ObjectStore`] transport.
///
/// Implements the core's [`EventSink`], so a journal can forward straight
/// into it. Every upload is a single attempt; the caller decides what a
/// failure means (the journal logs and swallows it).
#[derive(Clone)]
pub struct ObjectStoreSink<T> {
  store:  T,
  config: SyncConfig,
}

impl<T: ObjectStore> ObjectStoreSink<T> {
  pub fn new(store: T) -> Self {
    Self::with_config(store, SyncConfig::default())
  }

  pub fn with_config(store: T, config: SyncConfig) -> Self {
    Self { store, config }
  }

  pub fn config(&self) -> &SyncConfig {
    &self.config
  }

  /// Upload one event; returns the object key it was stored under.
  pub async fn upload_event(&self, event: &Event) -> Result<String> {
    let key = event_key(&self.config.prefix, event);
    let body = serde_json::to_vec_pretty(event)?;
    self
      .store
      .put(&key, &body)
      .await
      .map_err(|e| Error::Transport(Box::new(e)))?;
    tracing::debug!(bucket = %self.config.bucket, %key, "event uploaded");
    Ok(key)
  }
}

impl<T> ObjectStoreSink<T>
where
  T: ObjectStore + Clone + 'static,
{
  /// Upload many events concurrently and independently.
  ///
  /// Best-effort fan-out: each event gets its own attempt and its own
  /// result, in input order. One failure never fails the others.
  pub async fn upload_batch(&self, events: Vec<Event>) -> Vec<Result<String>> {
    let mut slots: Vec<Option<Result<String>>> =
      events.iter().map(|_| None).collect();

    let mut tasks = JoinSet::new();
    for (idx, event) in events.into_iter().enumerate() {
      let sink = self.clone();
      tasks.spawn(async move { (idx, sink.upload_event(&event).await) });
    }

    while let Some(joined) = tasks.join_next().await {
      match joined {
        Ok((idx, result)) => slots[idx] = Some(result),
        Err(e) => tracing::warn!(error = %e, "batch upload task aborted"),
      }
    }

    slots
      .into_iter()
      .map(|slot| slot.unwrap_or_else(|| Err(Error::Task("task aborted".to_owned()))))
      .collect()
  }
}

impl<T: ObjectStore> EventSink for ObjectStoreSink<T> {
  type Error = Error;

  async fn forward(&self, event: Event) -> Result<String> {
    self.upload_event(&event).await
  }
}

// ─── Read-back placeholders ──────────────────────────────────────────────────

/// Aggregate report shape for [`ObjectStoreSink::analytics_report`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsReport {
  pub total_events:    usize,
  pub events_by_type:  BTreeMap<String, usize>,
  pub top_products:    Vec<u32>,
}

impl<T: ObjectStore> ObjectStoreSink<T> {
  /// List a user's uploaded events.
  ///
  /// Placeholder: the remote store is write-only in this design and this
  /// always returns an empty sequence. Callers must not depend on it for
  /// correctness.
  pub async fn user_events(
    &self,
    user_id: Uuid,
    _range: Option<(DateTime<Utc>, DateTime<Utc>)>,
  ) -> Result<Vec<Event>> {
    tracing::debug!(%user_id, "remote event read-back not implemented; returning empty");
    Ok(Vec::new())
  }

  /// Aggregate analytics for a time period.
  ///
  /// Placeholder: always returns the default (all-zero) report.
  pub async fn analytics_report(
    &self,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<AnalyticsReport> {
    tracing::debug!(%start, %end, "remote analytics not implemented; returning default");
    Ok(AnalyticsReport::default())
  }

  /// Remove events older than `retention_days`; returns how many were
  /// deleted.
  ///
  /// Placeholder: always returns 0.
  pub async fn cleanup_older_than(&self, retention_days: u32) -> Result<usize> {
    let cutoff = Utc::now() - Duration::days(i64::from(retention_days));
    tracing::debug!(%cutoff, "remote cleanup not implemented; deleted nothing");
    Ok(0)
  }
}
