//! [`EventJournal`] — append-only log of interaction events.
//!
//! One journal per session. Entries are immutable once recorded; the only
//! mutations are append and full clear. Each append is persisted as a
//! whole-array replace of the events slot, then forwarded to the
//! [`EventSink`] on a detached task whose outcome is observed only through
//! logs — remote delivery never gates the local append.

use std::{
  collections::{BTreeMap, BTreeSet},
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;
use uuid::Uuid;

use crate::{
  analytics::Summary,
  error::{Error, Result},
  event::{Event, EventType, NewEvent},
  session::SessionStore,
  sink::EventSink,
  slot::{EVENTS_SLOT, SlotStore},
};

/// Session-scoped, append-only event log with local durability and
/// best-effort remote forwarding.
pub struct EventJournal<S, K> {
  slots:   Arc<S>,
  session: Arc<SessionStore<S>>,
  sink:    Arc<K>,
  events:  Mutex<Vec<Event>>,
}

impl<S, K> EventJournal<S, K>
where
  S: SlotStore,
  K: EventSink + 'static,
{
  pub fn new(slots: Arc<S>, session: Arc<SessionStore<S>>, sink: Arc<K>) -> Self {
    Self {
      slots,
      session,
      sink,
      events: Mutex::new(Vec::new()),
    }
  }

  fn state(&self) -> MutexGuard<'_, Vec<Event>> {
    self.events.lock().unwrap_or_else(PoisonError::into_inner)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Append one event. Requires an active session.
  ///
  /// The journal assigns the id and the timestamp; timestamps are clamped
  /// so they never decrease within a session even if the wall clock does,
  /// with ties broken by insertion order. The in-memory append happens
  /// first, then the durable write (degraded-graceful: a failed write
  /// returns [`Error::Persistence`] with the entry kept in memory), then
  /// the detached remote forward.
  pub async fn record(&self, input: NewEvent) -> Result<Event> {
    let user = self.session.current_user().ok_or(Error::NoActiveSession)?;

    let event = {
      let mut events = self.state();
      let now = Utc::now();
      let recorded_at = match events.last() {
        Some(prev) => prev.recorded_at.max(now),
        None => now,
      };
      let event = Event {
        id: Uuid::new_v4(),
        user_id: user.id,
        event_type: input.event_type,
        product_id: input.product_id,
        product_name: input.product_name,
        category_name: input.category_name,
        recorded_at,
        metadata: input.metadata,
      };
      events.push(event.clone());
      event
    };

    let persisted = self.persist().await;

    // Fire-and-forget forward. The task owns its clones; failure is logged
    // and swallowed, and the local entry above is never rolled back.
    let sink = Arc::clone(&self.sink);
    let outbound = event.clone();
    tokio::spawn(async move {
      let event_id = outbound.id;
      match sink.forward(outbound).await {
        Ok(key) if key.is_empty() => {}
        Ok(key) => tracing::debug!(%event_id, %key, "event forwarded to remote sink"),
        Err(e) => {
          tracing::warn!(%event_id, error = %e, "remote forward failed; local entry kept");
        }
      }
    });

    persisted?;
    Ok(event)
  }

  /// Empty the journal, in memory and on disk.
  pub async fn clear(&self) -> Result<()> {
    self.state().clear();
    self
      .slots
      .remove(EVENTS_SLOT)
      .await
      .map_err(|e| Error::Persistence(e.to_string()))
  }

  /// Load a previously persisted event sequence. Invoked once at process
  /// start, after the session itself has been restored.
  ///
  /// A malformed slot is wiped and the journal starts empty.
  pub async fn restore(&self) -> Result<()> {
    let raw = self
      .slots
      .load(EVENTS_SLOT)
      .await
      .map_err(|e| Error::Persistence(e.to_string()))?;
    let Some(raw) = raw else {
      return Ok(());
    };

    match serde_json::from_str::<Vec<Event>>(&raw) {
      Ok(events) => *self.state() = events,
      Err(parse_err) => {
        let err = Error::MalformedState { slot: EVENTS_SLOT };
        tracing::warn!(%err, %parse_err, "clearing unreadable journal slot");
        if let Err(e) = self.slots.remove(EVENTS_SLOT).await {
          tracing::warn!(error = %e, "failed to clear malformed journal slot");
        }
      }
    }
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Full history, insertion order, oldest first.
  pub fn all(&self) -> Vec<Event> {
    self.state().clone()
  }

  pub fn len(&self) -> usize {
    self.state().len()
  }

  pub fn is_empty(&self) -> bool {
    self.state().is_empty()
  }

  /// The most recent `n` events, newest first.
  pub fn recent(&self, n: usize) -> Vec<Event> {
    let events = self.state();
    events.iter().rev().take(n).cloned().collect()
  }

  pub fn counts_by_type(&self) -> BTreeMap<EventType, usize> {
    let mut counts = BTreeMap::new();
    for event in self.state().iter() {
      *counts.entry(event.event_type).or_insert(0) += 1;
    }
    counts
  }

  /// Whether `product_id` is currently liked: the most recent like/unlike
  /// event for the product wins (ties impossible — append order is total).
  pub fn is_liked(&self, product_id: u32) -> bool {
    self
      .state()
      .iter()
      .rev()
      .find_map(|event| match event.event_type {
        EventType::Like if event.product_id == product_id => Some(true),
        EventType::Unlike if event.product_id == product_id => Some(false),
        _ => None,
      })
      .unwrap_or(false)
  }

  /// All currently-liked product ids, ascending.
  pub fn liked_products(&self) -> Vec<u32> {
    let mut liked = BTreeSet::new();
    for event in self.state().iter() {
      match event.event_type {
        EventType::Like => {
          liked.insert(event.product_id);
        }
        EventType::Unlike => {
          liked.remove(&event.product_id);
        }
        _ => {}
      }
    }
    liked.into_iter().collect()
  }

  /// Derived interaction statistics for the whole journal.
  pub fn summary(&self) -> Summary {
    Summary::from_events(&self.state())
  }

  // ── Persistence ───────────────────────────────────────────────────────────

  async fn persist(&self) -> Result<()> {
    let json = {
      let events = self.state();
      serde_json::to_string(&*events)?
    };
    self.slots.save(EVENTS_SLOT, &json).await.map_err(|e| {
      tracing::warn!(error = %e, "journal write failed; entries kept in memory");
      Error::Persistence(e.to_string())
    })
  }
}
