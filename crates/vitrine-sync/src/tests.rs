//! Tests for the sync client against the in-memory object store.

use chrono::{TimeZone, Utc};
use uuid::Uuid;
use vitrine_core::{
  event::{Event, EventType, Metadata},
  sink::EventSink,
};

use crate::{
  Error, MemoryObjectStore, ObjectStoreSink, SyncConfig, key::event_key,
};

fn sample_event(product_id: u32, minute: u32) -> Event {
  Event {
    id: Uuid::new_v4(),
    user_id: Uuid::parse_str("6f2c0a1e-3d4b-4b6a-9c8d-2e1f0a9b8c7d").unwrap(),
    event_type: EventType::Like,
    product_id,
    product_name: "Widget".to_owned(),
    category_name: "Gadgets".to_owned(),
    recorded_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, minute, 0).unwrap(),
    metadata: Metadata::new(),
  }
}

// ─── Keys ────────────────────────────────────────────────────────────────────

#[test]
fn key_is_hierarchical_and_zero_padded() {
  let event = sample_event(42, 5);
  let key = event_key("events", &event);
  assert_eq!(
    key,
    format!(
      "events/6f2c0a1e-3d4b-4b6a-9c8d-2e1f0a9b8c7d/2024/03/07/09/like_42_{}.json",
      event.id.simple(),
    )
  );
}

#[test]
fn key_is_stable_for_the_same_event() {
  // The uniqueness suffix is the event id, so a retry would reuse the key.
  let event = sample_event(1, 0);
  assert_eq!(event_key("events", &event), event_key("events", &event));
}

#[test]
fn keys_differ_for_distinct_events() {
  let a = sample_event(1, 0);
  let b = sample_event(1, 0);
  assert_ne!(event_key("events", &a), event_key("events", &b));
}

// ─── Uploads ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upload_writes_a_self_describing_document() {
  let store = MemoryObjectStore::new();
  let sink = ObjectStoreSink::new(store.clone());

  let event = sample_event(42, 5);
  let key = sink.upload_event(&event).await.unwrap();

  let body = store.get(&key).expect("object stored under returned key");
  let decoded: Event = serde_json::from_slice(&body).unwrap();
  assert_eq!(decoded, event);
}

#[tokio::test]
async fn forward_is_a_single_attempt_upload() {
  let store = MemoryObjectStore::new();
  let sink = ObjectStoreSink::new(store.clone());

  let event = sample_event(7, 1);
  let key = sink.forward(event.clone()).await.unwrap();
  assert_eq!(store.keys(), vec![key]);
}

#[tokio::test]
async fn rejected_upload_reports_failure_and_stores_nothing() {
  let store = MemoryObjectStore::new();
  let sink = ObjectStoreSink::new(store.clone());
  store.fail_next(1);

  let err = sink.upload_event(&sample_event(1, 0)).await.unwrap_err();
  assert!(matches!(err, Error::Transport(_)));
  assert!(store.is_empty());

  // The injected failure is consumed; the next attempt goes through.
  sink.upload_event(&sample_event(1, 1)).await.unwrap();
  assert_eq!(store.len(), 1);
}

// ─── Batch fan-out ───────────────────────────────────────────────────────────

#[tokio::test]
async fn batch_results_are_in_input_order() {
  let store = MemoryObjectStore::new();
  let sink = ObjectStoreSink::new(store.clone());

  let events = vec![sample_event(1, 0), sample_event(2, 1), sample_event(3, 2)];
  let results = sink.upload_batch(events.clone()).await;

  assert_eq!(results.len(), 3);
  for (event, result) in events.iter().zip(&results) {
    let key = result.as_ref().unwrap();
    assert_eq!(key, &event_key("events", event));
  }
  assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn one_batch_failure_does_not_fail_the_others() {
  let store = MemoryObjectStore::new();
  let sink = ObjectStoreSink::new(store.clone());
  store.fail_next(1);

  let events = vec![sample_event(1, 0), sample_event(2, 1), sample_event(3, 2)];
  let results = sink.upload_batch(events).await;

  let failures = results.iter().filter(|r| r.is_err()).count();
  assert_eq!(failures, 1, "exactly the rejected upload fails");
  assert_eq!(store.len(), 2, "the other two objects landed");
}

// ─── Read-back placeholders ──────────────────────────────────────────────────

#[tokio::test]
async fn read_back_surface_returns_empty_defaults() {
  let sink = ObjectStoreSink::new(MemoryObjectStore::new());

  // Even with an object stored, the placeholder read surface stays empty.
  let event = sample_event(1, 0);
  sink.upload_event(&event).await.unwrap();

  assert!(sink.user_events(event.user_id, None).await.unwrap().is_empty());
  assert_eq!(
    sink
      .analytics_report(event.recorded_at, Utc::now())
      .await
      .unwrap(),
    crate::AnalyticsReport::default(),
  );
  assert_eq!(sink.cleanup_older_than(30).await.unwrap(), 0);
}

// ─── Configuration ───────────────────────────────────────────────────────────

#[test]
fn config_defaults_are_filled_in() {
  let config: SyncConfig = serde_json::from_str("{}").unwrap();
  assert_eq!(config.bucket, "vitrine-events");
  assert_eq!(config.region, "us-east-1");
  assert_eq!(config.prefix, "events");

  let config: SyncConfig = serde_json::from_str("{\"prefix\":\"dev-events\"}").unwrap();
  assert_eq!(config.prefix, "dev-events");
  assert_eq!(config.bucket, "vitrine-events");
}

#[test]
fn custom_prefix_flows_into_keys() {
  let sink = ObjectStoreSink::with_config(
    MemoryObjectStore::new(),
    SyncConfig { prefix: "dev-events".to_owned(), ..SyncConfig::default() },
  );
  let event = sample_event(1, 0);
  let key = event_key(&sink.config().prefix, &event);
  assert!(key.starts_with("dev-events/"));
}
