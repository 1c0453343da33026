//! Integration tests for `SqliteSlots` against an in-memory database.

use std::sync::Arc;

use vitrine_core::{
  Storefront,
  event::{EventType, NewEvent},
  sink::NullSink,
  slot::{SlotStore, USER_SLOT},
};

use crate::SqliteSlots;

async fn slots() -> SqliteSlots {
  SqliteSlots::open_in_memory().await.expect("in-memory store")
}

// ─── Slot semantics ──────────────────────────────────────────────────────────

#[tokio::test]
async fn absent_slot_loads_none() {
  let s = slots().await;
  assert_eq!(s.load("session.user").await.unwrap(), None);
}

#[tokio::test]
async fn save_then_load_round_trips() {
  let s = slots().await;
  s.save("session.user", "{\"username\":\"alice\"}").await.unwrap();
  assert_eq!(
    s.load("session.user").await.unwrap().as_deref(),
    Some("{\"username\":\"alice\"}")
  );
}

#[tokio::test]
async fn save_replaces_the_whole_value() {
  let s = slots().await;
  s.save("k", "first").await.unwrap();
  s.save("k", "second").await.unwrap();
  assert_eq!(s.load("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn remove_clears_and_is_idempotent() {
  let s = slots().await;
  s.save("k", "v").await.unwrap();
  s.remove("k").await.unwrap();
  assert_eq!(s.load("k").await.unwrap(), None);
  // Removing an absent slot is a no-op.
  s.remove("k").await.unwrap();
}

#[tokio::test]
async fn slots_are_independent() {
  let s = slots().await;
  s.save("a", "1").await.unwrap();
  s.save("b", "2").await.unwrap();
  s.remove("a").await.unwrap();
  assert_eq!(s.load("a").await.unwrap(), None);
  assert_eq!(s.load("b").await.unwrap().as_deref(), Some("2"));
}

// ─── Storefront over SQLite ──────────────────────────────────────────────────

#[tokio::test]
async fn storefront_state_survives_a_new_instance() {
  let backend = Arc::new(slots().await);

  let front = Storefront::new(Arc::clone(&backend), Arc::new(NullSink));
  let user = front.login("alice", None).await.unwrap();
  front
    .record(NewEvent::new(EventType::Like, 42, "Widget", "Gadgets"))
    .await
    .unwrap();
  let events = front.events();

  // Same database, fresh storefront — a process restart in miniature.
  let reborn = Storefront::new(backend, Arc::new(NullSink));
  let restored = reborn.restore().await.unwrap().expect("session persisted");

  assert_eq!(restored.id, user.id);
  assert_eq!(restored.username, "alice");
  assert_eq!(reborn.events(), events);
}

#[tokio::test]
async fn malformed_user_slot_is_wiped_on_restore() {
  let backend = Arc::new(slots().await);
  backend.save(USER_SLOT, "definitely not json").await.unwrap();

  let front = Storefront::new(Arc::clone(&backend), Arc::new(NullSink));
  assert!(front.restore().await.unwrap().is_none());
  assert_eq!(backend.load(USER_SLOT).await.unwrap(), None);
}

#[tokio::test]
async fn logout_removes_both_slots() {
  let backend = Arc::new(slots().await);
  let front = Storefront::new(Arc::clone(&backend), Arc::new(NullSink));

  front.login("alice", None).await.unwrap();
  front
    .record(NewEvent::new(EventType::View, 1, "Widget", "Gadgets"))
    .await
    .unwrap();
  front.logout().await.unwrap();

  assert_eq!(backend.load("session.user").await.unwrap(), None);
  assert_eq!(backend.load("session.events").await.unwrap(), None);
}
