//! Event types — the unit of the interaction journal.
//!
//! An event is an immutable record of one user interaction with a product.
//! Events are never updated; an "unlike" is a new appended event, not a
//! mutation of the earlier "like". Current liked state is derived by the
//! journal at read time.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The interaction kinds the journal records.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
  Like,
  Unlike,
  Share,
  View,
}

impl EventType {
  /// The lowercase discriminant used in persisted JSON and object keys.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Like => "like",
      Self::Unlike => "unlike",
      Self::Share => "share",
      Self::View => "view",
    }
  }
}

/// Open-ended action detail, e.g. the share method.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// An immutable journal entry.
///
/// The product fields are a denormalized snapshot taken at record time;
/// later catalog changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
  pub id:            Uuid,
  /// The user whose journal owns this event.
  pub user_id:       Uuid,
  pub event_type:    EventType,
  pub product_id:    u32,
  pub product_name:  String,
  pub category_name: String,
  /// Journal-assigned timestamp; never accepted from callers.
  pub recorded_at:   DateTime<Utc>,
  #[serde(default)]
  pub metadata:      Metadata,
}

/// Input to [`EventJournal::record`]. `id`, `user_id` and `recorded_at` are
/// assigned by the journal.
///
/// [`EventJournal::record`]: crate::journal::EventJournal::record
#[derive(Debug, Clone)]
pub struct NewEvent {
  pub event_type:    EventType,
  pub product_id:    u32,
  pub product_name:  String,
  pub category_name: String,
  pub metadata:      Metadata,
}

impl NewEvent {
  pub fn new(
    event_type: EventType,
    product_id: u32,
    product_name: impl Into<String>,
    category_name: impl Into<String>,
  ) -> Self {
    Self {
      event_type,
      product_id,
      product_name: product_name.into(),
      category_name: category_name.into(),
      metadata: Metadata::new(),
    }
  }

  /// Attach one metadata entry; chainable.
  pub fn with_metadata(
    mut self,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    self.metadata.insert(key.into(), value.into());
    self
  }
}
