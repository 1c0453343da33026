//! Derived interaction statistics — never stored, always computed.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::event::{Event, EventType};

/// Summary of a journal's event sequence, as shown on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
  pub total_events:    usize,
  pub likes:           usize,
  pub unlikes:         usize,
  pub shares:          usize,
  pub views:           usize,
  /// Distinct products interacted with, across all event types.
  pub unique_products: usize,
  /// Categories by interaction count, descending. Ties keep the order in
  /// which the categories first appear in the journal, so the result is
  /// deterministic for a given event sequence.
  pub top_categories:  Vec<(String, usize)>,
}

impl Summary {
  pub fn from_events(events: &[Event]) -> Self {
    let mut summary = Self {
      total_events: events.len(),
      ..Self::default()
    };

    let mut products = BTreeSet::new();
    let mut categories: Vec<(String, usize)> = Vec::new();

    for event in events {
      match event.event_type {
        EventType::Like => summary.likes += 1,
        EventType::Unlike => summary.unlikes += 1,
        EventType::Share => summary.shares += 1,
        EventType::View => summary.views += 1,
      }
      products.insert(event.product_id);

      match categories
        .iter_mut()
        .find(|(name, _)| *name == event.category_name)
      {
        Some((_, count)) => *count += 1,
        None => categories.push((event.category_name.clone(), 1)),
      }
    }

    // Stable sort preserves first-seen order among equal counts.
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    summary.unique_products = products.len();
    summary.top_categories = categories;
    summary
  }
}
