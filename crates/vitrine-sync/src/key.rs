//! Deterministic object keys for uploaded events.

use chrono::{Datelike, Timelike};
use vitrine_core::event::Event;

/// Hierarchical key for one event object:
///
/// ```text
/// {prefix}/{user_id}/{year}/{month}/{day}/{hour}/{event_type}_{product_id}_{event_id}.json
/// ```
///
/// Calendar components come from the event's own UTC timestamp, zero-padded
/// so keys sort lexicographically in time order within a user. The event id
/// is the uniqueness suffix — collision-free for same-millisecond events,
/// and stable so a future retry would overwrite the same object instead of
/// duplicating it.
pub fn event_key(prefix: &str, event: &Event) -> String {
  let t = event.recorded_at;
  format!(
    "{prefix}/{user}/{year:04}/{month:02}/{day:02}/{hour:02}/{event_type}_{product}_{suffix}.json",
    user = event.user_id,
    year = t.year(),
    month = t.month(),
    day = t.day(),
    hour = t.hour(),
    event_type = event.event_type.as_str(),
    product = event.product_id,
    suffix = event.id.simple(),
  )
}
