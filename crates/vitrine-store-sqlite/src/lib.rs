//! SQLite backend for the vitrine slot store.
//!
//! Implements [`vitrine_core::slot::SlotStore`] over a single key-value
//! table. Wraps [`tokio_rusqlite`] so all database access runs on a
//! dedicated thread without blocking the async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteSlots;

#[cfg(test)]
mod tests;
