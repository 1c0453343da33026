//! Shared core of the vitrine storefront prototype.
//!
//! Owns the single-user session, the append-only interaction journal, and
//! the seams they sit between: a durable key-value [`slot::SlotStore`]
//! below, a best-effort [`sink::EventSink`] beside. Presentation adapters
//! (web, mobile, the demo CLI) consume the [`Storefront`] facade and nothing
//! else.
//!
//! This crate is deliberately free of any concrete storage or transport
//! dependency; backends live in `vitrine-store-sqlite` and `vitrine-sync`.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod analytics;
pub mod app;
pub mod error;
pub mod event;
pub mod journal;
pub mod session;
pub mod sink;
pub mod slot;
pub mod user;

pub use app::Storefront;
pub use error::{Error, Result};
