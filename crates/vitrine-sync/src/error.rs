//! Error type for `vitrine-sync`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A batch upload task was aborted before producing a result.
  #[error("upload task aborted: {0}")]
  Task(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
