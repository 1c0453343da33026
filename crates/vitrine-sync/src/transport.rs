//! The `ObjectStore` transport trait and its in-memory stub.

use std::{
  collections::BTreeMap,
  future::Future,
  sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
  },
};

use thiserror::Error;

/// Write-only, key-addressed object storage. The only operation the sync
/// client needs is `put`; there is no read-back contract.
pub trait ObjectStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn put<'a>(
    &'a self,
    key: &'a str,
    body: &'a [u8],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── In-memory stub ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
#[error("object store rejected upload of {key}")]
pub struct UploadRejected {
  pub key: String,
}

/// In-memory object store standing in for the real bucket.
///
/// Uploads can be made to fail on demand, so callers can exercise the
/// best-effort delivery contract.
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
  objects:   Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
  fail_next: Arc<AtomicUsize>,
}

impl MemoryObjectStore {
  pub fn new() -> Self { Self::default() }

  /// Make the next `n` puts fail with [`UploadRejected`].
  pub fn fail_next(&self, n: usize) {
    self.fail_next.store(n, Ordering::SeqCst);
  }

  fn take_failure(&self) -> bool {
    self
      .fail_next
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
      .is_ok()
  }

  /// All stored keys, lexicographic order.
  pub fn keys(&self) -> Vec<String> {
    self.lock().keys().cloned().collect()
  }

  pub fn get(&self, key: &str) -> Option<Vec<u8>> {
    self.lock().get(key).cloned()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
    self.objects.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl ObjectStore for MemoryObjectStore {
  type Error = UploadRejected;

  async fn put(&self, key: &str, body: &[u8]) -> Result<(), UploadRejected> {
    if self.take_failure() {
      return Err(UploadRejected { key: key.to_owned() });
    }
    self.lock().insert(key.to_owned(), body.to_vec());
    Ok(())
  }
}
