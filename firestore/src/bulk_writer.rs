//! BulkWriter (§4.5): a throttled batched-write funnel. Buffers
//! create/set/update/delete operations, flushes them in batches up to a
//! server-imposed size via a single non-transactional [`crate::transaction::send_commit`],
//! and — unless explicitly disabled — awaits the ramping
//! [`crate::rate_limiter::RateLimiter`] before each flush. Writes within one
//! flushed batch commit atomically; ordering between batches is unspecified.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use google_cloud_firestore_proto::firestore::v1 as pb;
use tokio::sync::{oneshot, Mutex};

use crate::error::{Error, Result};
use crate::mutation::{self, Transform};
use crate::pool::ClientPool;
use crate::rate_limiter::RateLimiter;
use crate::transaction::send_commit;
use crate::value::Value;

/// The largest batch a single flush may carry in one `Commit` (§4.5
/// "batches up to a server-imposed size"); mirrors Firestore's own limit on
/// writes per commit.
pub const MAX_BATCH_SIZE: usize = 500;

/// A single buffered operation's eventual result. Shared via `Arc` because a
/// whole batch fails or succeeds together, and `Error` itself isn't `Clone`.
pub type WriteOutcome = std::result::Result<pb::WriteResult, Arc<Error>>;

pub struct BulkWriterOptions {
    /// Whether to await the rate limiter before each flush. On by default
    /// (§4.5 "unless explicitly disabled, throttling is on by default").
    pub throttling: bool,
}

impl Default for BulkWriterOptions {
    fn default() -> BulkWriterOptions {
        BulkWriterOptions { throttling: true }
    }
}

struct PendingWrite {
    write: pb::Write,
    result: oneshot::Sender<WriteOutcome>,
}

pub struct BulkWriter {
    pool: Arc<ClientPool>,
    database: String,
    limiter: Option<Mutex<RateLimiter>>,
    pending: std::sync::Mutex<Vec<PendingWrite>>,
    closed: AtomicBool,
}

/// The eventual outcome of one `create`/`set`/`update`/`delete` call.
pub struct PendingResult(oneshot::Receiver<WriteOutcome>);

impl Future for PendingResult {
    type Output = WriteOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.0).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // the writer was dropped or closed before this write's batch flushed
            Poll::Ready(Err(_)) => Poll::Ready(Err(Arc::new(Error::BulkWriterClosed))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl BulkWriter {
    pub(crate) fn new(pool: Arc<ClientPool>, database: String, options: BulkWriterOptions) -> BulkWriter {
        BulkWriter {
            pool,
            database,
            limiter: options.throttling.then(|| Mutex::new(RateLimiter::default())),
            pending: std::sync::Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub async fn create(&self, name: impl Into<String>, fields: BTreeMap<String, Value>) -> Result<PendingResult> {
        self.submit(mutation::create(name, fields)).await
    }

    pub async fn set(&self, name: impl Into<String>, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) -> Result<PendingResult> {
        self.submit(mutation::set(name, fields, transforms)).await
    }

    pub async fn update(&self, name: impl Into<String>, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) -> Result<PendingResult> {
        self.submit(mutation::update(name, fields, transforms)).await
    }

    pub async fn delete(&self, name: impl Into<String>) -> Result<PendingResult> {
        self.submit(mutation::delete(name)).await
    }

    async fn submit(&self, write: pb::Write) -> Result<PendingResult> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::BulkWriterClosed);
        }
        let (tx, rx) = oneshot::channel();
        let full = {
            let mut pending = self.pending.lock().unwrap();
            pending.push(PendingWrite { write, result: tx });
            pending.len() >= MAX_BATCH_SIZE
        };
        if full {
            self.flush().await;
        }
        Ok(PendingResult(rx))
    }

    /// Flushes every currently buffered operation in batches of at most
    /// [`MAX_BATCH_SIZE`]. Batch-level failures are delivered to the
    /// individual operations' [`PendingResult`]s, not returned here.
    pub async fn flush(&self) {
        loop {
            let batch: Vec<PendingWrite> = {
                let mut pending = self.pending.lock().unwrap();
                if pending.is_empty() {
                    return;
                }
                let split_at = pending.len().min(MAX_BATCH_SIZE);
                pending.drain(..split_at).collect()
            };
            self.commit_batch(batch).await;
        }
    }

    /// Flushes remaining operations and rejects any further submission.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.flush().await;
    }

    async fn commit_batch(&self, batch: Vec<PendingWrite>) {
        if let Some(limiter) = &self.limiter {
            limiter.lock().await.acquire(batch.len() as f64).await;
        }
        let (writes, senders): (Vec<pb::Write>, Vec<oneshot::Sender<WriteOutcome>>) = batch.into_iter().map(|p| (p.write, p.result)).unzip();
        match send_commit(&self.pool, self.database.clone(), writes, Vec::new()).await {
            Ok(resp) => {
                for (sender, result) in senders.into_iter().zip(resp.write_results) {
                    let _ = sender.send(Ok(result));
                }
            }
            Err(err) => {
                let shared = Arc::new(err);
                for sender in senders {
                    let _ = sender.send(Err(shared.clone()));
                }
            }
        }
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    #[cfg(test)]
    fn has_limiter(&self) -> bool {
        self.limiter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::conn::Environment;

    async fn fresh_pool() -> Arc<ClientPool> {
        Arc::new(ClientPool::new(
            crate::apiv1::conn_pool::ConnectionManager::new(1, &Environment::Emulator("localhost:0".to_string()), &Default::default())
                .await
                .unwrap(),
            1,
        ))
    }

    #[tokio::test]
    async fn throttling_defaults_to_on() {
        let writer = BulkWriter::new(fresh_pool().await, "projects/p/databases/(default)".to_string(), BulkWriterOptions::default());
        assert!(writer.has_limiter());
    }

    #[tokio::test]
    async fn throttling_can_be_disabled() {
        let writer = BulkWriter::new(
            fresh_pool().await,
            "projects/p/databases/(default)".to_string(),
            BulkWriterOptions { throttling: false },
        );
        assert!(!writer.has_limiter());
    }

    #[tokio::test]
    async fn operations_queue_without_flushing_below_batch_size() {
        let writer = BulkWriter::new(fresh_pool().await, "projects/p/databases/(default)".to_string(), BulkWriterOptions::default());
        writer.delete("projects/p/databases/(default)/documents/c/d").await.unwrap();
        assert_eq!(writer.pending_len(), 1);
    }

    #[tokio::test]
    async fn closed_writer_rejects_new_operations() {
        let writer = BulkWriter::new(fresh_pool().await, "projects/p/databases/(default)".to_string(), BulkWriterOptions::default());
        writer.close().await;
        let result = writer.delete("projects/p/databases/(default)/documents/c/d").await;
        assert!(matches!(result, Err(Error::BulkWriterClosed)));
    }

    #[tokio::test]
    async fn flush_on_empty_queue_is_a_no_op() {
        let writer = BulkWriter::new(fresh_pool().await, "projects/p/databases/(default)".to_string(), BulkWriterOptions::default());
        writer.flush().await;
        assert_eq!(writer.pending_len(), 0);
    }
}
