//! The read-write transaction retry loop (§4.3 "Retry"): re-runs the
//! caller's callback against a fresh [`ReadWriteTransaction`] on a
//! retryable failure, rolling back the failed attempt and backing off
//! first. Grounded on the teacher's `Client::read_write_transaction`, which
//! drives the same "wrap the transaction in a shareable handle, call the
//! closure, finish, inspect the error to decide whether to loop" shape
//! against Spanner's narrower Aborted-only retry rule.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::pool::ClientPool;
use crate::retry::Backoff;
use crate::transaction::{send_commit, send_rollback};
use crate::transaction_rw::ReadWriteTransaction;

/// Default retry attempts for a read-write transaction (§4.3: "default 5,
/// user-configurable ≥1").
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Runs `callback` against a read-write transaction, retrying the whole
/// attempt (fresh transaction, re-run callback, re-commit) on a retryable
/// failure up to `max_attempts` times. `callback` receives an `Arc`-shared
/// handle so it can fan reads out across concurrent tasks if it wants to;
/// the transaction's own interior locking (not an external mutex, unlike
/// the teacher's `Arc<Mutex<_>>` handle) is what lets those reads actually
/// run in parallel while still serializing on the id acquisition (§4.3
/// "Ordering guarantee").
pub async fn run_transaction<F, Fut, T>(pool: Arc<ClientPool>, database: String, max_attempts: u32, mut callback: F) -> Result<T>
where
    F: FnMut(Arc<ReadWriteTransaction>) -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let max_attempts = max_attempts.max(1);
    let mut backoff = Backoff::default();
    let mut retry_transaction = Vec::new();
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let txn = Arc::new(ReadWriteTransaction::new(pool.clone(), database.clone(), retry_transaction.clone()));

        let outcome = run_once(&pool, &database, &txn, &mut callback).await;

        match outcome {
            Ok(value) => return Ok(value),
            Err(err) => {
                if let Some(id) = txn.id() {
                    debug!(attempt, "rolling back failed transaction attempt");
                    if let Err(rollback_err) = send_rollback(&pool, database.clone(), id.clone()).await {
                        warn!(error = %rollback_err, "best-effort rollback failed");
                    }
                    retry_transaction = id;
                }

                if !err.is_retryable() {
                    return Err(err);
                }
                if attempt >= max_attempts {
                    return Err(Error::TransactionRetriesExhausted { attempts: attempt, last: Box::new(err) });
                }
                sleep(backoff.next_delay()).await;
            }
        }
    }
}

async fn run_once<F, Fut, T>(pool: &Arc<ClientPool>, database: &str, txn: &Arc<ReadWriteTransaction>, callback: &mut F) -> Result<T>
where
    F: FnMut(Arc<ReadWriteTransaction>) -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let value = callback(txn.clone()).await?;
    let writes = txn.take_writes();
    send_commit(pool, database.to_string(), writes, txn.id().unwrap_or_default()).await?;
    txn.mark_committed();
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::conn::Environment;
    use std::sync::atomic::{AtomicU32, Ordering};

    async fn fresh_pool() -> Arc<ClientPool> {
        Arc::new(ClientPool::new(
            crate::apiv1::conn_pool::ConnectionManager::new(1, &Environment::Emulator("localhost:0".to_string()), &Default::default())
                .await
                .unwrap(),
            1,
        ))
    }

    #[tokio::test]
    async fn callback_error_that_is_not_retryable_propagates_immediately() {
        let pool = fresh_pool().await;
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();
        let result: Result<()> = run_transaction(pool, "projects/p/databases/(default)".to_string(), 5, move |_txn| {
            let attempts = attempts_clone.clone();
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err(Error::invalid_argument("x", "boom"))
            }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
