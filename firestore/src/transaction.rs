//! Shared transaction plumbing (§4.3): the lazily-acquired id and the
//! "exactly one id acquirer" discipline both [`crate::transaction_ro`] and
//! [`crate::transaction_rw`] build on, plus the unretried `Commit` and
//! `Rollback` calls the transaction engine (not the request layer) controls
//! the retry of.

use std::sync::Mutex;

use google_cloud_firestore_proto::firestore::v1 as pb;
use google_cloud_gax::grpc::Request;
use tokio::sync::OnceCell;

use crate::error::{Error, Result};
use crate::pool::ClientPool;

pub type TransactionId = Vec<u8>;

/// A transaction's lifecycle (§2, §4.3). Read-only transactions never leave
/// `Reading`; read-write transactions move to `Writing` on the first
/// buffered write and from there only to a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Reading,
    Writing,
    Committed,
    RolledBack,
}

/// The result of racing to become the transaction's id acquirer (§4.3,
/// "Ordering guarantee within a transaction").
pub enum IdOutcome<T> {
    /// This call's closure ran and both started the transaction and
    /// performed its own read; the read's result is ready, no further RPC
    /// needed.
    Acquired(T),
    /// Another call already holds (or is holding) the id; the caller must
    /// issue its own read carrying it.
    AlreadySet(TransactionId),
}

/// Guards a transaction id that at most one read RPC may acquire.
///
/// [`tokio::sync::OnceCell::get_or_try_init`] already provides the core
/// guarantee the spec asks for: of several concurrent callers, exactly one
/// runs its initializer while the rest await its result. The wrinkle is
/// that the initializer here is a *read* that both begins the transaction
/// and answers its caller's own query, so the winning caller's result has
/// to escape the cell alongside the id; a slot captured by the closure
/// carries it out.
#[derive(Default)]
pub struct IdCell(OnceCell<TransactionId>);

impl IdCell {
    pub fn new() -> IdCell {
        IdCell(OnceCell::new())
    }

    pub fn get(&self) -> Option<TransactionId> {
        self.0.get().cloned()
    }

    /// Resolves the transaction id, running `acquire` only if no id exists
    /// yet and no other caller is already acquiring one. `acquire` performs
    /// the caller's own read with `newTransaction` and must return the read
    /// result paired with the id the server assigned.
    pub async fn resolve<F, Fut, T>(&self, acquire: F) -> Result<IdOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<(T, TransactionId)>>,
    {
        let slot: Mutex<Option<T>> = Mutex::new(None);
        let id = self
            .0
            .get_or_try_init(|| async {
                let (value, id) = acquire().await?;
                if id.is_empty() {
                    return Err(Error::NoTransactionIdReturned);
                }
                *slot.lock().unwrap() = Some(value);
                Ok::<TransactionId, Error>(id)
            })
            .await?
            .clone();
        match slot.lock().unwrap().take() {
            Some(value) => Ok(IdOutcome::Acquired(value)),
            None => Ok(IdOutcome::AlreadySet(id)),
        }
    }

    /// Forces a specific id, used when a transaction retry already knows
    /// the id a prior attempt obtained and wants to short-circuit its own
    /// first read (not currently exercised by the retry path, which always
    /// starts a fresh id via `prevTransactionId`, but kept as the escape
    /// hatch callers reach for when seeding a cell from a known id).
    pub fn set(&self, id: TransactionId) {
        let _ = self.0.set(id);
    }
}

/// Sends a `Commit`, once, with no retry: a failure here is the transaction
/// engine's signal to roll back, back off, and re-run the whole callback
/// rather than resend the same commit (§4.2, §4.3).
pub(crate) async fn send_commit(
    pool: &ClientPool,
    database: String,
    writes: Vec<pb::Write>,
    transaction: TransactionId,
) -> Result<pb::CommitResponse> {
    pool.run("commit", move |mut client| {
        let req = pb::CommitRequest { database, writes, transaction };
        async move { client.commit(Request::new(req)).await.map(|r| r.into_inner()).map_err(Error::from) }
    })
    .await
}

/// Sends a `Rollback`, once, best-effort: the caller treats failure as
/// informational only (§4.3, "issue rollback (best-effort)").
pub(crate) async fn send_rollback(pool: &ClientPool, database: String, transaction: TransactionId) -> Result<()> {
    pool.run("rollback", move |mut client| {
        let req = pb::RollbackRequest { database, transaction };
        async move { client.rollback(Request::new(req)).await.map(|_| ()).map_err(Error::from) }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn only_one_concurrent_caller_runs_acquire() {
        let cell = Arc::new(IdCell::new());
        let runs = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for i in 0..8 {
            let cell = cell.clone();
            let runs = runs.clone();
            handles.push(tokio::spawn(async move {
                cell.resolve(|| async {
                    runs.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    Ok::<(u32, TransactionId), Error>((i, vec![1, 2, 3]))
                })
                .await
            }));
        }

        let mut acquired = 0;
        let mut already_set = 0;
        for h in handles {
            match h.await.unwrap().unwrap() {
                IdOutcome::Acquired(_) => acquired += 1,
                IdOutcome::AlreadySet(id) => {
                    already_set += 1;
                    assert_eq!(id, vec![1, 2, 3]);
                }
            }
        }
        assert_eq!(acquired, 1);
        assert_eq!(already_set, 7);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(cell.get(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn empty_id_from_server_is_an_error() {
        let cell = IdCell::new();
        let result = cell.resolve(|| async { Ok::<((), TransactionId), Error>(((), Vec::new())) }).await;
        assert!(matches!(result, Err(Error::NoTransactionIdReturned)));
    }
}
