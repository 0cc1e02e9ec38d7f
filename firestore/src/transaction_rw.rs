//! Read-write transactions (§4.3): lazy-begin id acquisition shared with
//! [`crate::transaction_ro`], a read-before-write invariant, and locally
//! buffered writes a [`crate::transaction_manager`] run commits atomically.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use google_cloud_firestore_proto::firestore::v1 as pb;

use crate::document::DocumentSnapshot;
use crate::error::{Error, Result};
use crate::mutation::{self, Transform};
use crate::path::Path;
use crate::pool::ClientPool;
use crate::query::Query;
use crate::reader::{self, ReadConsistency};
use crate::transaction::{IdCell, IdOutcome, Phase, TransactionId};
use crate::value::Value;

pub struct ReadWriteTransaction {
    pool: Arc<ClientPool>,
    database: String,
    id: IdCell,
    phase: Mutex<Phase>,
    writes: Mutex<Vec<pb::Write>>,
    /// The id a prior attempt obtained, carried as `retryTransaction` so the
    /// server may short-circuit lock re-acquisition (§4.3 "Retry", step 3).
    retry_transaction: TransactionId,
}

impl ReadWriteTransaction {
    pub(crate) fn new(pool: Arc<ClientPool>, database: String, retry_transaction: TransactionId) -> ReadWriteTransaction {
        ReadWriteTransaction {
            pool,
            database,
            id: IdCell::new(),
            phase: Mutex::new(Phase::Reading),
            writes: Mutex::new(Vec::new()),
            retry_transaction,
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    pub(crate) fn id(&self) -> Option<TransactionId> {
        self.id.get()
    }

    pub(crate) fn take_writes(&self) -> Vec<pb::Write> {
        std::mem::take(&mut self.writes.lock().unwrap())
    }

    pub(crate) fn mark_committed(&self) {
        *self.phase.lock().unwrap() = Phase::Committed;
    }

    pub(crate) fn mark_rolled_back(&self) {
        *self.phase.lock().unwrap() = Phase::RolledBack;
    }

    fn new_transaction_options(&self) -> pb::TransactionOptions {
        pb::TransactionOptions {
            mode: Some(pb::transaction_options::Mode::ReadWrite(pb::transaction_options::ReadWrite {
                retry_transaction: self.retry_transaction.clone(),
            })),
        }
    }

    fn assert_readable(&self) -> Result<()> {
        if *self.phase.lock().unwrap() != Phase::Reading {
            return Err(Error::ReadAfterWrite);
        }
        Ok(())
    }

    pub async fn get_document(&self, name: impl Into<String>) -> Result<DocumentSnapshot> {
        let name = name.into();
        let docs = self.get_all(vec![name.clone()]).await?;
        Ok(docs.into_iter().next().unwrap_or_else(|| DocumentSnapshot::missing(Path::parse(&name), None)))
    }

    pub async fn get_all(&self, names: Vec<String>) -> Result<Vec<DocumentSnapshot>> {
        self.assert_readable()?;
        if let Some(id) = self.id.get() {
            return reader::batch_get_documents(&self.pool, self.database.clone(), names, ReadConsistency::Transaction(id)).await;
        }
        let pool = &self.pool;
        let database = self.database.clone();
        let acquiring_names = names.clone();
        let outcome = self
            .id
            .resolve(|| async move {
                reader::batch_get_documents_tx(
                    pool,
                    database,
                    acquiring_names,
                    ReadConsistency::NewTransaction(self.new_transaction_options()),
                )
                .await
            })
            .await?;
        self.assert_readable()?;
        match outcome {
            IdOutcome::Acquired(docs) => Ok(docs),
            IdOutcome::AlreadySet(id) => {
                reader::batch_get_documents(&self.pool, self.database.clone(), names, ReadConsistency::Transaction(id)).await
            }
        }
    }

    pub async fn run_query(&self, parent: impl Into<String>, query: &Query) -> Result<Vec<DocumentSnapshot>> {
        self.assert_readable()?;
        let parent = parent.into();
        if let Some(id) = self.id.get() {
            return reader::run_query(&self.pool, parent, query, ReadConsistency::Transaction(id)).await;
        }
        let pool = &self.pool;
        let acquiring_parent = parent.clone();
        let outcome = self
            .id
            .resolve(|| async move {
                reader::run_query_tx(pool, acquiring_parent, query, ReadConsistency::NewTransaction(self.new_transaction_options())).await
            })
            .await?;
        self.assert_readable()?;
        match outcome {
            IdOutcome::Acquired(docs) => Ok(docs),
            IdOutcome::AlreadySet(id) => reader::run_query(&self.pool, parent, query, ReadConsistency::Transaction(id)).await,
        }
    }

    fn buffer(&self, write: pb::Write) {
        self.writes.lock().unwrap().push(write);
        let mut phase = self.phase.lock().unwrap();
        if *phase == Phase::Reading {
            *phase = Phase::Writing;
        }
    }

    pub fn create(&self, name: impl Into<String>, fields: BTreeMap<String, Value>) {
        self.buffer(mutation::create(name, fields));
    }

    pub fn set(&self, name: impl Into<String>, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) {
        self.buffer(mutation::set(name, fields, transforms));
    }

    pub fn update(&self, name: impl Into<String>, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) {
        self.buffer(mutation::update(name, fields, transforms));
    }

    pub fn delete(&self, name: impl Into<String>) {
        self.buffer(mutation::delete(name));
    }

    pub fn transform(&self, name: impl Into<String>, transforms: Vec<(String, Transform)>) {
        self.buffer(mutation::transform(name, transforms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::conn::Environment;

    async fn fresh() -> ReadWriteTransaction {
        let pool = ClientPool::new(
            crate::apiv1::conn_pool::ConnectionManager::new(1, &Environment::Emulator("localhost:0".to_string()), &Default::default())
                .await
                .unwrap(),
            1,
        );
        ReadWriteTransaction::new(Arc::new(pool), "projects/p/databases/(default)".to_string(), Vec::new())
    }

    #[tokio::test]
    async fn buffering_a_write_moves_phase_to_writing() {
        let txn = fresh().await;
        assert_eq!(txn.phase(), Phase::Reading);
        txn.delete("projects/p/databases/(default)/documents/c/d");
        assert_eq!(txn.phase(), Phase::Writing);
    }

    #[tokio::test]
    async fn read_after_write_is_rejected() {
        let txn = fresh().await;
        txn.delete("projects/p/databases/(default)/documents/c/d");
        let result = txn.get_document("projects/p/databases/(default)/documents/c/d").await;
        assert!(matches!(result, Err(Error::ReadAfterWrite)));
    }

    #[tokio::test]
    async fn take_writes_drains_the_buffer() {
        let txn = fresh().await;
        txn.delete("projects/p/databases/(default)/documents/c/d");
        assert_eq!(txn.take_writes().len(), 1);
        assert_eq!(txn.take_writes().len(), 0);
    }
}
