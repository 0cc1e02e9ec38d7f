//! Read-only transactions (§4.3): a single consistent snapshot, either
//! pinned to an explicit `readTime` or lazily bound to the id the first read
//! acquires.

use std::sync::Arc;

use google_cloud_firestore_proto::firestore::v1 as pb;

use crate::document::DocumentSnapshot;
use crate::error::Result;
use crate::path::Path;
use crate::pool::ClientPool;
use crate::query::Query;
use crate::reader::{self, ReadConsistency};
use crate::transaction::{IdCell, IdOutcome};
use crate::value::Timestamp;

/// A read-only snapshot: `get`/`get_all`/`run_query` always observe the same
/// point in time, whether that point is a caller-supplied `readTime` or the
/// moment the first read binds a server-assigned transaction id.
pub struct ReadOnlyTransaction {
    pool: Arc<ClientPool>,
    database: String,
    read_time: Option<Timestamp>,
    id: IdCell,
}

impl ReadOnlyTransaction {
    pub(crate) fn new(pool: Arc<ClientPool>, database: String, read_time: Option<Timestamp>) -> ReadOnlyTransaction {
        ReadOnlyTransaction { pool, database, read_time, id: IdCell::new() }
    }

    fn new_transaction_options() -> pb::TransactionOptions {
        pb::TransactionOptions {
            mode: Some(pb::transaction_options::Mode::ReadOnly(pb::transaction_options::ReadOnly {
                consistency_selector: None,
            })),
        }
    }

    pub async fn get_document(&self, name: impl Into<String>) -> Result<DocumentSnapshot> {
        let name = name.into();
        let docs = self.get_all(vec![name.clone()]).await?;
        Ok(docs.into_iter().next().unwrap_or_else(|| DocumentSnapshot::missing(Path::parse(&name), None)))
    }

    pub async fn get_all(&self, names: Vec<String>) -> Result<Vec<DocumentSnapshot>> {
        if let Some(read_time) = &self.read_time {
            return reader::batch_get_documents(&self.pool, self.database.clone(), names, ReadConsistency::ReadTime(read_time.clone())).await;
        }
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
                    ReadConsistency::NewTransaction(Self::new_transaction_options()),
                )
                .await
            })
            .await?;
        match outcome {
            IdOutcome::Acquired(docs) => Ok(docs),
            IdOutcome::AlreadySet(id) => {
                reader::batch_get_documents(&self.pool, self.database.clone(), names, ReadConsistency::Transaction(id)).await
            }
        }
    }

    pub async fn run_query(&self, parent: impl Into<String>, query: &Query) -> Result<Vec<DocumentSnapshot>> {
        let parent = parent.into();
        if let Some(read_time) = &self.read_time {
            return reader::run_query(&self.pool, parent, query, ReadConsistency::ReadTime(read_time.clone())).await;
        }
        if let Some(id) = self.id.get() {
            return reader::run_query(&self.pool, parent, query, ReadConsistency::Transaction(id)).await;
        }
        let pool = &self.pool;
        let acquiring_parent = parent.clone();
        let outcome = self
            .id
            .resolve(|| async move {
                reader::run_query_tx(pool, acquiring_parent, query, ReadConsistency::NewTransaction(Self::new_transaction_options())).await
            })
            .await?;
        match outcome {
            IdOutcome::Acquired(docs) => Ok(docs),
            IdOutcome::AlreadySet(id) => reader::run_query(&self.pool, parent, query, ReadConsistency::Transaction(id)).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transaction_options_request_read_only_mode() {
        let opts = ReadOnlyTransaction::new_transaction_options();
        assert!(matches!(opts.mode, Some(pb::transaction_options::Mode::ReadOnly(_))));
    }
}
