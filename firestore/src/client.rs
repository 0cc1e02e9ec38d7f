//! The top-level Firestore client (§4.1, §4.2): wires the connection
//! manager, client pool, request layer, transaction engine, watch engine,
//! and bulk writer together behind a single handle. Grounded on the
//! teacher's `Client`: a thin facade over a pooled connection manager that
//! exposes read/write convenience methods plus entry points into the
//! heavier subsystems (there, sessions and transactions; here, the same
//! shape around documents, queries, transactions, and watches).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use google_cloud_firestore_proto::firestore::v1 as pb;
use tracing::debug;

use crate::apiv1::conn_pool::ConnectionManager;
use crate::bulk_writer::{BulkWriter, BulkWriterOptions};
use crate::config::FirestoreConfig;
use crate::document::{self, DocumentSnapshot};
use crate::error::{Error, Result};
use crate::mutation::{self, Transform};
use crate::path::Path;
use crate::pool::ClientPool;
use crate::query::Query;
use crate::reader::{self, ReadConsistency};
use crate::transaction::send_commit;
use crate::transaction_manager::{self, DEFAULT_MAX_ATTEMPTS};
use crate::transaction_ro::ReadOnlyTransaction;
use crate::transaction_rw::ReadWriteTransaction;
use crate::value::{Timestamp, Value};
use crate::watch::{QuerySnapshot, Watch, WatchHandle};

/// A Firestore client: safe to share across tasks (every public method takes
/// `&self`), except that [`Client::terminate`] refuses while watch
/// subscriptions it handed out are still active.
pub struct Client {
    pool: Arc<ClientPool>,
    database: String,
    active_watches: Arc<AtomicUsize>,
}

/// A handle to a [`Client::watch`] subscription. Counts against
/// [`Client::terminate`]'s active-listener check until dropped.
pub struct Subscription {
    handle: WatchHandle,
    active_watches: Arc<AtomicUsize>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        self.handle.unsubscribe();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active_watches.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Client {
    /// Connects using `config`, resolving credentials from
    /// [`FirestoreConfig::with_auth`] or `FIRESTORE_EMULATOR_HOST`.
    pub async fn new(config: FirestoreConfig) -> Result<Client> {
        let project_id = config
            .project_id
            .clone()
            .ok_or_else(|| Error::invalid_argument("project_id", "project_id must be set via with_project_id"))?;
        let database = config.database_path(&project_id);
        let connection_manager = ConnectionManager::new(config.num_channels, config.environment()?, &config.conn_options).await?;
        let pool = Arc::new(ClientPool::new(connection_manager, config.max_idle_channels));
        debug!(database, "firestore client connected");
        Ok(Client { pool, database, active_watches: Arc::new(AtomicUsize::new(0)) })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// The `projects/{p}/databases/{d}/documents` path every document and
    /// root-level collection is rooted at.
    pub fn documents_root(&self) -> Path {
        Path::parse(&format!("{}/documents", self.database))
    }

    /// Resolves a `/`-separated relative path (e.g. `"users/alovelace"`)
    /// against [`Client::documents_root`].
    pub fn doc(&self, relative_path: &str) -> Path {
        let mut path = self.documents_root();
        for segment in relative_path.split('/').filter(|s| !s.is_empty()) {
            path = path.child(segment);
        }
        path
    }

    /// A root-level collection query; for a subcollection, build the
    /// [`Query`] directly with [`Query::collection`] against a document's
    /// own path.
    pub fn collection(&self, collection_id: impl Into<String>) -> Query {
        Query::collection(self.documents_root(), collection_id)
    }

    pub async fn get_document(&self, path: &Path) -> Result<DocumentSnapshot> {
        reader::get_document(&self.pool, path.to_string(), ReadConsistency::None).await
    }

    pub async fn get_all(&self, paths: &[Path]) -> Result<Vec<DocumentSnapshot>> {
        let names = paths.iter().map(Path::to_string).collect();
        reader::batch_get_documents(&self.pool, self.database.clone(), names, ReadConsistency::None).await
    }

    pub async fn run_query(&self, query: &Query) -> Result<Vec<DocumentSnapshot>> {
        let docs = reader::run_query(&self.pool, query.parent.to_string(), query, ReadConsistency::None).await?;
        let comparator = query.comparator();
        let mut docs = docs;
        docs.sort_by(|a, b| comparator.compare(a, b));
        Ok(docs)
    }

    /// A single non-transactional write (§6 "Commit"), for callers who don't
    /// need [`Client::bulk_writer`]'s throttling or batching.
    pub async fn create(&self, path: &Path, fields: BTreeMap<String, Value>) -> Result<Timestamp> {
        self.commit_one(mutation::create(path.to_string(), fields)).await
    }

    pub async fn set(&self, path: &Path, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) -> Result<Timestamp> {
        self.commit_one(mutation::set(path.to_string(), fields, transforms)).await
    }

    pub async fn update(&self, path: &Path, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) -> Result<Timestamp> {
        self.commit_one(mutation::update(path.to_string(), fields, transforms)).await
    }

    pub async fn delete(&self, path: &Path) -> Result<Timestamp> {
        self.commit_one(mutation::delete(path.to_string())).await
    }

    async fn commit_one(&self, write: pb::Write) -> Result<Timestamp> {
        let resp = send_commit(&self.pool, self.database.clone(), vec![write], Vec::new()).await?;
        resp.commit_time
            .as_ref()
            .map(document::timestamp_from_proto)
            .ok_or_else(|| Error::invalid_argument("commit_time", "server did not return a commit time"))
    }

    /// A read-only snapshot at `read_time`, or the moment the first read
    /// binds a server-assigned transaction id if `read_time` is `None`.
    pub fn read_only_transaction(&self, read_time: Option<Timestamp>) -> ReadOnlyTransaction {
        ReadOnlyTransaction::new(self.pool.clone(), self.database.clone(), read_time)
    }

    /// Runs `callback` against a read-write transaction, retrying the whole
    /// attempt up to `max_attempts` times on a retryable failure (§4.3
    /// "Retry"). `max_attempts` of `None` uses [`DEFAULT_MAX_ATTEMPTS`].
    pub async fn run_transaction<F, Fut, T>(&self, max_attempts: Option<u32>, callback: F) -> Result<T>
    where
        F: FnMut(Arc<ReadWriteTransaction>) -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        transaction_manager::run_transaction(self.pool.clone(), self.database.clone(), max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS), callback).await
    }

    /// Subscribes to `query` (§4.4). The returned [`Subscription`] decrements
    /// [`Client::terminate`]'s active-listener count when dropped, whether
    /// or not [`Subscription::unsubscribe`] was called first.
    pub fn watch(&self, query: Query) -> (tokio::sync::mpsc::UnboundedReceiver<Result<QuerySnapshot>>, Subscription) {
        self.active_watches.fetch_add(1, Ordering::SeqCst);
        let watch = Watch::new(self.pool.clone(), self.database.clone(), query.parent.to_string(), query);
        let (rx, handle) = watch.listen();
        (rx, Subscription { handle, active_watches: self.active_watches.clone() })
    }

    /// A throttled, batched write funnel (§4.5). Unless explicitly
    /// disabled, operations wait on a ramping rate limiter before flushing.
    pub fn bulk_writer(&self, options: BulkWriterOptions) -> BulkWriter {
        BulkWriter::new(self.pool.clone(), self.database.clone(), options)
    }

    /// Refuses while any [`WatchHandle`] this client handed out is still
    /// active (§5 "Cancellation"); otherwise drains in-flight calls and
    /// closes every pooled channel.
    pub async fn terminate(self) -> Result<()> {
        let active = self.active_watches.load(Ordering::SeqCst);
        if active > 0 {
            return Err(Error::ActiveListeners(active));
        }
        self.pool.terminate().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_resolves_relative_path_against_documents_root() {
        let path = Path::parse("projects/p/databases/(default)/documents").child("users").child("ada");
        assert_eq!(path.to_string(), "projects/p/databases/(default)/documents/users/ada");
    }
}
