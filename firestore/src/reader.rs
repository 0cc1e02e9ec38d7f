//! The request layer (§4.2): unary and server-streaming dispatch against a
//! pooled [`crate::apiv1::firestore_client::Client`], with the read-only
//! retry policy (five attempts, exponential backoff) and the "wait for
//! first data or error" streaming-initialization contract.

use google_cloud_firestore_proto::firestore::v1 as pb;
use google_cloud_gax::grpc::{Code, Request, Status, Streaming};
use tokio::time::sleep;

use crate::document::DocumentSnapshot;
use crate::error::{Error, Result};
use crate::pool::ClientPool;
use crate::query::Query;
use crate::retry::Backoff;
use crate::value::Timestamp;

/// Read-only unary and streaming-initiation methods retry up to this many
/// attempts (§4.2) before surfacing the last error.
pub const MAX_READ_ATTEMPTS: u32 = 5;

/// Runs a read-only unary (or streaming-initiation) call with the retry
/// policy described in §4.2: up to [`MAX_READ_ATTEMPTS`] attempts on a
/// retryable code, exponential backoff between attempts, and the
/// resource-exhaustion special case that pegs the next delay to the max.
pub async fn with_read_retry<F, Fut, T>(mut call: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut backoff = Backoff::default();
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < MAX_READ_ATTEMPTS => {
                let pegged = matches!(&err, Error::Grpc(status) if status.code() == Code::ResourceExhausted);
                let delay = if pegged { backoff.peg_to_max() } else { backoff.next_delay() };
                sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[derive(Clone)]
pub enum ReadConsistency {
    Transaction(Vec<u8>),
    /// Piggybacks a `BeginTransaction` onto this read (§4.3 lazy-begin); the
    /// response's `transaction` field carries the newly assigned id. Only
    /// meaningful on the streaming reads, which is also the only place the
    /// wire protocol allows it — `GetDocument` has no `newTransaction` arm,
    /// which is why transactional single-document reads are routed through
    /// [`batch_get_documents_tx`] instead.
    NewTransaction(pb::TransactionOptions),
    ReadTime(Timestamp),
    None,
}

impl ReadConsistency {
    fn into_get_document_selector(self) -> Option<pb::get_document_request::ConsistencySelector> {
        use pb::get_document_request::ConsistencySelector;
        match self {
            ReadConsistency::Transaction(id) => Some(ConsistencySelector::Transaction(id)),
            ReadConsistency::ReadTime(t) => Some(ConsistencySelector::ReadTime(crate::document::timestamp_to_proto(&t))),
            ReadConsistency::NewTransaction(_) => {
                unreachable!("GetDocument has no newTransaction arm; route through batch_get_documents_tx")
            }
            ReadConsistency::None => None,
        }
    }

    fn into_batch_get_selector(self) -> Option<pb::batch_get_documents_request::ConsistencySelector> {
        use pb::batch_get_documents_request::ConsistencySelector;
        match self {
            ReadConsistency::Transaction(id) => Some(ConsistencySelector::Transaction(id)),
            ReadConsistency::NewTransaction(opts) => Some(ConsistencySelector::NewTransaction(opts)),
            ReadConsistency::ReadTime(t) => Some(ConsistencySelector::ReadTime(crate::document::timestamp_to_proto(&t))),
            ReadConsistency::None => None,
        }
    }

    fn into_run_query_selector(self) -> Option<pb::run_query_request::ConsistencySelector> {
        use pb::run_query_request::ConsistencySelector;
        match self {
            ReadConsistency::Transaction(id) => Some(ConsistencySelector::Transaction(id)),
            ReadConsistency::NewTransaction(opts) => Some(ConsistencySelector::NewTransaction(opts)),
            ReadConsistency::ReadTime(t) => Some(ConsistencySelector::ReadTime(crate::document::timestamp_to_proto(&t))),
            ReadConsistency::None => None,
        }
    }
}

pub async fn get_document(pool: &ClientPool, name: String, consistency: ReadConsistency) -> Result<DocumentSnapshot> {
    let result = with_read_retry(|| {
        let name = name.clone();
        let consistency = consistency.clone();
        pool.run("get_document", move |mut client| {
            let name = name.clone();
            let consistency = consistency.clone();
            async move {
                let req = pb::GetDocumentRequest {
                    name,
                    mask: None,
                    consistency_selector: consistency.into_get_document_selector(),
                };
                client.get_document(Request::new(req)).await.map_err(Error::from)
            }
        })
    })
    .await;

    match result {
        Ok(doc) => Ok(DocumentSnapshot::from_proto(&doc.into_inner(), None)),
        Err(Error::Grpc(status)) if status.code() == Code::NotFound => {
            Ok(DocumentSnapshot::missing(crate::path::Path::parse(&name), None))
        }
        Err(err) => Err(err),
    }
}

/// `BatchGetDocuments` is a server stream keyed by requested document name;
/// the response order is not guaranteed to match the request order, so
/// results are collected into a `Vec` in the order the server returns them.
pub async fn batch_get_documents(
    pool: &ClientPool,
    database: String,
    names: Vec<String>,
    consistency: ReadConsistency,
) -> Result<Vec<DocumentSnapshot>> {
    batch_get_documents_tx(pool, database, names, consistency).await.map(|(docs, _)| docs)
}

/// As [`batch_get_documents`], but also returns the transaction id the
/// server assigned, when the request's [`ReadConsistency::NewTransaction`]
/// asked it to begin one. Empty when the request didn't ask.
pub async fn batch_get_documents_tx(
    pool: &ClientPool,
    database: String,
    names: Vec<String>,
    consistency: ReadConsistency,
) -> Result<(Vec<DocumentSnapshot>, Vec<u8>)> {
    with_read_retry(|| {
        let database = database.clone();
        let names = names.clone();
        let consistency = consistency.clone();
        pool.run("batch_get_documents", move |mut client| {
            let database = database.clone();
            let names = names.clone();
            let consistency = consistency.clone();
            async move {
                let req = pb::BatchGetDocumentsRequest {
                    database,
                    documents: names,
                    mask: None,
                    consistency_selector: consistency.into_batch_get_selector(),
                };
                let stream = client.batch_get_documents(Request::new(req)).await.map_err(Error::from)?.into_inner();
                drain_batch_get(stream).await.map_err(Error::from)
            }
        })
    })
    .await
}

async fn drain_batch_get(
    mut stream: Streaming<pb::BatchGetDocumentsResponse>,
) -> std::result::Result<(Vec<DocumentSnapshot>, Vec<u8>), Status> {
    let mut out = Vec::new();
    let mut transaction = Vec::new();
    // The first message primes the stream per the "first data or error"
    // initialization contract; a transport error here rejects the whole
    // call and is retried by `with_read_retry`, exactly as a later error
    // inside the loop is not.
    while let Some(resp) = stream.message().await? {
        if !resp.transaction.is_empty() {
            transaction = resp.transaction.clone();
        }
        let read_time = resp.read_time.as_ref().map(crate::document::timestamp_from_proto);
        match resp.result {
            Some(pb::batch_get_documents_response::Result::Found(doc)) => {
                out.push(DocumentSnapshot::from_proto(&doc, read_time));
            }
            Some(pb::batch_get_documents_response::Result::Missing(name)) => {
                out.push(DocumentSnapshot::missing(crate::path::Path::parse(&name), read_time));
            }
            None => {}
        }
    }
    Ok((out, transaction))
}

pub async fn run_query(
    pool: &ClientPool,
    parent: String,
    query: &Query,
    consistency: ReadConsistency,
) -> Result<Vec<DocumentSnapshot>> {
    run_query_tx(pool, parent, query, consistency).await.map(|(docs, _)| docs)
}

/// As [`run_query`], but also returns the transaction id assigned by a
/// [`ReadConsistency::NewTransaction`] request, empty otherwise.
pub async fn run_query_tx(
    pool: &ClientPool,
    parent: String,
    query: &Query,
    consistency: ReadConsistency,
) -> Result<(Vec<DocumentSnapshot>, Vec<u8>)> {
    let structured_query = query.to_structured_query();
    with_read_retry(|| {
        let parent = parent.clone();
        let structured_query = structured_query.clone();
        let consistency = consistency.clone();
        pool.run("run_query", move |mut client| {
            let parent = parent.clone();
            let structured_query = structured_query.clone();
            let consistency = consistency.clone();
            async move {
                let req = pb::RunQueryRequest {
                    parent,
                    query_type: Some(pb::run_query_request::QueryType::StructuredQuery(structured_query)),
                    consistency_selector: consistency.into_run_query_selector(),
                    explain_options: None,
                };
                let stream = client.run_query(Request::new(req)).await.map_err(Error::from)?.into_inner();
                drain_run_query(stream).await.map_err(Error::from)
            }
        })
    })
    .await
}

async fn drain_run_query(
    mut stream: Streaming<pb::RunQueryResponse>,
) -> std::result::Result<(Vec<DocumentSnapshot>, Vec<u8>), Status> {
    let mut out = Vec::new();
    let mut transaction = Vec::new();
    while let Some(resp) = stream.message().await? {
        if !resp.transaction.is_empty() {
            transaction = resp.transaction.clone();
        }
        let read_time = resp.read_time.as_ref().map(crate::document::timestamp_from_proto);
        if let Some(doc) = resp.document {
            out.push(DocumentSnapshot::from_proto(&doc, read_time));
        }
    }
    Ok((out, transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_up_to_max_attempts_on_retryable_code() {
        let attempts = AtomicU32::new(0);
        let result: Result<()> = with_read_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::Grpc(Status::new(tonic::Status::unavailable("down")))) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), MAX_READ_ATTEMPTS);
    }

    #[tokio::test]
    async fn does_not_retry_non_retryable_code() {
        let attempts = AtomicU32::new(0);
        let result: Result<()> = with_read_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::Grpc(Status::new(tonic::Status::not_found("missing")))) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_without_retry_on_first_try() {
        let attempts = AtomicU32::new(0);
        let result = with_read_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Ok(42) }
        })
        .await
        .unwrap();
        assert_eq!(result, 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
