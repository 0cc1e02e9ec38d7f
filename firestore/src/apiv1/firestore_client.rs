//! Thin wrapper around the generated `FirestoreClient` that tracks
//! outstanding logical RPCs so the [`crate::pool::ClientPool`] can enforce
//! the per-channel concurrency cap (`C = 100`) described in the client pool
//! contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures_core::Stream;
use google_cloud_firestore_proto::firestore::v1 as pb;
use google_cloud_firestore_proto::firestore::v1::firestore_client::FirestoreClient;
use google_cloud_gax::conn::Channel;
use google_cloud_gax::grpc::{Request, Response, Status, Streaming};

/// Decrements the shared in-flight counter when the RPC that incremented it
/// completes, whatever the outcome.
struct Lease(Arc<AtomicUsize>);

impl Drop for Lease {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One pooled channel plus its in-flight counter. Cheap to clone: clones
/// share the same underlying `tonic` channel and counter, so leasing the
/// same logical client out to several concurrent callers is exactly the
/// "decrement on completion" accounting the pool relies on.
#[derive(Clone)]
pub struct Client {
    inner: FirestoreClient<Channel>,
    in_flight: Arc<AtomicUsize>,
    capacity: usize,
}

impl Client {
    pub fn new(inner: FirestoreClient<Channel>, capacity: usize) -> Client {
        Client {
            inner,
            in_flight: Arc::new(AtomicUsize::new(0)),
            capacity,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn has_spare_capacity(&self) -> bool {
        self.in_flight() < self.capacity
    }

    fn lease(&self) -> Lease {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        Lease(self.in_flight.clone())
    }

    pub async fn get_document(&mut self, req: Request<pb::GetDocumentRequest>) -> Result<Response<pb::Document>, Status> {
        let _l = self.lease();
        self.inner.get_document(req).await
    }

    pub async fn list_documents(
        &mut self,
        req: Request<pb::ListDocumentsRequest>,
    ) -> Result<Response<pb::ListDocumentsResponse>, Status> {
        let _l = self.lease();
        self.inner.list_documents(req).await
    }

    pub async fn create_document(
        &mut self,
        req: Request<pb::CreateDocumentRequest>,
    ) -> Result<Response<pb::Document>, Status> {
        let _l = self.lease();
        self.inner.create_document(req).await
    }

    pub async fn update_document(
        &mut self,
        req: Request<pb::UpdateDocumentRequest>,
    ) -> Result<Response<pb::Document>, Status> {
        let _l = self.lease();
        self.inner.update_document(req).await
    }

    pub async fn delete_document(
        &mut self,
        req: Request<pb::DeleteDocumentRequest>,
    ) -> Result<Response<()>, Status> {
        let _l = self.lease();
        self.inner.delete_document(req).await
    }

    pub async fn batch_get_documents(
        &mut self,
        req: Request<pb::BatchGetDocumentsRequest>,
    ) -> Result<Response<Streaming<pb::BatchGetDocumentsResponse>>, Status> {
        let _l = self.lease();
        self.inner.batch_get_documents(req).await
    }

    pub async fn begin_transaction(
        &mut self,
        req: Request<pb::BeginTransactionRequest>,
    ) -> Result<Response<pb::BeginTransactionResponse>, Status> {
        let _l = self.lease();
        self.inner.begin_transaction(req).await
    }

    pub async fn commit(&mut self, req: Request<pb::CommitRequest>) -> Result<Response<pb::CommitResponse>, Status> {
        let _l = self.lease();
        self.inner.commit(req).await
    }

    pub async fn rollback(&mut self, req: Request<pb::RollbackRequest>) -> Result<Response<()>, Status> {
        let _l = self.lease();
        self.inner.rollback(req).await
    }

    pub async fn run_query(
        &mut self,
        req: Request<pb::RunQueryRequest>,
    ) -> Result<Response<Streaming<pb::RunQueryResponse>>, Status> {
        let _l = self.lease();
        self.inner.run_query(req).await
    }

    pub async fn run_aggregation_query(
        &mut self,
        req: Request<pb::RunAggregationQueryRequest>,
    ) -> Result<Response<Streaming<pb::RunAggregationQueryResponse>>, Status> {
        let _l = self.lease();
        self.inner.run_aggregation_query(req).await
    }

    pub async fn list_collection_ids(
        &mut self,
        req: Request<pb::ListCollectionIdsRequest>,
    ) -> Result<Response<pb::ListCollectionIdsResponse>, Status> {
        let _l = self.lease();
        self.inner.list_collection_ids(req).await
    }

    /// Bidirectional `Listen`. The lease is held only for the call that opens
    /// the stream, matching the request layer's "first datum or error"
    /// initialization contract (§4.2); the watch engine owns the stream's
    /// lifetime after that.
    pub async fn listen<S>(&mut self, req: S) -> Result<Response<Streaming<pb::ListenResponse>>, Status>
    where
        S: Stream<Item = pb::ListenRequest> + Send + 'static,
    {
        let _l = self.lease();
        self.inner.listen(req).await
    }

    pub async fn write<S>(&mut self, req: S) -> Result<Response<Streaming<pb::WriteResponse>>, Status>
    where
        S: Stream<Item = pb::WriteRequest> + Send + 'static,
    {
        let _l = self.lease();
        self.inner.write(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_client_has_spare_capacity() {
        // Constructing a real FirestoreClient needs a live channel; the
        // in-flight accounting is exercised directly instead.
        let counter = Arc::new(AtomicUsize::new(0));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn lease_decrements_on_drop() {
        let counter = Arc::new(AtomicUsize::new(1));
        {
            let _lease = Lease(counter.clone());
            counter.fetch_add(1, Ordering::SeqCst);
            assert_eq!(counter.load(Ordering::SeqCst), 2);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
