//! The Watch Engine (§4.4): a resumable `Listen` subscription over a single
//! query target, reassembled into ordered [`QuerySnapshot`]s.
//!
//! Grounded on the bidirectional-stream shape [`crate::apiv1::firestore_client::Client::listen`]
//! already exposes, plus the target/resume-token/existence-filter protocol
//! `google.firestore.v1.Listen` defines. The per-target pending-change
//! accumulation (coalesce to the latest state per document, diff only when a
//! snapshot-point `NO_CHANGE` arrives) follows the same shape production
//! Firestore SDKs' watch-change aggregators use.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use google_cloud_firestore_proto::firestore::v1 as pb;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use crate::document::DocumentSnapshot;
use crate::error::{Error, Result};
use crate::path::Path;
use crate::pool::ClientPool;
use crate::query::{Query, QueryComparator};
use crate::retry::Backoff;
use crate::value::Timestamp;

/// The only target id this engine ever assigns; one `Watch` drives exactly
/// one query target per stream.
const WATCH_TARGET_ID: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

#[derive(Clone, Debug)]
pub struct DocChange {
    pub kind: ChangeKind,
    pub document: DocumentSnapshot,
    pub old_index: Option<usize>,
    pub new_index: Option<usize>,
}

/// A consistent view of a query's matching documents at `read_time`, plus
/// the diff against the previously emitted snapshot.
#[derive(Clone, Debug)]
pub struct QuerySnapshot {
    pub docs: Vec<DocumentSnapshot>,
    pub doc_changes: Vec<DocChange>,
    pub read_time: Timestamp,
}

impl QuerySnapshot {
    /// Pairwise document equality ignoring `readTime`, matching
    /// `DocumentSnapshot::document_equal`.
    pub fn documents_equal(&self, other: &QuerySnapshot) -> bool {
        self.docs.len() == other.docs.len() && self.docs.iter().zip(other.docs.iter()).all(|(a, b)| a.document_equal(b))
    }
}

enum Pending {
    Put(DocumentSnapshot),
    Remove,
}

#[derive(Default)]
struct TargetState {
    current: bool,
    docs: BTreeMap<Path, DocumentSnapshot>,
    ordered: Vec<DocumentSnapshot>,
    pending: BTreeMap<Path, Pending>,
    resume_token: Vec<u8>,
    /// The `readTime` of the last emitted snapshot (§5, "emitted snapshots
    /// are strictly monotone in readTime"); a `NO_CHANGE` that would not
    /// advance past it is not treated as a snapshot point.
    last_emitted_read_time: Option<Timestamp>,
}

impl TargetState {
    /// Seeds `pending` with a removal tombstone for every document it
    /// currently holds, so the resync that follows reports a document as
    /// removed if the server doesn't send it again, rather than silently
    /// forgetting it. `docs` itself is left alone: a resent, unchanged
    /// document should diff against its prior content, not look like a
    /// fresh addition, and [`assemble_snapshot`] removes the entry from
    /// `docs` itself when it processes the tombstone.
    fn reset(&mut self) {
        self.current = false;
        self.ordered.clear();
        self.pending.clear();
        for path in self.docs.keys() {
            self.pending.insert(path.clone(), Pending::Remove);
        }
        // resume_token and last_emitted_read_time survive a RESET (§4.4):
        // only a filter mismatch discards the resume token, and readTime
        // monotonicity must hold across a RESET too.
    }

    fn discard_resume_token(&mut self) {
        self.reset();
        self.resume_token.clear();
    }
}

/// A not-yet-started query subscription. Call [`Watch::listen`] to begin
/// streaming.
pub struct Watch {
    pool: Arc<ClientPool>,
    database: String,
    parent: String,
    query: Query,
}

/// Controls a running subscription. Dropping the handle leaves the stream
/// running; call [`WatchHandle::unsubscribe`] to stop it.
pub struct WatchHandle {
    closed: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Idempotent: safe to call more than once, and safe to call from
    /// [`Drop`] impls that wrap a `WatchHandle` alongside other bookkeeping.
    pub fn unsubscribe(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}

impl Watch {
    pub(crate) fn new(pool: Arc<ClientPool>, database: String, parent: String, query: Query) -> Watch {
        Watch { pool, database, parent, query }
    }

    /// Subscribes, spawning the reconnect-on-failure loop in the
    /// background. Snapshots (and a single terminal error, if the
    /// subscription gives up) arrive on the returned channel.
    pub fn listen(self) -> (mpsc::UnboundedReceiver<Result<QuerySnapshot>>, WatchHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let closed = Arc::new(AtomicBool::new(false));
        let task_closed = closed.clone();
        let task = tokio::spawn(async move {
            run_loop(self.pool, self.database, self.parent, self.query, tx, task_closed).await;
        });
        (rx, WatchHandle { closed, task })
    }
}

enum ConnectionOutcome {
    /// The stream ended (or a retryable transport error occurred);
    /// reconnect using whatever resume token `state` now holds.
    Reconnect(Error),
    /// A protocol-level condition the drive loop itself detects (unexpected
    /// target id, a REMOVE carrying a status); surfaced to the caller
    /// without further retry.
    Fatal(Error),
}

async fn run_loop(
    pool: Arc<ClientPool>,
    database: String,
    parent: String,
    query: Query,
    tx: mpsc::UnboundedSender<Result<QuerySnapshot>>,
    closed: Arc<AtomicBool>,
) {
    let comparator = query.comparator();
    let mut state = TargetState::default();
    let mut backoff = Backoff::default();

    while !closed.load(Ordering::SeqCst) {
        match drive_one_connection(&pool, &database, &parent, &query, &comparator, &mut state, &tx).await {
            Ok(()) => return, // tx dropped by the caller unsubscribing mid-stream
            Err(ConnectionOutcome::Fatal(err)) => {
                let _ = tx.send(Err(err));
                return;
            }
            Err(ConnectionOutcome::Reconnect(err)) => {
                warn!(error = %err, "watch stream disconnected, reconnecting");
                tokio::time::sleep(backoff.next_delay()).await;
            }
        }
    }
}

fn build_add_target(database: &str, parent: &str, query: &Query, resume_token: &[u8]) -> pb::ListenRequest {
    pb::ListenRequest {
        database: database.to_string(),
        labels: Default::default(),
        target_change: Some(pb::listen_request::TargetChange::AddTarget(pb::Target {
            target_id: WATCH_TARGET_ID,
            once: false,
            target_type: Some(pb::target::TargetType::Query(pb::target::QueryTarget {
                parent: parent.to_string(),
                query_type: Some(pb::target::query_target::QueryType::StructuredQuery(query.to_structured_query())),
            })),
            resume_type: if resume_token.is_empty() {
                None
            } else {
                Some(pb::target::ResumeType::ResumeToken(resume_token.to_vec()))
            },
        })),
    }
}

async fn drive_one_connection(
    pool: &Arc<ClientPool>,
    database: &str,
    parent: &str,
    query: &Query,
    comparator: &QueryComparator,
    state: &mut TargetState,
    tx: &mpsc::UnboundedSender<Result<QuerySnapshot>>,
) -> std::result::Result<(), ConnectionOutcome> {
    let add_target = build_add_target(database, parent, query, &state.resume_token);

    // The request channel is kept open for the lifetime of the connection;
    // this engine never removes or re-adds targets mid-stream, so the
    // single `AddTarget` sent up front is the only outbound message.
    let (req_tx, req_rx) = mpsc::channel(1);
    if req_tx.send(add_target).await.is_err() {
        return Err(ConnectionOutcome::Reconnect(Error::WatchFailed(grpc_internal("listen request channel closed"))));
    }

    let mut stream = pool
        .run("listen", move |mut client| {
            let req_stream = ReceiverStream::new(req_rx);
            async move { client.listen(req_stream).await.map(|r| r.into_inner()).map_err(Error::from) }
        })
        .await
        .map_err(ConnectionOutcome::Reconnect)?;
    // `req_tx` must outlive the stream read loop below; keep it alive by
    // moving it into this scope instead of dropping it here.
    let _keep_alive = req_tx;

    loop {
        let response = match stream.message().await {
            Ok(Some(resp)) => resp,
            Ok(None) => return Err(ConnectionOutcome::Reconnect(Error::WatchFailed(grpc_internal("listen stream closed by server")))),
            Err(status) => return Err(ConnectionOutcome::Reconnect(Error::Grpc(google_cloud_gax::grpc::Status::new(status)))),
        };

        match response.response_type {
            Some(pb::listen_response::ResponseType::TargetChange(tc)) => {
                if let Some(emitted) = handle_target_change(state, comparator, tc)? {
                    if tx.send(Ok(emitted)).is_err() {
                        return Ok(()); // receiver dropped: caller unsubscribed
                    }
                }
            }
            Some(pb::listen_response::ResponseType::DocumentChange(dc)) => {
                if dc.target_ids.contains(&WATCH_TARGET_ID) {
                    if let Some(doc) = &dc.document {
                        let snapshot = DocumentSnapshot::from_proto(doc, None);
                        state.pending.insert(snapshot.reference.clone(), Pending::Put(snapshot));
                    }
                } else if dc.removed_target_ids.contains(&WATCH_TARGET_ID) {
                    if let Some(doc) = &dc.document {
                        state.pending.insert(Path::parse(&doc.name), Pending::Remove);
                    }
                }
            }
            Some(pb::listen_response::ResponseType::DocumentDelete(dd)) => {
                if dd.removed_target_ids.contains(&WATCH_TARGET_ID) {
                    state.pending.insert(Path::parse(&dd.document), Pending::Remove);
                }
            }
            Some(pb::listen_response::ResponseType::DocumentRemove(dr)) => {
                if dr.removed_target_ids.contains(&WATCH_TARGET_ID) {
                    state.pending.insert(Path::parse(&dr.document), Pending::Remove);
                }
            }
            Some(pb::listen_response::ResponseType::Filter(filter)) => {
                if filter.target_id == WATCH_TARGET_ID && filter.count as usize != expected_count(state) {
                    debug!(expected = filter.count, actual = expected_count(state), "existence filter mismatch, forcing full reconnect");
                    state.discard_resume_token();
                    return Err(ConnectionOutcome::Reconnect(Error::WatchFailed(grpc_internal("existence filter mismatch"))));
                }
            }
            None => {}
        }
    }
}

/// The document count the target would report once the currently pending
/// changes are applied, used to check an `ExistenceFilter` mid-stream
/// without having to assemble a snapshot first.
fn expected_count(state: &TargetState) -> usize {
    let mut count = state.docs.len();
    for (path, pending) in &state.pending {
        match pending {
            Pending::Put(_) if !state.docs.contains_key(path) => count += 1,
            Pending::Remove if state.docs.contains_key(path) => count -= 1,
            _ => {}
        }
    }
    count
}

fn grpc_internal(message: &str) -> google_cloud_gax::grpc::Status {
    google_cloud_gax::grpc::Status::new(tonic::Status::internal(message.to_string()))
}

/// Applies one `TargetChange` and, if it is the snapshot-point `NO_CHANGE`
/// that closes out a batch of pending changes, assembles and returns the
/// next `QuerySnapshot`.
fn handle_target_change(
    state: &mut TargetState,
    comparator: &QueryComparator,
    mut tc: pb::TargetChange,
) -> std::result::Result<Option<QuerySnapshot>, ConnectionOutcome> {
    use pb::target_change::TargetChangeType;

    let kind = TargetChangeType::try_from(tc.target_change_type).unwrap_or(TargetChangeType::NoChange);

    match kind {
        TargetChangeType::Add => {
            if !tc.target_ids.is_empty() && !tc.target_ids.contains(&WATCH_TARGET_ID) {
                return Err(ConnectionOutcome::Fatal(Error::UnexpectedTargetId));
            }
            Ok(None)
        }
        TargetChangeType::Remove => {
            let cause = tc
                .cause
                .map(|s| Error::WatchFailed(google_cloud_gax::grpc::Status::new(tonic::Status::new(tonic::Code::from(s.code), s.message))))
                .unwrap_or_else(|| Error::WatchFailed(grpc_internal("target removed by server")));
            Err(ConnectionOutcome::Fatal(cause))
        }
        TargetChangeType::Reset => {
            state.reset();
            Ok(None)
        }
        TargetChangeType::Current => {
            state.current = true;
            if !tc.resume_token.is_empty() {
                state.resume_token = std::mem::take(&mut tc.resume_token);
            }
            Ok(None)
        }
        TargetChangeType::NoChange => {
            if !tc.resume_token.is_empty() {
                state.resume_token = std::mem::take(&mut tc.resume_token);
            }
            let read_time = tc.read_time.map(|t| Timestamp { seconds: t.seconds, nanos: t.nanos });
            if !is_snapshot_point(state, &tc, read_time) {
                return Ok(None);
            }
            let read_time = read_time.expect("is_snapshot_point requires a read_time");
            state.last_emitted_read_time = Some(read_time);
            Ok(Some(assemble_snapshot(state, comparator, read_time)))
        }
    }
}

/// A `NO_CHANGE` is a snapshot point once the target has gone current and
/// either there is pending work to reconcile or no snapshot has been
/// emitted yet (the first snapshot must fire even over an empty result
/// set), and its `read_time` strictly advances past the last emitted
/// snapshot (§4.4, §5).
fn is_snapshot_point(state: &TargetState, tc: &pb::TargetChange, read_time: Option<Timestamp>) -> bool {
    let has_pushed = state.last_emitted_read_time.is_some();
    if !(state.current && tc.target_ids.is_empty() && (!state.pending.is_empty() || !has_pushed)) {
        return false;
    }
    match (read_time, state.last_emitted_read_time) {
        (Some(rt), Some(last)) => rt > last,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn assemble_snapshot(state: &mut TargetState, comparator: &QueryComparator, read_time: Timestamp) -> QuerySnapshot {
    let old_ordered = state.ordered.clone();
    let old_index_of: BTreeMap<Path, usize> = old_ordered.iter().enumerate().map(|(i, d)| (d.reference.clone(), i)).collect();

    let mut removed_paths = Vec::new();
    let mut added_paths = Vec::new();
    let mut modified_paths = Vec::new();

    for (path, pending) in std::mem::take(&mut state.pending) {
        match pending {
            Pending::Remove => {
                if state.docs.remove(&path).is_some() {
                    removed_paths.push(path);
                }
            }
            Pending::Put(doc) => match state.docs.get(&path) {
                Some(existing) if existing.document_equal(&doc) => {}
                Some(_) => {
                    state.docs.insert(path.clone(), doc);
                    modified_paths.push(path);
                }
                None => {
                    state.docs.insert(path.clone(), doc);
                    added_paths.push(path);
                }
            },
        }
    }

    let mut new_ordered: Vec<DocumentSnapshot> = state.docs.values().cloned().collect();
    new_ordered.sort_by(|a, b| comparator.compare(a, b));
    let new_index_of: BTreeMap<Path, usize> = new_ordered.iter().enumerate().map(|(i, d)| (d.reference.clone(), i)).collect();

    let mut changes = Vec::with_capacity(removed_paths.len() + added_paths.len() + modified_paths.len());
    for path in &removed_paths {
        let doc = old_ordered
            .iter()
            .find(|d| &d.reference == path)
            .cloned()
            .unwrap_or_else(|| DocumentSnapshot::missing(path.clone(), None));
        changes.push(DocChange { kind: ChangeKind::Removed, document: doc, old_index: old_index_of.get(path).copied(), new_index: None });
    }
    changes.sort_by(|a, b| b.old_index.cmp(&a.old_index));

    let mut additions: Vec<DocChange> = added_paths
        .iter()
        .map(|path| DocChange {
            kind: ChangeKind::Added,
            document: state.docs.get(path).cloned().expect("just inserted"),
            old_index: None,
            new_index: new_index_of.get(path).copied(),
        })
        .collect();
    additions.sort_by(|a, b| a.new_index.cmp(&b.new_index));

    let mut modifications: Vec<DocChange> = modified_paths
        .iter()
        .map(|path| DocChange {
            kind: ChangeKind::Modified,
            document: state.docs.get(path).cloned().expect("just inserted"),
            old_index: old_index_of.get(path).copied(),
            new_index: new_index_of.get(path).copied(),
        })
        .collect();
    modifications.sort_by(|a, b| a.new_index.cmp(&b.new_index));

    changes.extend(additions);
    changes.extend(modifications);

    state.ordered = new_ordered.clone();

    QuerySnapshot { docs: new_ordered, doc_changes: changes, read_time }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Direction;
    use crate::value::Value;
    use std::collections::BTreeMap as Map;

    fn doc(name: &str, n: i64) -> DocumentSnapshot {
        let mut fields = Map::new();
        fields.insert("n".to_string(), Value::Integer(n));
        DocumentSnapshot {
            reference: Path::parse(name),
            fields: Some(fields),
            create_time: Some(Timestamp { seconds: 1, nanos: 0 }),
            update_time: Some(Timestamp { seconds: 1, nanos: 0 }),
            read_time: None,
        }
    }

    fn comparator() -> QueryComparator {
        Query::collection(Path::root(), "c").with_order("n", Direction::Ascending).comparator()
    }

    #[test]
    fn first_snapshot_reports_every_document_as_added() {
        let mut state = TargetState { current: true, ..Default::default() };
        state.pending.insert(Path::parse("a/1"), Pending::Put(doc("a/1", 2)));
        state.pending.insert(Path::parse("a/2"), Pending::Put(doc("a/2", 1)));

        let snapshot = assemble_snapshot(&mut state, &comparator(), Timestamp { seconds: 10, nanos: 0 });

        assert_eq!(snapshot.docs.len(), 2);
        assert!(snapshot.doc_changes.iter().all(|c| c.kind == ChangeKind::Added));
        assert_eq!(snapshot.docs[0].reference, Path::parse("a/2")); // n=1 sorts first
    }

    #[test]
    fn a_later_snapshot_diffs_against_the_prior_one() {
        let mut state = TargetState { current: true, ..Default::default() };
        state.pending.insert(Path::parse("a/1"), Pending::Put(doc("a/1", 1)));
        assemble_snapshot(&mut state, &comparator(), Timestamp { seconds: 1, nanos: 0 });

        state.pending.insert(Path::parse("a/1"), Pending::Put(doc("a/1", 5)));
        state.pending.insert(Path::parse("a/2"), Pending::Put(doc("a/2", 2)));
        let snapshot = assemble_snapshot(&mut state, &comparator(), Timestamp { seconds: 2, nanos: 0 });

        assert_eq!(snapshot.docs.len(), 2);
        let kinds: Vec<ChangeKind> = snapshot.doc_changes.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&ChangeKind::Added));
        assert!(kinds.contains(&ChangeKind::Modified));
    }

    #[test]
    fn add_then_delete_within_one_window_is_a_no_op() {
        let mut state = TargetState { current: true, ..Default::default() };
        state.pending.insert(Path::parse("a/1"), Pending::Put(doc("a/1", 1)));
        state.pending.insert(Path::parse("a/1"), Pending::Remove);

        let snapshot = assemble_snapshot(&mut state, &comparator(), Timestamp { seconds: 1, nanos: 0 });

        assert!(snapshot.docs.is_empty());
        assert!(snapshot.doc_changes.is_empty());
    }

    #[test]
    fn reset_clears_ordering_and_currency_but_not_the_resume_token() {
        let mut state = TargetState::default();
        state.resume_token = vec![9, 9];
        state.docs.insert(Path::parse("a/1"), doc("a/1", 1));
        state.ordered.push(doc("a/1", 1));
        state.current = true;

        state.reset();

        assert!(state.ordered.is_empty());
        assert!(!state.current);
        assert_eq!(state.resume_token, vec![9, 9]);
    }

    #[test]
    fn reset_seeds_pending_removals_for_every_known_document() {
        let mut state = TargetState::default();
        state.docs.insert(Path::parse("a/1"), doc("a/1", 1));
        state.docs.insert(Path::parse("a/2"), doc("a/2", 2));

        state.reset();

        assert!(matches!(state.pending.get(&Path::parse("a/1")), Some(Pending::Remove)));
        assert!(matches!(state.pending.get(&Path::parse("a/2")), Some(Pending::Remove)));
        // docs itself is left intact until assemble_snapshot processes the tombstone.
        assert_eq!(state.docs.len(), 2);
    }

    #[test]
    fn filter_mismatch_discards_the_resume_token() {
        let mut state = TargetState::default();
        state.resume_token = vec![9, 9];
        state.discard_resume_token();
        assert!(state.resume_token.is_empty());
    }

    #[test]
    fn filter_mismatch_reports_the_dropped_document_as_removed_on_resync() {
        // §8 scenario 4: a filter count mismatch discards the resume token;
        // if the server never re-sends the document on resync, the eventual
        // snapshot must report it as removed.
        let mut state = TargetState { current: true, ..Default::default() };
        state.docs.insert(Path::parse("a/1"), doc("a/1", 1));
        state.discard_resume_token();

        let snapshot = assemble_snapshot(&mut state, &comparator(), Timestamp { seconds: 1, nanos: 0 });

        assert!(snapshot.docs.is_empty());
        assert_eq!(snapshot.doc_changes.len(), 1);
        assert_eq!(snapshot.doc_changes[0].kind, ChangeKind::Removed);
        assert_eq!(snapshot.doc_changes[0].document.reference, Path::parse("a/1"));
    }

    #[test]
    fn initial_no_change_is_a_snapshot_point_even_with_no_pending_changes() {
        // §8 scenario 3: ADD, CURRENT, NO_CHANGE over an empty result set
        // must still emit the first (empty) snapshot.
        let state = TargetState { current: true, ..Default::default() };
        let tc = pb::TargetChange { target_change_type: 0, target_ids: Vec::new(), cause: None, resume_token: Vec::new(), read_time: None };
        let read_time = Some(Timestamp { seconds: 1, nanos: 0 });
        assert!(is_snapshot_point(&state, &tc, read_time));
    }

    #[test]
    fn subsequent_no_change_with_no_pending_work_is_not_a_snapshot_point() {
        let mut state = TargetState { current: true, ..Default::default() };
        state.last_emitted_read_time = Some(Timestamp { seconds: 1, nanos: 0 });
        let tc = pb::TargetChange { target_change_type: 0, target_ids: Vec::new(), cause: None, resume_token: Vec::new(), read_time: None };
        let read_time = Some(Timestamp { seconds: 2, nanos: 0 });
        assert!(!is_snapshot_point(&state, &tc, read_time));
    }

    #[test]
    fn no_change_older_than_last_emitted_read_time_is_not_a_snapshot_point() {
        let mut state = TargetState { current: true, ..Default::default() };
        state.pending.insert(Path::parse("a/1"), Pending::Put(doc("a/1", 1)));
        state.last_emitted_read_time = Some(Timestamp { seconds: 10, nanos: 0 });
        let tc = pb::TargetChange { target_change_type: 0, target_ids: Vec::new(), cause: None, resume_token: Vec::new(), read_time: None };
        let stale = Some(Timestamp { seconds: 5, nanos: 0 });
        assert!(!is_snapshot_point(&state, &tc, stale));
    }
}
