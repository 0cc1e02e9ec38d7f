#![allow(clippy::result_large_err)]
//! # google-cloud-firestore
//!
//! Google Cloud Platform Firestore client library.
//!
//! * [About Cloud Firestore](https://cloud.google.com/firestore/)
//! * [Firestore API Documentation](https://cloud.google.com/firestore/docs)
//! * [Rust client Documentation](#Documentation)
//!
//! ## Quickstart
//! Create a [`Client`](client::Client) and talk to Firestore the same way the other clients in
//! this workspace are used: a `FirestoreConfig` wires up credentials and the underlying channel
//! pool, and the client exposes documents, queries, transactions and watches on top of it.
//!
//! ```
//! use google_cloud_firestore::client::Client;
//! use google_cloud_firestore::config::FirestoreConfig;
//! use google_cloud_firestore::value::Value;
//! use std::collections::BTreeMap;
//!
//! async fn run(config: FirestoreConfig) -> Result<(), google_cloud_firestore::error::Error> {
//!     let client = Client::new(config).await?;
//!
//!     // Write a document.
//!     let path = client.doc("users/alovelace");
//!     let mut fields = BTreeMap::new();
//!     fields.insert("name".to_string(), Value::String("Ada Lovelace".to_string()));
//!     client.set(&path, fields, Vec::new()).await?;
//!
//!     // Read it back.
//!     let snapshot = client.get_document(&path).await?;
//!     assert!(snapshot.exists());
//!
//!     // Run a query over a collection.
//!     let query = client.collection("users");
//!     let docs = client.run_query(&query).await?;
//!
//!     // Run a read-write transaction with automatic retry.
//!     client
//!         .run_transaction(None, |tx| {
//!             let name = path.to_string();
//!             async move {
//!                 let _doc = tx.get_document(name.clone()).await?;
//!                 tx.delete(name);
//!                 Ok(())
//!             }
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## <a name="Documentation"></a>Documentation
//!
//! ### Overview
//! * [Creating a Client](#CreatingAClient)
//! * [Paths](#Paths)
//! * [Documents and Snapshots](#DocumentsAndSnapshots)
//! * [Queries](#Queries)
//! * [Transactions](#Transactions)
//! * [Watches](#Watches)
//! * [BulkWriter](#BulkWriter)
//! * [Values](#Values)
//!
//! ### <a name="CreatingAClient"></a>Creating a Client
//!
//! [`FirestoreConfig`](config::FirestoreConfig) resolves credentials the same way every client in
//! this workspace does: via an explicit [`with_auth`](config::FirestoreConfig::with_auth) call
//! (see `google-cloud-default`'s `WithAuthExt` for the usual entry point), or automatically
//! against the Firestore emulator when `FIRESTORE_EMULATOR_HOST` is set.
//!
//! ### <a name="Paths"></a>Paths
//!
//! [`Path`](path::Path) models a `/`-separated resource name. [`Client::doc`](client::Client::doc)
//! and [`Client::collection`](client::Client::collection) resolve relative paths against the
//! client's own `projects/{p}/databases/{d}/documents` root.
//!
//! ### <a name="DocumentsAndSnapshots"></a>Documents and Snapshots
//!
//! Reads return a [`DocumentSnapshot`](document::DocumentSnapshot), which carries its fields as a
//! [`Value`](value::Value) tree whether or not the document exists (a missing document is a
//! snapshot with `fields: None`, not an error). Writes are expressed with the builder functions in
//! [`mutation`] and committed either directly through [`Client`](client::Client), inside a
//! [`transaction`], or batched through a [`BulkWriter`](bulk_writer::BulkWriter).
//!
//! ### <a name="Queries"></a>Queries
//!
//! [`Query`](query::Query) builds a structured query over a collection or collection group; results
//! are ordered client-side by [`Query::comparator`](query::Query::comparator) to match what the
//! server would have returned, since stream order across retries is not itself guaranteed.
//!
//! ### <a name="Transactions"></a>Transactions
//!
//! [`Client::run_transaction`](client::Client::run_transaction) retries the whole callback on a
//! retryable failure. [`Client::read_only_transaction`](client::Client::read_only_transaction)
//! gives a consistent read-only snapshot without the retry machinery.
//!
//! ### <a name="Watches"></a>Watches
//!
//! [`Client::watch`](client::Client::watch) subscribes to a query and streams
//! [`QuerySnapshot`](watch::QuerySnapshot)s as the result set changes, reconnecting transparently
//! on a dropped stream.
//!
//! ### <a name="BulkWriter"></a>BulkWriter
//!
//! [`Client::bulk_writer`](client::Client::bulk_writer) returns a throttled, batched write funnel
//! for bulk imports and backfills; see [`bulk_writer`] and [`rate_limiter`].
//!
//! ### <a name="Values"></a>Values
//!
//! [`Value`](value::Value) is a tagged union over every Firestore field type, with a total order
//! matching the server's own sort semantics across mixed types.
pub mod apiv1;
pub mod bulk_writer;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod mutation;
pub mod path;
pub mod pool;
pub mod query;
pub mod rate_limiter;
pub mod reader;
pub mod retry;
pub mod transaction;
pub mod transaction_manager;
pub mod transaction_ro;
pub mod transaction_rw;
pub mod value;
pub mod watch;
