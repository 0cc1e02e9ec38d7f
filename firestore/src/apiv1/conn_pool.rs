use google_cloud_firestore_proto::firestore::v1::firestore_client::FirestoreClient;
use google_cloud_gax::conn::{ConnectionManager as GaxConnectionManager, ConnectionOptions, Environment};

use crate::apiv1::firestore_client::Client;

/// OAuth audience Firestore channels authenticate against.
pub const AUDIENCE: &str = "https://firestore.googleapis.com/";
pub(crate) const DOMAIN_NAME: &str = "firestore.googleapis.com";

/// OAuth scopes requested for a real (non-emulator) Firestore channel.
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/datastore",
];

/// Per-channel cap on outstanding logical RPCs. HTTP/2 already multiplexes
/// concurrent streams over one TCP connection; this bounds how many the pool
/// will hand out against a single channel before preferring another.
pub const CHANNEL_CONCURRENCY_CAP: usize = 100;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Conn(#[from] google_cloud_gax::conn::Error),
}

/// A bag of `FirestoreClient` channels, round-robined by the embedded
/// `google_cloud_gax::conn::ConnectionManager`.
pub struct ConnectionManager {
    inner: GaxConnectionManager,
}

impl ConnectionManager {
    pub async fn new(
        pool_size: usize,
        environment: &Environment,
        conn_options: &ConnectionOptions,
    ) -> Result<Self, Error> {
        let inner = GaxConnectionManager::new(pool_size, DOMAIN_NAME, AUDIENCE, environment, conn_options).await?;
        Ok(ConnectionManager { inner })
    }

    pub fn num(&self) -> usize {
        self.inner.num()
    }

    pub fn conn(&self) -> Client {
        Client::new(FirestoreClient::new(self.inner.conn()), CHANNEL_CONCURRENCY_CAP)
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager").field("num", &self.num()).finish()
    }
}
