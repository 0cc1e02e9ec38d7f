//! The channel-multiplexed client pool (§4.1): a bag of [`Client`] handles,
//! each capped at [`CHANNEL_CONCURRENCY_CAP`] outstanding logical RPCs, with
//! idle-channel GC bounded by `max_idle`.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::apiv1::conn_pool::ConnectionManager;
use crate::apiv1::firestore_client::Client;
use crate::error::{Error, Result};

/// Default `maxIdleChannels`: at most one spare channel is retained once its
/// in-flight count drops back to zero.
pub const DEFAULT_MAX_IDLE: usize = 1;

pub struct ClientPool {
    connection_manager: ConnectionManager,
    max_idle: usize,
    clients: Mutex<Vec<Client>>,
    terminated: AtomicBool,
}

impl ClientPool {
    pub fn new(connection_manager: ConnectionManager, max_idle: usize) -> ClientPool {
        ClientPool {
            connection_manager,
            max_idle,
            clients: Mutex::new(Vec::new()),
            terminated: AtomicBool::new(false),
        }
    }

    /// Leases a client with spare capacity, invokes `f`, and releases the
    /// lease on completion. Creates a fresh client via the connection
    /// manager when every pooled client is at capacity.
    pub async fn run<F, Fut, T>(&self, tag: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(Client) -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        if self.terminated.load(Ordering::SeqCst) {
            return Err(Error::Terminated);
        }
        let client = self.lease(tag).await;
        let result = f(client.clone()).await;
        self.reap_idle().await;
        result
    }

    async fn lease(&self, tag: &'static str) -> Client {
        let mut clients = self.clients.lock().await;
        if let Some(client) = clients.iter().find(|c| c.has_spare_capacity()) {
            return client.clone();
        }
        let fresh = self.connection_manager.conn();
        debug!(tag, pooled = clients.len(), "client pool: creating new channel, all pooled clients at capacity");
        clients.push(fresh.clone());
        fresh
    }

    /// Drops clients that are both idle (`in_flight() == 0`) and in excess
    /// of `max_idle`, invoking the destructor (here, simply dropping the
    /// `tonic` channel) for each.
    async fn reap_idle(&self) {
        let mut clients = self.clients.lock().await;
        let mut idle_seen = 0usize;
        clients.retain(|c| {
            if c.in_flight() > 0 {
                return true;
            }
            idle_seen += 1;
            idle_seen <= self.max_idle
        });
    }

    /// Forbids new leases and waits until every pooled client's in-flight
    /// count has drained to zero, then destroys all clients.
    pub async fn terminate(&self) {
        self.terminated.store(true, Ordering::SeqCst);
        loop {
            let all_idle = {
                let clients = self.clients.lock().await;
                clients.iter().all(|c| c.in_flight() == 0)
            };
            if all_idle {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }
        self.clients.lock().await.clear();
    }

    pub fn num_channels(&self) -> usize {
        self.connection_manager.num()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apiv1::conn_pool::CHANNEL_CONCURRENCY_CAP;
    use google_cloud_firestore_proto::firestore::v1::firestore_client::FirestoreClient;
    use google_cloud_gax::conn::Environment;
    use tonic::transport::Channel as TonicChannel;

    fn fake_client() -> Client {
        let channel = TonicChannel::from_static("http://localhost:50051").connect_lazy();
        Client::new(FirestoreClient::new(channel), CHANNEL_CONCURRENCY_CAP)
    }

    #[tokio::test]
    async fn reap_idle_retains_up_to_max_idle() {
        let cm = ConnectionManager::new(1, &Environment::Emulator("localhost:0".to_string()), &Default::default())
            .await
            .unwrap();
        let pool = ClientPool::new(cm, 1);
        {
            let mut clients = pool.clients.lock().await;
            clients.push(fake_client());
            clients.push(fake_client());
        }
        pool.reap_idle().await;
        assert_eq!(pool.clients.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn terminate_refuses_new_leases() {
        let cm = ConnectionManager::new(1, &Environment::Emulator("localhost:0".to_string()), &Default::default())
            .await
            .unwrap();
        let pool = ClientPool::new(cm, 1);
        pool.terminate().await;
        let result = pool.run("test", |_c| async { Ok(()) }).await;
        assert!(matches!(result, Err(Error::Terminated)));
    }
}
