pub mod conn_pool;
pub mod firestore_client;
