//! # google-cloud-default
//!
//! Google Cloud Platform default configuration for google-cloud-rust.
//!
//! ## Quick Start
//!
//! * [firestore](https://github.com/yoshidan/google-cloud-rust/tree/main/firestore)
//!
use async_trait::async_trait;

use google_cloud_auth::error::Error;

#[async_trait]
pub trait WithAuthExt {
    async fn with_auth(mut self) -> Result<Self, Error>
    where
        Self: Sized;
}

#[cfg(feature = "firestore")]
#[async_trait]
impl WithAuthExt for google_cloud_firestore::config::FirestoreConfig {
    async fn with_auth(self) -> Result<Self, Error> {
        if self.is_emulator() {
            return Ok(self);
        }
        let ts = google_cloud_auth::DefaultTokenSourceProvider::new(
            google_cloud_auth::Config::default()
                .with_audience(google_cloud_firestore::apiv1::conn_pool::AUDIENCE)
                .with_scopes(&google_cloud_firestore::apiv1::conn_pool::SCOPES),
        )
        .await?;
        let project_id = ts.project_id.clone();
        let mut config = self.with_auth(Box::new(ts));
        if let Some(project_id) = project_id {
            config = config.with_project_id(project_id);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use google_cloud_firestore::config::FirestoreConfig;

    use crate::WithAuthExt;

    #[tokio::test]
    async fn test_firestore() {
        let config = FirestoreConfig::default().with_auth().await.unwrap();
        assert!(!config.is_emulator());
    }
}
