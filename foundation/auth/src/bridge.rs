use std::sync::Arc;

use async_trait::async_trait;
use token_source::{TokenSource, TokenSourceProvider};

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::project::{create_token_source_from_project, project, Config, Project};
use crate::token_source::TokenSource as InternalTokenSource;

/// Default [`TokenSourceProvider`] used by every product crate's `with_auth()`
/// helper: reads Application Default Credentials, falling back to the GCE/GCF/
/// Cloud Run metadata server, and exposes the result through the workspace-wide
/// `token_source` contract.
#[derive(Debug)]
pub struct DefaultTokenSourceProvider {
    token_source: Arc<dyn InternalTokenSource>,
    pub project_id: Option<String>,
    pub source_credentials: Option<Box<CredentialsFile>>,
}

impl DefaultTokenSourceProvider {
    pub async fn new(config: Config<'_>) -> Result<Self, Error> {
        let project = project().await?;
        let (project_id, source_credentials) = match &project {
            Project::FromMetadataServer(info) => (info.project_id.clone(), None),
            Project::FromFile(cred) => (cred.project_id.clone(), Some(cred.clone())),
        };
        let token_source = create_token_source_from_project(&project, config).await?;
        Ok(Self {
            token_source: Arc::from(token_source),
            project_id,
            source_credentials,
        })
    }
}

impl TokenSourceProvider for DefaultTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(BridgedTokenSource {
            inner: self.token_source.clone(),
        })
    }
}

#[derive(Debug)]
struct BridgedTokenSource {
    inner: Arc<dyn InternalTokenSource>,
}

#[async_trait]
impl TokenSource for BridgedTokenSource {
    async fn token(&self) -> Result<String, Box<dyn std::error::Error>> {
        let token = self
            .inner
            .token()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;
        Ok(token.value())
    }
}
