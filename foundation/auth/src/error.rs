use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct TokenErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("scopes is required if the audience is none")]
    ScopeOrAudienceRequired,

    #[error("unsupported account {0}")]
    UnsupportedAccountType(String),

    #[error("refresh token is required for user account credentials")]
    RefreshTokenIsRequired,

    #[error("GOOGLE_APPLICATION_CREDENTIALS or default credentials is required: {0}")]
    CredentialsIOError(#[from] std::io::Error),

    #[error("os env error: {0}")]
    VarError(#[from] std::env::VarError),

    #[error("user home directory not found")]
    NoHomeDirectoryFound,

    #[error("server responded with error status {status}: {error}")]
    TokenErrorResponse {
        status: u16,
        error: String,
        error_description: Option<String>,
    },

    #[error("private key is required")]
    NoPrivateKeyFound,

    #[error("no credentials file found")]
    NoCredentialsFileFound,

    #[error("token is not valid or has expired")]
    InvalidToken,

    #[error("on-gce metadata lookup failed: {0}")]
    Metadata(#[from] google_cloud_metadata::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("token lock poisoned")]
    Poisoned,
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::Poisoned
    }
}
