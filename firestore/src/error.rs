//! The single `thiserror`-derived error type every fallible public operation
//! in this crate returns. gRPC failures are carried as
//! [`google_cloud_gax::grpc::Status`] so retry classification (see
//! [`crate::retry`]) is centralized instead of re-derived per component.

use google_cloud_gax::grpc::Status;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid argument `{argument}`: {message}")]
    InvalidArgument { argument: &'static str, message: String },

    #[error(transparent)]
    Grpc(#[from] Status),

    #[error(transparent)]
    Connection(#[from] google_cloud_gax::conn::Error),

    #[error(transparent)]
    ConnectionPool(#[from] crate::apiv1::conn_pool::Error),

    #[error("client pool has been terminated")]
    Terminated,

    #[error("cannot terminate client while {0} watch subscription(s) are still active")]
    ActiveListeners(usize),

    #[error("transaction retry limit ({attempts}) exceeded, last error: {last}")]
    TransactionRetriesExhausted { attempts: u32, last: Box<Error> },

    #[error("cannot read after a write has been buffered on this transaction")]
    ReadAfterWrite,

    #[error("read-only transactions cannot buffer writes")]
    WriteOnReadOnly,

    #[error("watch subscription terminated: {0}")]
    WatchFailed(Status),

    #[error("watch reported an unexpected target id")]
    UnexpectedTargetId,

    #[error("bulk writer has already been closed")]
    BulkWriterClosed,

    #[error("server did not return a transaction id for a newTransaction request")]
    NoTransactionIdReturned,
}

impl Error {
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Error {
        Error::InvalidArgument { argument, message: message.into() }
    }

    /// Whether this error is retryable per the classification table in §7,
    /// applying the transaction-expiry override on top of the plain code.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Grpc(status) => crate::retry::should_retry(status.code(), status.message()),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
