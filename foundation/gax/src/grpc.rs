//! Thin re-export layer over `tonic`'s transport types plus the `Status`/`Code`
//! wrapper shared by every RPC-calling crate in the workspace, so product crates
//! depend on `google_cloud_gax::grpc` instead of pinning their own `tonic` version.

use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};

pub use tonic::metadata;
pub use tonic::{IntoRequest, Request, Response, Streaming};

/// A gRPC status describing the result of an RPC call.
pub struct Status {
    /// Optional underlying error.
    pub source: tonic::Status,
}

impl Status {
    pub fn new(cause: tonic::Status) -> Self {
        Status { source: cause }
    }

    /// Get the gRPC `Code` of this `Status`.
    pub fn code(&self) -> Code {
        self.source.code().into()
    }

    /// Get the text error message of this `Status`.
    pub fn message(&self) -> &str {
        self.source.message()
    }

    /// Get the opaque error details of this `Status`.
    pub fn details(&self) -> &[u8] {
        self.source.details()
    }
}

impl StdError for Status {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.source()
    }
}

impl From<tonic::Status> for Status {
    fn from(tonic_status: tonic::Status) -> Self {
        Status { source: tonic_status }
    }
}

impl Debug for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.source, f)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.source, f)
    }
}

/// gRPC status codes used by [`Status`].
///
/// These variants match the [gRPC status codes].
///
/// [gRPC status codes]: https://github.com/grpc/grpc/blob/master/doc/statuscodes.md#status-codes-and-their-use-in-grpc
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Code {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl From<tonic::Code> for Code {
    fn from(tonic_code: tonic::Code) -> Self {
        match tonic_code {
            tonic::Code::Ok => Code::Ok,
            tonic::Code::Cancelled => Code::Cancelled,
            tonic::Code::Unknown => Code::Unknown,
            tonic::Code::InvalidArgument => Code::InvalidArgument,
            tonic::Code::DeadlineExceeded => Code::DeadlineExceeded,
            tonic::Code::NotFound => Code::NotFound,
            tonic::Code::AlreadyExists => Code::AlreadyExists,
            tonic::Code::PermissionDenied => Code::PermissionDenied,
            tonic::Code::ResourceExhausted => Code::ResourceExhausted,
            tonic::Code::FailedPrecondition => Code::FailedPrecondition,
            tonic::Code::Aborted => Code::Aborted,
            tonic::Code::OutOfRange => Code::OutOfRange,
            tonic::Code::Unimplemented => Code::Unimplemented,
            tonic::Code::Internal => Code::Internal,
            tonic::Code::Unavailable => Code::Unavailable,
            tonic::Code::DataLoss => Code::DataLoss,
            tonic::Code::Unauthenticated => Code::Unauthenticated,
        }
    }
}

impl Code {
    pub fn description(&self) -> &'static str {
        match self {
            Code::Ok => "the operation completed successfully",
            Code::Cancelled => "the operation was cancelled",
            Code::Unknown => "unknown error",
            Code::InvalidArgument => "client specified an invalid argument",
            Code::DeadlineExceeded => "deadline expired before operation could complete",
            Code::NotFound => "some requested entity was not found",
            Code::AlreadyExists => "some entity that we attempted to create already exists",
            Code::PermissionDenied => "the caller does not have permission to execute the specified operation",
            Code::ResourceExhausted => "some resource has been exhausted",
            Code::FailedPrecondition => "the system is not in a state required for the operation's execution",
            Code::Aborted => "the operation was aborted",
            Code::OutOfRange => "operation was attempted past the valid range",
            Code::Unimplemented => "operation is not implemented or not supported",
            Code::Internal => "internal error",
            Code::Unavailable => "the service is currently unavailable",
            Code::DataLoss => "unrecoverable data loss or corruption",
            Code::Unauthenticated => "the request does not have valid authentication credentials",
        }
    }

    /// Whether an RPC that failed with this code is safe to retry by default.
    /// Callers that need the two message-based overrides from the retry design
    /// (transaction-expiry commits, permanent-error markers) apply those on top.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Code::Cancelled
                | Code::Unknown
                | Code::DeadlineExceeded
                | Code::ResourceExhausted
                | Code::Aborted
                | Code::Internal
                | Code::Unavailable
                | Code::Unauthenticated
        )
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.description(), f)
    }
}
