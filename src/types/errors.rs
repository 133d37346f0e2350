use std::fmt;

// === StorageError ===

/// Errors related to local key-value persistence.
#[derive(Debug)]
pub enum StorageError {
    /// Reading a value from the local store failed.
    ReadFailed(String),
    /// Writing a value to the local store failed.
    WriteFailed(String),
    /// A persisted value did not have the expected shape.
    Malformed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Malformed(msg) => write!(f, "Malformed stored value: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === FetchError ===

/// Errors related to backend HTTP requests.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    Network(String),
    /// The backend returned a non-success HTTP status.
    Status(u16),
    /// The response body was not the expected shape.
    MalformedBody(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            FetchError::MalformedBody(msg) => write!(f, "Malformed response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === SessionError ===

/// Errors related to session management operations.
#[derive(Debug)]
pub enum SessionError {
    /// A login or register request failed.
    Fetch(String),
    /// The backend response was missing the token or user payload.
    InvalidResponse(String),
    /// Persisting session credentials failed.
    Storage(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Fetch(msg) => write!(f, "Session request failed: {}", msg),
            SessionError::InvalidResponse(msg) => {
                write!(f, "Invalid session response: {}", msg)
            }
            SessionError::Storage(msg) => write!(f, "Session storage error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}
