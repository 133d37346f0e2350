use travily::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_read_failed_display() {
    let err = StorageError::ReadFailed("disk full".to_string());
    assert_eq!(err.to_string(), "Storage read failed: disk full");
}

#[test]
fn storage_error_write_failed_display() {
    let err = StorageError::WriteFailed("database locked".to_string());
    assert_eq!(err.to_string(), "Storage write failed: database locked");
}

#[test]
fn storage_error_malformed_display() {
    let err = StorageError::Malformed("expected array of strings".to_string());
    assert_eq!(
        err.to_string(),
        "Malformed stored value: expected array of strings"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StorageError::ReadFailed("io".to_string()));
    assert!(err.source().is_none());
}

// === FetchError Tests ===

#[test]
fn fetch_error_display_variants() {
    assert_eq!(
        FetchError::Network("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        FetchError::Status(503).to_string(),
        "Unexpected HTTP status: 503"
    );
    assert_eq!(
        FetchError::MalformedBody("missing field `history`".to_string()).to_string(),
        "Malformed response body: missing field `history`"
    );
}

#[test]
fn fetch_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(FetchError::Status(404));
    assert!(err.source().is_none());
}

// === SessionError Tests ===

#[test]
fn session_error_display_variants() {
    assert_eq!(
        SessionError::Fetch("timeout".to_string()).to_string(),
        "Session request failed: timeout"
    );
    assert_eq!(
        SessionError::InvalidResponse("no token".to_string()).to_string(),
        "Invalid session response: no token"
    );
    assert_eq!(
        SessionError::Storage("write failed".to_string()).to_string(),
        "Session storage error: write failed"
    );
}

#[test]
fn session_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SessionError::Fetch("unreachable".to_string()));
    assert!(err.source().is_none());
}
