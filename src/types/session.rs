use serde::{Deserialize, Serialize};

/// Whether the current session is anonymous or backed by a registered
/// account. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    Anonymous,
    Authenticated,
}

/// User payload persisted alongside the session token.
///
/// Anonymous sessions carry only `anonymous_id`; registered users carry
/// `username`/`email`. Field names match the backend's camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub anonymous_id: Option<String>,
    pub is_anonymous: bool,
}

/// The explicit session-context value handed to collaborators instead of
/// ambient globals: current mode plus the credential token, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub mode: SessionMode,
    pub token: Option<String>,
}
