//! Session Manager for Travily.
//!
//! Owns the current session mode, credential token, and user payload,
//! persisted in the local store under fixed keys. Anonymous bootstrap
//! retries with capped exponential backoff; if the backend stays
//! unreachable, a locally issued anonymous id keeps the app usable.

use tokio::time::{sleep, Duration};
use tracing::warn;
use uuid::Uuid;

use crate::database::local_store::{LocalStore, LocalStoreTrait};
use crate::services::auth_api::{AuthApi, AuthSession};
use crate::types::errors::SessionError;
use crate::types::session::{AuthUser, SessionMode, SessionSnapshot};

/// Fixed local-store keys for the persisted credential and user payload.
pub const TOKEN_STORAGE_KEY: &str = "travily_token";
pub const USER_STORAGE_KEY: &str = "travily_user";

const MAX_BOOTSTRAP_ATTEMPTS: u32 = 4;
const BOOTSTRAP_BASE_DELAY_MS: u64 = 1000;
const BOOTSTRAP_MAX_DELAY_MS: u64 = 8000;

/// Trait defining the synchronous session-state surface.
pub trait SessionManagerTrait {
    fn snapshot(&self) -> SessionSnapshot;
    fn mode(&self) -> SessionMode;
    fn token(&self) -> Option<&str>;
    fn current_user(&self) -> Option<&AuthUser>;
    fn apply_login(&mut self, session: AuthSession) -> Result<(), SessionError>;
    fn logout(&mut self);
}

/// Session manager backed by the local store.
pub struct SessionManager {
    store: LocalStore,
    mode: SessionMode,
    token: Option<String>,
    user: Option<AuthUser>,
}

impl SessionManager {
    /// Creates a logged-out manager in anonymous mode with no credential.
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            mode: SessionMode::Anonymous,
            token: None,
            user: None,
        }
    }

    /// Restores a persisted token and user payload from the local store.
    /// Returns `true` if both were present and parseable. A malformed user
    /// payload is discarded rather than propagated.
    pub fn load_persisted(&mut self) -> bool {
        let token = match self.store.get(TOKEN_STORAGE_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "failed to read persisted token");
                return false;
            }
        };
        let user = match self.store.get(USER_STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<AuthUser>(&blob) {
                Ok(user) => user,
                Err(e) => {
                    warn!(error = %e, "malformed persisted user payload");
                    return false;
                }
            },
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "failed to read persisted user payload");
                return false;
            }
        };

        self.mode = if user.is_anonymous {
            SessionMode::Anonymous
        } else {
            SessionMode::Authenticated
        };
        self.token = Some(token);
        self.user = Some(user);
        true
    }

    /// Bootstraps session state on startup: restore and verify a persisted
    /// credential, falling back to a fresh anonymous session when the
    /// token is absent or rejected.
    pub async fn initialize(&mut self, api: &AuthApi) {
        if self.load_persisted() {
            if let Some(token) = self.token.clone() {
                match api.verify(&token).await {
                    Ok(true) => return,
                    Ok(false) => {
                        warn!("persisted token rejected by backend");
                        self.logout();
                    }
                    Err(e) => {
                        // Backend unreachable: keep the persisted session
                        // rather than discarding a possibly valid one.
                        warn!(error = %e, "token verification failed, keeping persisted session");
                        return;
                    }
                }
            }
        }
        self.bootstrap_anonymous(api).await;
    }

    /// Creates an anonymous session, retrying with capped exponential
    /// backoff. After the final attempt, issues a local anonymous id so
    /// the app remains usable offline.
    pub async fn bootstrap_anonymous(&mut self, api: &AuthApi) {
        for attempt in 0..MAX_BOOTSTRAP_ATTEMPTS {
            match api.create_anonymous_session().await {
                Ok(session) => {
                    let user = AuthUser {
                        anonymous_id: Some(session.anonymous_id),
                        is_anonymous: true,
                        ..AuthUser::default()
                    };
                    self.apply_session(session.token, user);
                    return;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "anonymous session bootstrap failed");
                    if attempt + 1 < MAX_BOOTSTRAP_ATTEMPTS {
                        let delay = (BOOTSTRAP_BASE_DELAY_MS << attempt).min(BOOTSTRAP_MAX_DELAY_MS);
                        sleep(Duration::from_millis(delay)).await;
                    }
                }
            }
        }

        warn!("anonymous bootstrap exhausted retries, issuing local anonymous id");
        let local_id = Uuid::new_v4().to_string();
        let user = AuthUser {
            anonymous_id: Some(local_id.clone()),
            is_anonymous: true,
            ..AuthUser::default()
        };
        self.apply_session(local_id, user);
    }

    /// Logs in with account credentials and applies the resulting session.
    pub async fn login(
        &mut self,
        api: &AuthApi,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let anonymous_id = self.anonymous_id();
        let session = api
            .login(email, password, anonymous_id.as_deref())
            .await
            .map_err(|e| SessionError::Fetch(e.to_string()))?;
        self.apply_login(session)
    }

    /// Registers a new account and applies the resulting session.
    pub async fn register(
        &mut self,
        api: &AuthApi,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let anonymous_id = self.anonymous_id();
        let session = api
            .register(username, email, password, anonymous_id.as_deref())
            .await
            .map_err(|e| SessionError::Fetch(e.to_string()))?;
        self.apply_login(session)
    }

    fn anonymous_id(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.anonymous_id.clone())
    }

    /// Sets session state and persists it. Persistence failures are
    /// logged and swallowed: an unpersisted session still works for the
    /// rest of this run.
    fn apply_session(&mut self, token: String, user: AuthUser) {
        self.mode = if user.is_anonymous {
            SessionMode::Anonymous
        } else {
            SessionMode::Authenticated
        };

        if let Err(e) = self.store.set(TOKEN_STORAGE_KEY, &token) {
            warn!(error = %e, "failed to persist session token");
        }
        match serde_json::to_string(&user) {
            Ok(blob) => {
                if let Err(e) = self.store.set(USER_STORAGE_KEY, &blob) {
                    warn!(error = %e, "failed to persist user payload");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize user payload"),
        }

        self.token = Some(token);
        self.user = Some(user);
    }
}

impl SessionManagerTrait for SessionManager {
    /// Returns the session-context value handed to collaborators.
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            token: self.token.clone(),
        }
    }

    fn mode(&self) -> SessionMode {
        self.mode
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Applies a successful login/register response.
    fn apply_login(&mut self, session: AuthSession) -> Result<(), SessionError> {
        if session.token.is_empty() {
            return Err(SessionError::InvalidResponse(
                "response contained an empty token".to_string(),
            ));
        }
        let mut user = session.user;
        user.is_anonymous = false;
        self.apply_session(session.token, user);
        Ok(())
    }

    /// Drops the current session and removes persisted credentials,
    /// returning to an anonymous, logged-out state.
    fn logout(&mut self) {
        if let Err(e) = self.store.remove(TOKEN_STORAGE_KEY) {
            warn!(error = %e, "failed to remove persisted token");
        }
        if let Err(e) = self.store.remove(USER_STORAGE_KEY) {
            warn!(error = %e, "failed to remove persisted user payload");
        }
        self.mode = SessionMode::Anonymous;
        self.token = None;
        self.user = None;
    }
}
