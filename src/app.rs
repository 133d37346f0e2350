//! App Core for Travily.
//!
//! Central struct wiring the session manager, search-history cache, and
//! backend API clients into the flows the search UI drives.

use std::sync::Arc;

use tracing::warn;

use crate::database::connection::Database;
use crate::database::local_store::LocalStore;
use crate::managers::search_history::{SearchHistoryCache, SearchHistoryCacheTrait};
use crate::managers::session_manager::{SessionManager, SessionManagerTrait};
use crate::services::auth_api::AuthApi;
use crate::services::history_api::HistoryApi;
use crate::services::places_api::PlacesApi;
use crate::types::errors::SessionError;
use crate::types::history::{Suggestion, SuggestionSource};
use crate::types::place::Place;
use crate::types::session::SessionMode;

/// Central application struct holding the managers and API clients.
pub struct App {
    pub db: Arc<Database>,
    pub session_manager: SessionManager,
    pub search_history: SearchHistoryCache,
    pub auth_api: AuthApi,
    pub history_api: HistoryApi,
    pub places_api: PlacesApi,
}

impl App {
    /// Creates a new App over a database at `db_path`, talking to the
    /// backend at `base_url`.
    pub fn new(db_path: &str, base_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Ok(Self::with_database(db, base_url))
    }

    /// Creates an App over an already-open database. Used by tests with
    /// in-memory databases.
    pub fn with_database(db: Arc<Database>, base_url: &str) -> Self {
        let store = LocalStore::new(db.clone());
        let session_manager = SessionManager::new(store.clone());
        let search_history = SearchHistoryCache::new(store);

        Self {
            db,
            session_manager,
            search_history,
            auth_api: AuthApi::new(base_url),
            history_api: HistoryApi::new(base_url),
            places_api: PlacesApi::new(base_url),
        }
    }

    /// Startup sequence: bootstrap the session, then hydrate the cache
    /// for the resulting mode.
    pub async fn startup(&mut self) {
        self.session_manager.initialize(&self.auth_api).await;

        match self.session_manager.mode() {
            SessionMode::Anonymous => {
                self.search_history.hydrate_local();
            }
            SessionMode::Authenticated => {
                let snapshot = self.session_manager.snapshot();
                self.search_history.on_session_change(&snapshot);
                self.refresh_remote_history().await;
            }
        }
    }

    /// Fetches the authenticated user's saved history and applies it,
    /// unless a session transition superseded the request while it was
    /// outstanding.
    async fn refresh_remote_history(&mut self) {
        let Some(token) = self.session_manager.token().map(str::to_string) else {
            return;
        };
        let ticket = self.search_history.begin_remote_hydrate();
        let result = self.history_api.fetch_history(&token).await;
        self.search_history.apply_remote_hydrate(ticket, result);
    }

    /// Provider autocomplete for a partial query. History membership is
    /// marked so the UI can badge suggestions the user searched before.
    /// Provider failure degrades to no suggestions.
    pub async fn autocomplete(&self, text: &str) -> Vec<Suggestion> {
        let token = self.session_manager.token();
        match self.places_api.autocomplete(text, token).await {
            Ok(mut suggestions) => {
                for suggestion in &mut suggestions {
                    if self.search_history.entries().contains(&suggestion.formatted) {
                        suggestion.source = SuggestionSource::History;
                    }
                }
                suggestions
            }
            Err(e) => {
                warn!(error = %e, "autocomplete request failed");
                Vec::new()
            }
        }
    }

    /// Suggestions to show when the search field gains focus: history,
    /// but only while the query is still empty.
    pub fn focus_suggestions(&self, query: &str) -> Vec<Suggestion> {
        if query.trim().is_empty() {
            self.search_history.suggestions_from_history()
        } else {
            Vec::new()
        }
    }

    /// Confirms a destination selection: fetches nearby sights and
    /// records the destination into search history. A places failure
    /// still records the selection.
    pub async fn select_destination(&mut self, formatted: &str, lat: f64, lon: f64) -> Vec<Place> {
        let token = self.session_manager.token().map(str::to_string);
        let places = match self
            .places_api
            .nearby_sights(lat, lon, formatted, token.as_deref())
            .await
        {
            Ok(places) => places,
            Err(e) => {
                warn!(error = %e, "places request failed");
                Vec::new()
            }
        };
        self.search_history.record(formatted);
        places
    }

    /// Logs in, flips the cache to authenticated mode, and hydrates it
    /// from the backend.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        self.session_manager
            .login(&self.auth_api, email, password)
            .await?;
        let snapshot = self.session_manager.snapshot();
        self.search_history.on_session_change(&snapshot);
        self.refresh_remote_history().await;
        Ok(())
    }

    /// Registers a new account; otherwise identical to [`App::login`].
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.session_manager
            .register(&self.auth_api, username, email, password)
            .await?;
        let snapshot = self.session_manager.snapshot();
        self.search_history.on_session_change(&snapshot);
        self.refresh_remote_history().await;
        Ok(())
    }

    /// Logs out and returns the cache to locally persisted history.
    pub fn logout(&mut self) {
        self.session_manager.logout();
        let snapshot = self.session_manager.snapshot();
        self.search_history.on_session_change(&snapshot);
    }
}
