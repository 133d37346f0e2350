//! Search History Cache for Travily.
//!
//! Maintains a bounded, deduplicated, most-recently-used list of prior
//! search queries and exposes it as autocomplete suggestions when the
//! user has not yet typed anything. Anonymous sessions persist the list
//! in the local store; authenticated sessions hydrate it from the
//! backend's history endpoint.
//!
//! Every I/O path here is best-effort: history is a convenience feature,
//! so storage and fetch failures degrade to an empty list instead of
//! surfacing to the caller.

use tracing::{debug, warn};

use crate::database::local_store::{LocalStore, LocalStoreTrait};
use crate::types::errors::FetchError;
use crate::types::history::{HistoryEntry, HistoryList, Suggestion};
use crate::types::session::{SessionMode, SessionSnapshot};

/// Fixed local-store key for the anonymous history blob
/// (a JSON array of strings).
pub const HISTORY_STORAGE_KEY: &str = "search_history";

/// Proof that a remote hydrate was started under a particular session
/// generation. The result is applied only if no login/logout transition
/// happened while the fetch was outstanding.
#[derive(Debug, Clone, Copy)]
pub struct HydrateTicket {
    generation: u64,
}

/// Trait defining search-history cache operations.
pub trait SearchHistoryCacheTrait {
    fn record(&mut self, text: &str) -> &HistoryList;
    fn suggestions_from_history(&self) -> Vec<Suggestion>;
    fn hydrate_local(&mut self) -> &HistoryList;
    fn begin_remote_hydrate(&self) -> HydrateTicket;
    fn apply_remote_hydrate(
        &mut self,
        ticket: HydrateTicket,
        result: Result<Vec<String>, FetchError>,
    ) -> &HistoryList;
    fn on_session_change(&mut self, snapshot: &SessionSnapshot);
    fn entries(&self) -> &HistoryList;
    fn mode(&self) -> SessionMode;
}

/// Search-history cache backed by the local store for anonymous sessions.
pub struct SearchHistoryCache {
    store: LocalStore,
    entries: HistoryList,
    mode: SessionMode,
    generation: u64,
}

impl SearchHistoryCache {
    /// Creates an empty cache in anonymous mode. Call
    /// [`SearchHistoryCacheTrait::hydrate_local`] to load any persisted
    /// history.
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            entries: HistoryList::default(),
            mode: SessionMode::Anonymous,
            generation: 0,
        }
    }

    /// Writes the current list to the local store. Failures are logged
    /// and swallowed.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize search history");
                return;
            }
        };
        if let Err(e) = self.store.set(HISTORY_STORAGE_KEY, &json) {
            warn!(error = %e, "failed to persist search history");
        }
    }
}

impl SearchHistoryCacheTrait for SearchHistoryCache {
    /// Records a confirmed place selection. An existing occurrence moves
    /// to the front; the list is capped at five entries. In anonymous
    /// mode the list is written through to the local store immediately;
    /// in authenticated mode only the in-memory view is updated (the
    /// authoritative copy lives server-side).
    fn record(&mut self, text: &str) -> &HistoryList {
        let Some(entry) = HistoryEntry::new(text) else {
            return &self.entries;
        };
        self.entries.promote(entry);
        if self.mode == SessionMode::Anonymous {
            self.persist();
        }
        &self.entries
    }

    /// Maps the current list 1:1, most-recent-first, into suggestions.
    /// Pure snapshot read — never blocks on an outstanding hydrate.
    fn suggestions_from_history(&self) -> Vec<Suggestion> {
        self.entries
            .iter()
            .map(|e| Suggestion::from_history(e.text()))
            .collect()
    }

    /// Loads persisted history from the local store. An absent or
    /// malformed blob falls back to the empty list; this never fails.
    fn hydrate_local(&mut self) -> &HistoryList {
        self.entries = match self.store.get(HISTORY_STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<String>>(&blob) {
                Ok(raw) => HistoryList::from_raw(raw),
                Err(e) => {
                    warn!(error = %e, "malformed search history blob, starting empty");
                    HistoryList::default()
                }
            },
            Ok(None) => HistoryList::default(),
            Err(e) => {
                warn!(error = %e, "failed to read search history, starting empty");
                HistoryList::default()
            }
        };
        &self.entries
    }

    /// Captures the current generation before a remote fetch is issued.
    fn begin_remote_hydrate(&self) -> HydrateTicket {
        HydrateTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of a remote history fetch.
    ///
    /// A ticket from a superseded session generation is discarded so a
    /// stale result cannot overwrite the list after a login/logout
    /// transition. A fetch error degrades to the empty list and is only
    /// logged; there is no automatic retry. Server payloads pass through
    /// the same validation/dedup/cap as local ones.
    fn apply_remote_hydrate(
        &mut self,
        ticket: HydrateTicket,
        result: Result<Vec<String>, FetchError>,
    ) -> &HistoryList {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale history hydrate"
            );
            return &self.entries;
        }
        self.entries = match result {
            Ok(raw) => HistoryList::from_raw(raw),
            Err(e) => {
                warn!(error = %e, "remote history fetch failed, starting empty");
                HistoryList::default()
            }
        };
        &self.entries
    }

    /// Reacts to a session mode flip. Entering anonymous mode re-hydrates
    /// from the local store (the durable fallback for anonymous identity);
    /// entering authenticated mode clears the list pending remote hydrate.
    /// Either transition invalidates outstanding hydrate tickets.
    fn on_session_change(&mut self, snapshot: &SessionSnapshot) {
        if snapshot.mode == self.mode {
            return;
        }
        self.mode = snapshot.mode;
        self.generation = self.generation.wrapping_add(1);
        match self.mode {
            SessionMode::Anonymous => {
                self.hydrate_local();
            }
            SessionMode::Authenticated => {
                self.entries = HistoryList::default();
            }
        }
    }

    fn entries(&self) -> &HistoryList {
        &self.entries
    }

    fn mode(&self) -> SessionMode {
        self.mode
    }
}
