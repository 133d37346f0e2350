use serde::Serialize;

/// Maximum number of entries retained in a [`HistoryList`].
pub const MAX_ENTRIES: usize = 5;

/// A single recorded search term — the formatted display string the
/// geocoding provider returned for a confirmed place selection.
///
/// Always non-empty and trimmed; construct through [`HistoryEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryEntry {
    text: String,
}

impl HistoryEntry {
    /// Trims the input and returns `None` if nothing remains.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered, most-recent-first list of search terms.
///
/// Invariants: at most [`MAX_ENTRIES`] entries, no duplicate texts
/// (case-sensitive exact match). Re-inserting an existing text moves it to
/// the front rather than duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: Vec<HistoryEntry>,
}

impl HistoryList {
    /// Builds a list from externally sourced strings (persisted blob or
    /// server payload), applying validation, dedup, and the cap defensively.
    /// Order is preserved; the first valid occurrence of a text wins.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::default();
        for item in raw {
            if list.entries.len() == MAX_ENTRIES {
                break;
            }
            if let Some(entry) = HistoryEntry::new(&item) {
                if !list.contains(entry.text()) {
                    list.entries.push(entry);
                }
            }
        }
        list
    }

    /// Moves `entry` to the front, removing any prior occurrence, then
    /// truncates to [`MAX_ENTRIES`].
    pub fn promote(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.text() != entry.text());
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text() == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Texts in stored order (most-recent-first).
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text()).collect()
    }
}

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionSource {
    /// Returned by the geocoding provider's autocomplete endpoint.
    Provider,
    /// Replayed from the user's search history.
    History,
}

/// A candidate destination offered to the user.
///
/// Provider-driven and history-driven suggestions share this shape so the
/// UI can render both interchangeably; history suggestions carry no
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub formatted: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub source: SuggestionSource,
}

impl Suggestion {
    pub fn from_history(formatted: &str) -> Self {
        Self {
            formatted: formatted.to_string(),
            lat: None,
            lon: None,
            source: SuggestionSource::History,
        }
    }

    pub fn from_provider(formatted: &str, lat: f64, lon: f64) -> Self {
        Self {
            formatted: formatted.to_string(),
            lat: Some(lat),
            lon: Some(lon),
            source: SuggestionSource::Provider,
        }
    }
}
