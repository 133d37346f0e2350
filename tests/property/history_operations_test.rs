//! Property-based tests for search-history operations.
//!
//! These verify the HistoryList invariants — bounded length, no duplicate
//! texts, most-recent-first ordering — over arbitrary sequences of
//! recorded destinations, through the same cache interface the UI uses.

use std::sync::Arc;

use proptest::prelude::*;
use travily::database::{Database, LocalStore};
use travily::managers::search_history::{SearchHistoryCache, SearchHistoryCacheTrait};
use travily::types::history::{HistoryList, MAX_ENTRIES};

/// Strategy for generating plausible destination display strings.
fn arb_destination() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}(, [A-Z][a-z]{2,10})?"
}

/// Strategy for sequences of recorded destinations, longer than the cap
/// often enough to exercise eviction.
fn arb_record_sequence() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_destination(), 0..20)
}

fn fresh_cache() -> SearchHistoryCache {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    SearchHistoryCache::new(LocalStore::new(db))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // For any sequence of record calls, the list never exceeds the cap
    // and never contains duplicate texts.
    #[test]
    fn recorded_history_is_bounded_and_deduplicated(seq in arb_record_sequence()) {
        let mut cache = fresh_cache();
        for dest in &seq {
            cache.record(dest);
        }

        let texts = cache.entries().texts();
        prop_assert!(texts.len() <= MAX_ENTRIES, "list exceeded cap: {:?}", texts);
        for (i, a) in texts.iter().enumerate() {
            for b in texts.iter().skip(i + 1) {
                prop_assert_ne!(a, b, "duplicate text in history: {:?}", texts);
            }
        }
    }

    // The most recently recorded destination is always at index 0, and
    // recording it again leaves the length unchanged.
    #[test]
    fn last_recorded_destination_is_first(
        seq in arb_record_sequence(),
        last in arb_destination(),
    ) {
        let mut cache = fresh_cache();
        for dest in &seq {
            cache.record(dest);
        }
        cache.record(&last);
        let len_after_first = cache.entries().len();
        cache.record(&last);

        prop_assert_eq!(cache.entries().len(), len_after_first);
        prop_assert_eq!(cache.entries().texts()[0], last.trim());
    }

    // A defensively built list from arbitrary raw strings honors the same
    // invariants and preserves first-occurrence order.
    #[test]
    fn from_raw_is_bounded_deduplicated_and_order_preserving(
        raw in proptest::collection::vec("[A-Za-z ]{0,12}", 0..15)
    ) {
        let list = HistoryList::from_raw(raw.clone());

        prop_assert!(list.len() <= MAX_ENTRIES);
        let texts = list.texts();
        for (i, a) in texts.iter().enumerate() {
            for b in texts.iter().skip(i + 1) {
                prop_assert_ne!(a, b);
            }
        }

        // Every retained text appears in the raw input, and relative order
        // of first occurrences is preserved.
        let mut cursor = 0;
        for text in &texts {
            let pos = raw[cursor..]
                .iter()
                .position(|r| r.trim() == *text)
                .map(|p| cursor + p);
            prop_assert!(pos.is_some(), "text {:?} out of order or missing", text);
            cursor = pos.unwrap() + 1;
        }
    }
}
