//! Property-based tests for the filter engine and projection
//!
//! Tests invariants:
//! - Visible set is an order-preserving subsequence of the collection
//! - Membership equals the conjunction of the book/kind/text predicates
//! - Re-filtering the visible set changes nothing
//! - Book index is the sorted, duplicate-free set of books
//! - Preview truncation law
//! - All kinds hidden yields nothing

use chrono::{NaiveDate, NaiveDateTime};
use kindleclip::filter::filter_entries;
use kindleclip::presentation::{preview_text, ELLIPSIS};
use kindleclip::{summarize, visible, ClipCollection, ClipEntry, ClipKind, FilterState};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_kind() -> impl Strategy<Value = ClipKind> {
    prop_oneof![
        Just(ClipKind::Highlight),
        Just(ClipKind::Note),
        Just(ClipKind::Bookmark),
    ]
}

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (0u32..365, 0u32..24, 0u32..60).prop_map(|(day, h, m)| {
        NaiveDate::from_yo_opt(2011, day + 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    })
}

/// Few distinct books so selections actually hit
fn arb_book() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Anathem".to_string()),
        Just("Dune".to_string()),
        Just("dune".to_string()),
        Just("The Name of the Rose".to_string()),
    ]
}

fn arb_entry() -> impl Strategy<Value = ClipEntry> {
    (arb_kind(), arb_book(), arb_timestamp(), "[a-c \n]{0,12}")
        .prop_map(|(kind, book, ts, text)| ClipEntry::new(kind, book, ts, text))
}

fn arb_collection() -> impl Strategy<Value = ClipCollection> {
    prop::collection::vec(arb_entry(), 0..40).prop_map(ClipCollection::new)
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(arb_book()),
        prop::option::of("[a-c ]{0,3}"),
    )
        .prop_map(|(notes, bookmarks, highlights, book, text)| {
            let mut state = FilterState::show_all();
            state.set_kind_shown(ClipKind::Note, notes);
            state.set_kind_shown(ClipKind::Bookmark, bookmarks);
            state.set_kind_shown(ClipKind::Highlight, highlights);
            state.select_book(book);
            state.set_text_query(text.as_deref());
            state
        })
}

/// Each predicate evaluated on its own
fn accepted_individually(entry: &ClipEntry, state: &FilterState) -> bool {
    let book_ok = state.selected_book().map_or(true, |b| entry.book == b);
    let kind_ok = state.is_kind_shown(entry.kind);
    let text_ok = state.text_query().map_or(true, |q| entry.text.contains(q));
    book_ok && kind_ok && text_ok
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the visible set keeps the collection's relative order
    #[test]
    fn prop_visible_is_ordered_subsequence(collection in arb_collection(), state in arb_state()) {
        let shown = visible(&collection, &state);
        let mut cursor = collection.entries().iter();
        for entry in &shown {
            prop_assert!(
                cursor.any(|e| std::ptr::eq(e, *entry)),
                "Visible entry out of collection order"
            );
        }
    }

    /// Property: an entry is visible iff every predicate accepts it
    #[test]
    fn prop_conjunction(collection in arb_collection(), state in arb_state()) {
        let shown = visible(&collection, &state);
        let expected: Vec<&ClipEntry> = collection
            .entries()
            .iter()
            .filter(|e| accepted_individually(e, &state))
            .collect();
        prop_assert_eq!(shown, expected);
    }

    /// Property: filtering the visible set again is a no-op
    #[test]
    fn prop_idempotent(collection in arb_collection(), state in arb_state()) {
        let once = visible(&collection, &state);
        let twice = filter_entries(once.iter().copied(), &state);
        prop_assert_eq!(once, twice);
    }

    /// Property: books() is the sorted, duplicate-free set of entry books
    #[test]
    fn prop_book_index(collection in arb_collection()) {
        let mut expected: Vec<String> = collection.entries().iter().map(|e| e.book.clone()).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(collection.books(), expected.as_slice());
        prop_assert!(collection.books().windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: preview keeps short text and truncates long text to 99 chars + marker
    #[test]
    fn prop_truncation_law(text in "[a-zé\n ]{0,160}") {
        let preview = preview_text(&text);
        let len = text.chars().count();
        if len <= 100 {
            prop_assert_eq!(preview, text.replace('\n', " "));
        } else {
            let kept: String = text.chars().take(99).collect();
            prop_assert_eq!(preview, format!("{}{}", kept.replace('\n', " "), ELLIPSIS));
        }
    }

    /// Property: all kinds hidden means nothing visible and a zero status
    #[test]
    fn prop_all_kinds_hidden(collection in arb_collection(), state in arb_state()) {
        let mut state = state;
        for kind in ClipKind::ALL {
            state.set_kind_shown(kind, false);
        }
        let shown = visible(&collection, &state);
        prop_assert!(shown.is_empty());
        prop_assert_eq!(summarize(&shown), "Showing 0 clippings");
    }

    /// Property: same inputs, same output
    #[test]
    fn prop_deterministic(collection in arb_collection(), state in arb_state()) {
        prop_assert_eq!(visible(&collection, &state), visible(&collection, &state));
    }
}

#[test]
fn empty_collection_reports_zero() {
    let collection = ClipCollection::empty();
    let shown = visible(&collection, &FilterState::show_all());
    assert!(shown.is_empty());
    assert_eq!(summarize(&shown), "Showing 0 clippings");
}
