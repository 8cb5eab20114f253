//! Pure reducer functions for the browser store
//!
//! `(BrowserState, BrowserAction) -> BrowserState`
//!
//! The top-level reducer only routes each action family to its own reducer.
//! Both are total over their closed action sets: there is no error path and
//! no catch-all arm, so a new action variant fails to compile until it is
//! handled here.

use super::actions::{BrowserAction, QuickActionSheetAction};
use super::state::{BrowserState, QuickActionSheetState};

/// Top-level reducer for [`BrowserStore`](super::BrowserStore)
///
/// # Purity Guarantees
///
/// - No I/O
/// - No mutation of the incoming snapshot (it is taken by value and a new
///   root is returned)
/// - Deterministic (same inputs -> same output)
pub fn browser_state_reducer(state: BrowserState, action: BrowserAction) -> BrowserState {
    match action {
        BrowserAction::QuickActionSheet(action) => reduce_quick_action_sheet(state, action),
    }
}

/// Apply a quick action sheet action. Each variant touches exactly one flag.
pub fn reduce_quick_action_sheet(mut state: BrowserState, action: QuickActionSheetAction) -> BrowserState {
    let sheet = state.quick_action_sheet_state;

    // Only the sheet is replaced; any sibling substate moves through as is
    state.quick_action_sheet_state = match action {
        QuickActionSheetAction::BookmarkedStateChange { bookmarked } => QuickActionSheetState {
            bookmarked,
            ..sheet
        },
        QuickActionSheetAction::ReadableStateChange { readable } => QuickActionSheetState {
            readable,
            ..sheet
        },
        QuickActionSheetAction::ReaderActiveStateChange { active } => QuickActionSheetState {
            reader_active: active,
            ..sheet
        },
        QuickActionSheetAction::AppLinkStateChange { is_app_link } => QuickActionSheetState {
            is_app_link,
            ..sheet
        },
        QuickActionSheetAction::BounceNeededChange => QuickActionSheetState {
            bounce_needed: true,
            ..sheet
        },
    };

    state
}
