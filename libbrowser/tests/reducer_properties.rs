//! Property-based tests for the browser reducer
//!
//! These tests verify key invariants hold across all states and actions.

use libbrowser::browser::{
    browser_state_reducer, BrowserAction, BrowserState, QuickActionSheetAction, QuickActionSheetState,
};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sheet() -> impl Strategy<Value = QuickActionSheetState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(readable, bookmarked, reader_active, bounce_needed, is_app_link)| QuickActionSheetState {
            readable,
            bookmarked,
            reader_active,
            bounce_needed,
            is_app_link,
        },
    )
}

fn arb_state() -> impl Strategy<Value = BrowserState> {
    arb_sheet().prop_map(|quick_action_sheet_state| BrowserState {
        quick_action_sheet_state,
    })
}

fn arb_sheet_action() -> impl Strategy<Value = QuickActionSheetAction> {
    prop_oneof![
        any::<bool>().prop_map(|bookmarked| QuickActionSheetAction::BookmarkedStateChange { bookmarked }),
        any::<bool>().prop_map(|readable| QuickActionSheetAction::ReadableStateChange { readable }),
        any::<bool>().prop_map(|active| QuickActionSheetAction::ReaderActiveStateChange { active }),
        any::<bool>().prop_map(|is_app_link| QuickActionSheetAction::AppLinkStateChange { is_app_link }),
        Just(QuickActionSheetAction::BounceNeededChange),
    ]
}

/// The sheet with the flag the action targets overwritten by hand
fn expected_sheet(sheet: QuickActionSheetState, action: QuickActionSheetAction) -> QuickActionSheetState {
    let mut expected = sheet;
    match action {
        QuickActionSheetAction::BookmarkedStateChange { bookmarked } => expected.bookmarked = bookmarked,
        QuickActionSheetAction::ReadableStateChange { readable } => expected.readable = readable,
        QuickActionSheetAction::ReaderActiveStateChange { active } => expected.reader_active = active,
        QuickActionSheetAction::AppLinkStateChange { is_app_link } => expected.is_app_link = is_app_link,
        QuickActionSheetAction::BounceNeededChange => expected.bounce_needed = true,
    }
    expected
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_reducer_never_mutates_input(state in arb_state(), action in arb_sheet_action()) {
        let before = state.clone();
        let _ = browser_state_reducer(state.clone(), BrowserAction::QuickActionSheet(action));
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_each_action_touches_exactly_one_field(state in arb_state(), action in arb_sheet_action()) {
        let next = browser_state_reducer(state.clone(), action.into());
        prop_assert_eq!(
            next.quick_action_sheet_state,
            expected_sheet(state.quick_action_sheet_state, action)
        );
    }

    #[test]
    fn prop_bounce_is_idempotent(state in arb_state()) {
        let once = browser_state_reducer(state, QuickActionSheetAction::BounceNeededChange.into());
        let twice = browser_state_reducer(once.clone(), QuickActionSheetAction::BounceNeededChange.into());
        prop_assert!(once.quick_action_sheet_state.bounce_needed);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_bounce_survives_other_actions(
        state in arb_state(),
        actions in prop::collection::vec(arb_sheet_action(), 0..16),
    ) {
        let mut current = browser_state_reducer(state, QuickActionSheetAction::BounceNeededChange.into());
        for action in actions {
            current = browser_state_reducer(current, action.into());
            prop_assert!(current.quick_action_sheet_state.bounce_needed);
        }
    }

    #[test]
    fn prop_reducer_is_deterministic(state in arb_state(), action in arb_sheet_action()) {
        let a = browser_state_reducer(state.clone(), action.into());
        let b = browser_state_reducer(state, action.into());
        prop_assert_eq!(a, b);
    }
}
