//! Browser screen store
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! [`browser_store`] wires these into a [`Store`] that the view layer can
//! subscribe to.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{BrowserAction, QuickActionSheetAction};
pub use reducer::{browser_state_reducer, reduce_quick_action_sheet};
pub use state::{BrowserState, QuickActionSheetState};

use crate::store::Store;

/// Store holding the browser screen state
pub type BrowserStore = Store<BrowserState, BrowserAction>;

/// Create a browser store starting from `initial`
pub fn browser_store(initial: BrowserState) -> BrowserStore {
    Store::new(initial, browser_state_reducer)
}
