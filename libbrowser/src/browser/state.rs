//! Browser screen state
//!
//! Immutable state structure following functional programming principles.
//! All state transitions happen through the reducer (see `reducer.rs`).

/// Root state for the browser screen
///
/// Other features may add sibling substates next to
/// `quick_action_sheet_state`; the reducer rebuilds the whole root on every
/// action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    /// Reading affordances for the displayed page
    pub quick_action_sheet_state: QuickActionSheetState,
}

/// Quick action sheet flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QuickActionSheetState {
    /// Can the current page be shown in reader view?
    pub readable: bool,

    /// Is the current page already bookmarked?
    pub bookmarked: bool,

    /// Is reader view currently on?
    pub reader_active: bool,

    /// Should the sheet bounce to draw attention?
    pub bounce_needed: bool,

    /// Can the current page be opened in an installed app?
    pub is_app_link: bool,
}

impl BrowserState {
    /// Initial state with every flag off
    pub fn new() -> Self {
        Self::default()
    }
}
