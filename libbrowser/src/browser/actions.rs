//! Actions for the browser store
//!
//! Every requested change to [`BrowserState`](super::BrowserState) is an
//! action. Actions are plain data; the reducer (see `reducer.rs`) decides
//! what they mean.
//!
//! Actions are grouped into closed families, one per feature. The root enum
//! wraps each family, so adding a family forces every `match` on
//! [`BrowserAction`] to handle it.

/// Root action type accepted by the browser store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Quick action sheet updates
    QuickActionSheet(QuickActionSheetAction),
}

/// Changes to the quick action sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionSheetAction {
    /// Bookmark status of the current page changed
    BookmarkedStateChange { bookmarked: bool },

    /// Reader view availability changed
    ReadableStateChange { readable: bool },

    /// Reader view was turned on or off
    ReaderActiveStateChange { active: bool },

    /// The current page became (or stopped being) an app link
    AppLinkStateChange { is_app_link: bool },

    /// Ask the sheet to bounce. There is no action that clears it.
    BounceNeededChange,
}

impl From<QuickActionSheetAction> for BrowserAction {
    fn from(action: QuickActionSheetAction) -> Self {
        BrowserAction::QuickActionSheet(action)
    }
}
