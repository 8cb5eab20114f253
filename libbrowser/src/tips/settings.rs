//! Settings consumed by tip population and selection
//!
//! The core never reads or writes persisted preferences. Hosts implement
//! [`Settings`] over whatever storage they use.

use serde::{Deserialize, Serialize};

pub trait Settings {
    /// Is this browser already the system default?
    fn is_default_browser(&self) -> bool;

    /// Has the user left tips enabled?
    fn should_display_tips(&self) -> bool;

    /// Should the "what's new" tip advertise a recent update?
    fn should_highlight_recent_update(&self) -> bool;
}

/// Fixed settings values, for hosts that already hold them, for the
/// `[settings]` config table, and for tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticSettings {
    pub is_default_browser: bool,
    pub display_tips: bool,
    pub highlight_recent_update: bool,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            is_default_browser: false,
            display_tips: true,
            highlight_recent_update: false,
        }
    }
}

impl Settings for StaticSettings {
    fn is_default_browser(&self) -> bool {
        self.is_default_browser
    }

    fn should_display_tips(&self) -> bool {
        self.display_tips
    }

    fn should_highlight_recent_update(&self) -> bool {
        self.highlight_recent_update
    }
}
