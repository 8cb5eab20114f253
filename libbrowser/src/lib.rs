//! libbrowser - browser screen state and home-screen tips
//!
//! Two independent pieces that a view layer composes:
//!
//! - [`store`]: a unidirectional state store (actions, pure reducer,
//!   subscribers), specialised for the browser screen in [`browser`]
//! - [`tips`]: priority-ranked selection of the tip to show on the home screen

pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tips;

// Re-export commonly used types
pub use browser::{
    browser_store, BrowserAction, BrowserState, BrowserStore, QuickActionSheetAction,
    QuickActionSheetState,
};
pub use config::Config;
pub use error::{BrowserError, Result};
pub use store::{Store, Subscription};
pub use tips::{Settings, Tip, TipPool, TipPriority, TipSelector};
