//! Home-screen tips
//!
//! ```text
//! Settings ──▶ TipPool::populate ──▶ TipSelector ──▶ select()     -> Option<&Tip>
//!                  ▲                                select_all() -> &[Tip]
//!              TipCatalog (built-in tips + host effects)
//! ```
//!
//! The pool is built once per session; selection is a pure read over it.

pub mod catalog;
pub mod pool;
pub mod selector;
pub mod settings;
pub mod tip;

pub use catalog::{TipCatalog, TipEffects};
pub use pool::TipPool;
pub use selector::TipSelector;
pub use settings::{Settings, StaticSettings};
pub use tip::{ContentRef, Tip, TipAction, TipContent, TipKind, TipPriority};
