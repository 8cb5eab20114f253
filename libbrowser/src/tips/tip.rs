//! Tip value types

use std::fmt;
use std::sync::Arc;

/// Effect run by the presentation layer when the user acts on a tip.
/// The core only carries it.
pub type TipAction = Arc<dyn Fn() + Send + Sync>;

/// Urgency tier of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipPriority {
    /// Not dismissable, shown on a colored background
    High,
    Medium,
    Low,
}

/// How the tip's call to action is rendered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TipKind {
    Button,
    /// Toggles the preference stored under `setting_key`
    Switch { setting_key: String },
}

/// Opaque reference to renderable content (icon, string resource, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display content of a tip
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TipContent {
    pub icon: ContentRef,
    pub title: ContentRef,
    pub description: ContentRef,
    pub button: ContentRef,
}

impl TipContent {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        Self {
            icon: ContentRef::new(icon),
            title: ContentRef::new(title),
            description: ContentRef::new(description),
            button: ContentRef::new(button),
        }
    }
}

/// A candidate advisory prompt
#[derive(Clone)]
pub struct Tip {
    id: String,
    content: TipContent,
    priority: TipPriority,
    kind: TipKind,
    color_icon: bool,
    action: TipAction,
}

fn no_op() -> TipAction {
    Arc::new(|| {})
}

impl Tip {
    /// Create a tip with a colored icon and a no-op action
    pub fn new(id: impl Into<String>, content: TipContent, priority: TipPriority, kind: TipKind) -> Self {
        Self {
            id: id.into(),
            content,
            priority,
            kind,
            color_icon: true,
            action: no_op(),
        }
    }

    /// Shorthand for a content-less tip, handy when only selection matters
    pub fn bare(id: impl Into<String>, priority: TipPriority) -> Self {
        let id = id.into();
        let content = TipContent::new("", id.as_str(), "", "");
        Self::new(id, content, priority, TipKind::Button)
    }

    pub fn with_action(self, action: TipAction) -> Self {
        Self { action, ..self }
    }

    pub fn with_color_icon(self, color_icon: bool) -> Self {
        Self { color_icon, ..self }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &TipContent {
        &self.content
    }

    pub fn priority(&self) -> TipPriority {
        self.priority
    }

    pub fn kind(&self) -> &TipKind {
        &self.kind
    }

    /// Preference key for switch tips
    pub fn setting_key(&self) -> Option<&str> {
        match &self.kind {
            TipKind::Button => None,
            TipKind::Switch { setting_key } => Some(setting_key),
        }
    }

    pub fn color_icon(&self) -> bool {
        self.color_icon
    }

    pub fn action(&self) -> &TipAction {
        &self.action
    }
}

impl fmt::Debug for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tip")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("kind", &self.kind)
            .field("color_icon", &self.color_icon)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_setting_key_only_for_switches() {
        let button = Tip::bare("a", TipPriority::Low);
        assert_eq!(button.setting_key(), None);

        let switch = Tip::new(
            "b",
            TipContent::new("icon", "title", "description", "button"),
            TipPriority::Low,
            TipKind::Switch {
                setting_key: "pref_key".to_string(),
            },
        );
        assert_eq!(switch.setting_key(), Some("pref_key"));
    }

    #[test]
    fn test_action_is_carried_not_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let tip = Tip::bare("a", TipPriority::High)
            .with_action(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        let copy = tip.clone();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        (copy.action())();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_skips_action() {
        let tip = Tip::bare("whats-new", TipPriority::Medium).with_color_icon(false);
        let debug = format!("{:?}", tip);
        assert!(debug.contains("whats-new"));
        assert!(debug.contains("color_icon: false"));
    }
}
