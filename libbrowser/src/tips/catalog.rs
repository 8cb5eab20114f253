//! Built-in tips shown on the home screen

use super::tip::{Tip, TipAction, TipContent, TipKind, TipPriority};

pub const DEFAULT_BROWSER: &str = "default-browser";
pub const WHATS_NEW: &str = "whats-new";
pub const PRIVATE_TAB: &str = "private-tab";
pub const HIDE_TIPS: &str = "hide-tips";
pub const MOVING_NOTICE: &str = "moving-notice";

pub const PREF_KEY_OPEN_LINKS_IN_PRIVATE_TAB: &str = "pref_key_open_links_in_a_private_tab";
pub const PREF_KEY_DISPLAY_TIPS: &str = "pref_key_display_tips";

/// Effects for the button tips, supplied by the presentation layer.
/// Missing effects do nothing.
#[derive(Clone, Default)]
pub struct TipEffects {
    /// Open the system default-apps screen (or the help page explaining it)
    pub default_browser: Option<TipAction>,
    /// Open the release notes and mark them as seen
    pub whats_new: Option<TipAction>,
    /// Open the store listing of the new app
    pub moving_notice: Option<TipAction>,
}

/// The fixed set of tips the pool is built from
#[derive(Debug, Clone)]
pub struct TipCatalog {
    pub default_browser: Tip,
    pub whats_new: Tip,
    pub private_tab: Tip,
    pub hide_tips: Tip,
    pub moving_notice: Tip,
}

fn with_effect(tip: Tip, effect: Option<TipAction>) -> Tip {
    match effect {
        Some(action) => tip.with_action(action),
        None => tip,
    }
}

impl TipCatalog {
    pub fn new(effects: TipEffects) -> Self {
        let default_browser = Tip::new(
            DEFAULT_BROWSER,
            TipContent::new(
                "ic_firefox",
                "tip_default_browser_header",
                "tip_default_browser_description",
                "tip_default_browser_button",
            ),
            TipPriority::Low,
            TipKind::Button,
        )
        .with_color_icon(false);

        let whats_new = Tip::new(
            WHATS_NEW,
            TipContent::new(
                "ic_whats_new",
                "tip_whats_new_header",
                "tip_whats_new_description",
                "tip_whats_new_button",
            ),
            TipPriority::Medium,
            TipKind::Button,
        );

        let private_tab = Tip::new(
            PRIVATE_TAB,
            TipContent::new(
                "ic_private_browsing",
                "tip_always_private_tab_header",
                "tip_always_private_tab_description",
                "preferences_open_links_in_a_private_tab",
            ),
            TipPriority::Low,
            TipKind::Switch {
                setting_key: PREF_KEY_OPEN_LINKS_IN_PRIVATE_TAB.to_string(),
            },
        );

        let hide_tips = Tip::new(
            HIDE_TIPS,
            TipContent::new(
                "ic_info",
                "tip_hide_tips_header",
                "tip_hide_tips_description",
                "preference_display_tips",
            ),
            TipPriority::Low,
            TipKind::Switch {
                setting_key: PREF_KEY_DISPLAY_TIPS.to_string(),
            },
        );

        let moving_notice = Tip::new(
            MOVING_NOTICE,
            TipContent::new(
                "ic_warning",
                "tip_moving_header",
                "tip_moving_description",
                "tip_moving_button",
            ),
            TipPriority::High,
            TipKind::Button,
        );

        Self {
            default_browser: with_effect(default_browser, effects.default_browser),
            whats_new: with_effect(whats_new, effects.whats_new),
            private_tab,
            hide_tips,
            moving_notice: with_effect(moving_notice, effects.moving_notice),
        }
    }

    /// Look up a built-in tip by id
    pub fn get(&self, id: &str) -> Option<&Tip> {
        self.iter().find(|tip| tip.id() == id)
    }

    /// All five tips, in debug population order
    pub fn iter(&self) -> impl Iterator<Item = &Tip> {
        [
            &self.default_browser,
            &self.whats_new,
            &self.private_tab,
            &self.hide_tips,
            &self.moving_notice,
        ]
        .into_iter()
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::new(TipEffects::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_builtin_priorities() {
        let catalog = TipCatalog::default();
        assert_eq!(catalog.default_browser.priority(), TipPriority::Low);
        assert_eq!(catalog.whats_new.priority(), TipPriority::Medium);
        assert_eq!(catalog.private_tab.priority(), TipPriority::Low);
        assert_eq!(catalog.hide_tips.priority(), TipPriority::Low);
        assert_eq!(catalog.moving_notice.priority(), TipPriority::High);
    }

    #[test]
    fn test_switch_tips_carry_setting_keys() {
        let catalog = TipCatalog::default();
        assert_eq!(
            catalog.private_tab.setting_key(),
            Some(PREF_KEY_OPEN_LINKS_IN_PRIVATE_TAB)
        );
        assert_eq!(catalog.hide_tips.setting_key(), Some(PREF_KEY_DISPLAY_TIPS));
        assert_eq!(catalog.whats_new.setting_key(), None);
    }

    #[test]
    fn test_only_default_browser_icon_is_uncolored() {
        let catalog = TipCatalog::default();
        let uncolored: Vec<&str> = catalog
            .iter()
            .filter(|tip| !tip.color_icon())
            .map(Tip::id)
            .collect();
        assert_eq!(uncolored, vec![DEFAULT_BROWSER]);
    }

    #[test]
    fn test_effects_are_attached() {
        let opened = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&opened);
        let catalog = TipCatalog::new(TipEffects {
            whats_new: Some(Arc::new(move || flag.store(true, Ordering::SeqCst))),
            ..TipEffects::default()
        });

        (catalog.default_browser.action())();
        assert!(!opened.load(Ordering::SeqCst));

        let whats_new = catalog.get(WHATS_NEW).unwrap();
        (whats_new.action())();
        assert!(opened.load(Ordering::SeqCst));
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(TipCatalog::default().get("nope").is_none());
    }
}
