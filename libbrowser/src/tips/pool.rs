//! Candidate tip pool
//!
//! A pool is built once from the settings in effect at startup and never
//! changes afterwards. To start over, build a new pool.

use super::catalog::TipCatalog;
use super::settings::Settings;
use super::tip::Tip;

/// Ordered, immutable set of candidate tips
#[derive(Debug, Clone, Default)]
pub struct TipPool {
    tips: Vec<Tip>,
}

impl TipPool {
    /// Build the pool used in normal operation
    ///
    /// Order: default-browser (unless already default), whats-new (when a
    /// recent update should be highlighted), then private-tab and hide-tips.
    /// The moving notice is never included.
    pub fn populate(settings: &dyn Settings, catalog: &TipCatalog) -> Self {
        let mut tips = Vec::with_capacity(4);

        if !settings.is_default_browser() {
            tips.push(catalog.default_browser.clone());
        }

        if settings.should_highlight_recent_update() {
            tips.push(catalog.whats_new.clone());
        }

        tips.push(catalog.private_tab.clone());
        tips.push(catalog.hide_tips.clone());

        tracing::debug!(
            tips = ?tips.iter().map(Tip::id).collect::<Vec<_>>(),
            "Populated tip pool"
        );
        Self { tips }
    }

    /// Every built-in tip regardless of settings, for testing and demoing
    pub fn force_all(catalog: &TipCatalog) -> Self {
        catalog.iter().cloned().collect()
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tip> {
        self.tips.iter()
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl FromIterator<Tip> for TipPool {
    fn from_iter<I: IntoIterator<Item = Tip>>(iter: I) -> Self {
        Self {
            tips: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TipPool {
    type Item = &'a Tip;
    type IntoIter = std::slice::Iter<'a, Tip>;

    fn into_iter(self) -> Self::IntoIter {
        self.tips.iter()
    }
}
