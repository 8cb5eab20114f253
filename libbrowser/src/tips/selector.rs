//! Tip selection
//!
//! Picks at most one tip from a [`TipPool`]:
//!
//! 1. Nothing when the pool is empty or tips are turned off.
//! 2. The first HIGH tip in pool order.
//! 3. Otherwise the first MEDIUM tip in pool order.
//! 4. Otherwise a uniformly random tip drawn from the whole pool.
//!
//! Step 4 draws over every tip in the pool, not a LOW-only subset. Any HIGH
//! or MEDIUM tip would have been returned by an earlier step, so in practice
//! the draw is over LOW tips.

use rand::seq::SliceRandom;
use rand::Rng;

use super::pool::TipPool;
use super::settings::Settings;
use super::tip::{Tip, TipPriority};

/// Chooses which tip the home screen should show
#[derive(Debug, Clone, Default)]
pub struct TipSelector {
    pool: TipPool,
}

impl TipSelector {
    pub fn new(pool: TipPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &TipPool {
        &self.pool
    }

    /// Select a tip using the thread-local random source
    pub fn select(&self, settings: &dyn Settings) -> Option<&Tip> {
        self.select_with_rng(settings, &mut rand::thread_rng())
    }

    /// Select a tip, drawing any random fallback from `rng`
    pub fn select_with_rng<R>(&self, settings: &dyn Settings, rng: &mut R) -> Option<&Tip>
    where
        R: Rng + ?Sized,
    {
        if self.pool.is_empty() || !settings.should_display_tips() {
            return None;
        }

        if let Some(tip) = self.first_with(TipPriority::High) {
            tracing::debug!(tip = tip.id(), "Selected high priority tip");
            return Some(tip);
        }

        if let Some(tip) = self.first_with(TipPriority::Medium) {
            tracing::debug!(tip = tip.id(), "Selected medium priority tip");
            return Some(tip);
        }

        let tip = self.pool.tips().choose(rng)?;
        tracing::debug!(tip = tip.id(), pool = self.pool.len(), "Selected random tip");
        Some(tip)
    }

    /// The whole pool in order, or nothing when tips are turned off
    pub fn select_all(&self, settings: &dyn Settings) -> &[Tip] {
        if settings.should_display_tips() {
            self.pool.tips()
        } else {
            &[]
        }
    }

    fn first_with(&self, priority: TipPriority) -> Option<&Tip> {
        self.pool.iter().find(|tip| tip.priority() == priority)
    }
}
