//! Guide navigator: a clamped cursor over the static step list.
//!
//! Transitions never fail and never wrap. Progress is derived from the
//! position, so there is nothing to keep in sync.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use crate::content::{STEPS, StepRecord};

/// Current position within an ordered, non-empty list of steps.
#[derive(Clone, Copy, Debug)]
pub struct GuideState {
    steps: &'static [StepRecord],
    position: usize,
}

impl Default for GuideState {
    fn default() -> Self {
        Self { steps: STEPS, position: 0 }
    }
}

impl GuideState {
    /// The step at the current position.
    #[must_use]
    pub fn current(&self) -> &'static StepRecord {
        &self.steps[self.position]
    }

    /// Move forward one step; no-op on the last step.
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.position += 1;
        }
    }

    /// Move back one step; no-op on the first step.
    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.position -= 1;
        }
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.position + 1 < self.steps.len()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    /// `true` on the last step, where the completion marker replaces "next".
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.can_advance()
    }

    /// `(position + 1) / len`, in `(0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        (self.position + 1) as f64 / self.steps.len() as f64
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    /// Human-readable position, e.g. `"Step 3 of 9"`.
    #[must_use]
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.position + 1, self.steps.len())
    }
}

#[cfg(test)]
impl GuideState {
    /// Start at the first of `steps`. Returns `None` for an empty list.
    pub(crate) fn new(steps: &'static [StepRecord]) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { steps, position: 0 })
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
