//! One-shot guard for actions that must fire at most once.
//!
//! Reactive effects can rerun any number of times; a `Latch` held in the
//! owning state makes the guarded action independent of that.

#[cfg(test)]
#[path = "latch_test.rs"]
mod latch_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Set the latch. Returns `true` only on the first call.
    pub fn trip(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[cfg(test)]
    pub(crate) fn is_tripped(self) -> bool {
        self.fired
    }
}
