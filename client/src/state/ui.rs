//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`guide`,
//! `assistant`) so opening or closing the floating panel never touches the
//! assistant state machine.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the floating assistant panel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub assistant_open: bool,
}

impl UiState {
    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }
}
