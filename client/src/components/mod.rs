//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the guide card and the floating assistant while
//! reading/writing shared state from Leptos context providers.

pub mod assistant_panel;
pub mod guide_controls;
pub mod progress_header;
pub mod step_view;
