//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`guide`, `assistant`, `ui`) so each component
//! depends on a small focused model. The root `App` wraps each model in an
//! `RwSignal` and provides it through Leptos context.

pub mod assistant;
pub mod guide;
pub mod ui;
