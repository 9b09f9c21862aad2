//! Networking modules for the assistant relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema shared with
//! the server crate.

pub mod api;
pub mod types;
