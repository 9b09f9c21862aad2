//! Static guide content compiled into the client.
//!
//! DESIGN
//! ======
//! Steps are plain `'static` data built from the structured rich-text nodes
//! in [`rich_text`], so the renderer never receives raw markup.

pub mod rich_text;
pub mod steps;

pub use rich_text::{Block, Inline, RichText};
pub use steps::{STEPS, StepRecord};
