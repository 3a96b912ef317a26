//! Backends - filesystem collection and the side-effecting collaborators
//!
//! - collect: directory walking with walkdir
//! - clipboard: pasteboard command sink
//! - prompt: large-batch confirmation
//! - host: the real `Host` wiring them together

pub mod clipboard;
pub mod collect;
pub mod host;
pub mod prompt;
