//! Seeded catalog
//!
//! Record types, the built-in sample data and the display helpers every
//! screen shares.

pub mod format;
pub mod seed;
pub mod types;

pub use format::{initials, relative_label, thousands};
pub use types::*;
