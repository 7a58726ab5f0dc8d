//! Japanese pitch-accent lookup engine built on the NHK accent database.
//!
//! The crate compiles the raw 19-column accent CSV into an in-memory
//! dictionary of HTML pronunciation markup, persists it as a mmap-friendly
//! snapshot, and answers expression lookups with split and segmentation
//! fallbacks for compound phrases.

pub mod accent;
pub mod config;
pub mod dict;
pub mod lookup;
pub mod segment;
pub mod unicode;
