//! Accent database records and pitch markup rendering.
//!
//! `parse_entries` reads the raw 19-column CSV dump into `AccentEntry`
//! records; `render` turns one record into pitch-accent markup.

mod entry;
mod parser;
mod render;

pub use entry::AccentEntry;
pub use parser::{parse_entries, ParseError};
pub use render::render;
