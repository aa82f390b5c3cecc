//! Core domain types for gpl2clr.
//!
//! - `ColorEntry` - a named swatch with normalized RGB channels
//! - `PaletteDocument` - the ordered entries of one palette file

mod colour;
mod document;

pub use colour::ColorEntry;
pub use document::PaletteDocument;
