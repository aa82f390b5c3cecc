//! Output module for gpl2clr.
//!
//! Turns parsed palettes into colour list files. The conversion driver only
//! sees the `ColorListWriter` trait, so tests can substitute a recorder.

mod clr;

use std::path::Path;

use crate::error::Result;
use crate::types::PaletteDocument;

pub use clr::{encode_color_list, write_clr, ClrWriter};

/// Serializes a palette into a colour list file.
pub trait ColorListWriter {
    /// Write `document` to `path` as a colour list called `name`.
    fn write(&self, name: &str, document: &PaletteDocument, path: &Path) -> Result<()>;
}

/// Directory a file will be created in; `.` for bare file names.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
