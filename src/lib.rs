//! gpl2clr - GIMP palette to macOS colour list converter
//!
//! Parses `.gpl` palette files and writes them as `.clr` colour list
//! archives, optionally installing them into `~/Library/Colors`.

pub mod cli;
pub mod error;
pub mod install;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{ConvertError, Result};
pub use install::{ColorLibrary, Installer, PathProvider, SystemPaths};
pub use parser::{parse_gpl, read_gpl};
pub use render::{encode_color_list, write_clr, ClrWriter, ColorListWriter};
pub use types::{ColorEntry, PaletteDocument};
