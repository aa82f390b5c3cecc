//! GIMP palette (`.gpl`) parser.
//!
//! The format is a header line followed by one colour per line:
//!
//! ```text
//! GIMP Palette
//! Name: Primaries
//! Columns: 3
//! # comment
//! 255 0 0 Red
//! 0 255 0
//! ```
//!
//! Parsing is all-or-nothing: the first malformed colour line aborts the
//! whole file.

use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::{ColorEntry, PaletteDocument};

/// Token every GIMP palette must start with.
pub const HEADER: &str = "GIMP Palette";

const NAME_PREFIX: &str = "Name:";
const COLUMNS_PREFIX: &str = "Columns:";

/// Read and parse a palette file from disk.
pub fn read_gpl(path: &Path) -> Result<PaletteDocument> {
    let bytes = fs::read(path).map_err(|e| ConvertError::InvalidFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let source = String::from_utf8(bytes).map_err(|e| ConvertError::InvalidFile {
        path: path.to_path_buf(),
        message: format!("not valid UTF-8 ({})", e.utf8_error()),
    })?;

    parse_gpl(&source)
}

/// Parse palette source text into a document.
pub fn parse_gpl(source: &str) -> Result<PaletteDocument> {
    if source.is_empty() {
        return Err(invalid_format("file is empty"));
    }

    let mut lines = source.lines();
    let header = lines.next().unwrap_or("");
    let header = header.strip_prefix('\u{feff}').unwrap_or(header);
    if !header.starts_with(HEADER) {
        return Err(invalid_format(&format!("does not start with '{}'", HEADER)));
    }

    let mut document = PaletteDocument::new();

    // Line 1 is the header
    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix(NAME_PREFIX) {
            document.name = Some(name.trim().to_string());
            continue;
        }

        if let Some(columns) = trimmed.strip_prefix(COLUMNS_PREFIX) {
            document.columns = columns.trim().parse().ok();
            continue;
        }

        let entry = parse_colour_line(trimmed, document.len() + 1).ok_or_else(|| {
            ConvertError::Parsing {
                line_number: index + 2,
                line: line.to_string(),
            }
        })?;
        document.push(entry);
    }

    Ok(document)
}

/// Parse `<red> <green> <blue> [name...]`.
///
/// `ordinal` is the 1-based position this entry will take, used to name
/// entries without a label.
fn parse_colour_line(trimmed: &str, ordinal: usize) -> Option<ColorEntry> {
    let tokens: Vec<&str> = trimmed.split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.len() < 3 {
        return None;
    }

    let red = tokens[0].parse::<i64>().ok()?;
    let green = tokens[1].parse::<i64>().ok()?;
    let blue = tokens[2].parse::<i64>().ok()?;

    let name = tokens[3..].join(" ");
    let name = if name.is_empty() {
        format!("Color {}", ordinal)
    } else {
        name
    };

    Some(ColorEntry::from_components(name, red, green, blue))
}

fn invalid_format(reason: &str) -> ConvertError {
    ConvertError::InvalidFormat {
        reason: reason.to_string(),
    }
}
