//! Colour entry type.

use std::fmt;

use palette::Srgb;

/// A single palette swatch with normalized RGB channels.
///
/// Channels come straight from the source integers divided by 255. Values
/// outside `0..=255` are kept as-is and produce channels outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    pub color: Srgb<f64>,
}

impl ColorEntry {
    /// Create an entry from already-normalized channels.
    pub fn new(name: impl Into<String>, color: Srgb<f64>) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Create an entry from integer components in the 0-255 scale.
    pub fn from_components(name: impl Into<String>, red: i64, green: i64, blue: i64) -> Self {
        Self::new(
            name,
            Srgb::new(
                red as f64 / 255.0,
                green as f64 / 255.0,
                blue as f64 / 255.0,
            ),
        )
    }

    pub fn red(&self) -> f64 {
        self.color.red
    }

    pub fn green(&self) -> f64 {
        self.color.green
    }

    pub fn blue(&self) -> f64 {
        self.color.blue
    }

    /// Clamped 8-bit view of the channels, for display.
    pub fn to_rgb8(&self) -> Srgb<u8> {
        self.color.into_format()
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb = self.to_rgb8();
        write!(
            f,
            "#{:02X}{:02X}{:02X} {}",
            rgb.red, rgb.green, rgb.blue, self.name
        )
    }
}
