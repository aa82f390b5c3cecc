//! Colour list (`.clr`) output.
//!
//! A `.clr` file is an `NSKeyedArchiver` binary property list whose root
//! object is an `NSColorList`. Objects live in a flat `$objects` table and
//! refer to each other through `Uid`s; index 0 is always `$null`.

use std::io::Write;
use std::path::Path;

use plist::{Dictionary, Uid, Value};
use tempfile::NamedTempFile;

use crate::error::{ConvertError, Result};
use crate::types::{ColorEntry, PaletteDocument};

use super::{parent_dir, ColorListWriter};

/// `NSKeyedArchiver` format version.
const ARCHIVE_VERSION: i64 = 100_000;

/// `NSColorSpace` value for calibrated RGB.
const CALIBRATED_RGB: i64 = 1;

/// Writes palettes as macOS colour list archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClrWriter;

impl ColorListWriter for ClrWriter {
    fn write(&self, name: &str, document: &PaletteDocument, path: &Path) -> Result<()> {
        let archive = encode_color_list(name, document);
        write_clr(&archive, path)
    }
}

/// Build the keyed archive for a colour list.
pub fn encode_color_list(name: &str, document: &PaletteDocument) -> Value {
    let mut archive = KeyedArchive::new();

    // Reserve the root slot so it is always object 1
    let root = archive.reserve();

    let name_ref = archive.push(Value::String(name.to_string()));

    let key_refs: Vec<Uid> = document
        .iter()
        .map(|entry| archive.push(Value::String(entry.name.clone())))
        .collect();
    let keys = archive.push_array(key_refs);

    let color_class = archive.class(&["NSColor", "NSObject"]);
    let color_refs: Vec<Uid> = document
        .iter()
        .map(|entry| archive.push(encode_color(entry, color_class)))
        .collect();
    let colors = archive.push_array(color_refs);

    let mut list = Dictionary::new();
    list.insert("NSName".to_string(), Value::Uid(name_ref));
    list.insert("NSKeys".to_string(), Value::Uid(keys));
    list.insert("NSColors".to_string(), Value::Uid(colors));
    list.insert(
        "$class".to_string(),
        Value::Uid(archive.class(&["NSColorList", "NSObject"])),
    );
    archive.set(root, Value::Dictionary(list));

    archive.finish(root)
}

/// Encode one entry as an `NSColor`. Alpha is implied 1.0 by the three
/// component `NSRGB` string.
fn encode_color(entry: &ColorEntry, class: Uid) -> Value {
    let components = format!("{} {} {}", entry.red(), entry.green(), entry.blue());
    let mut rgb = components.into_bytes();
    rgb.push(0);

    let mut color = Dictionary::new();
    color.insert(
        "NSColorSpace".to_string(),
        Value::Integer(CALIBRATED_RGB.into()),
    );
    color.insert("NSRGB".to_string(), Value::Data(rgb));
    color.insert("$class".to_string(), Value::Uid(class));
    Value::Dictionary(color)
}

/// Serialize an archive to `path`.
///
/// The archive goes to a temporary file next to the target first and is
/// renamed into place, so a failure never leaves a truncated `.clr`.
pub fn write_clr(archive: &Value, path: &Path) -> Result<()> {
    let writing_error = |message: String| ConvertError::FileWriting {
        path: path.to_path_buf(),
        message,
    };

    let mut file =
        NamedTempFile::new_in(parent_dir(path)).map_err(|e| writing_error(e.to_string()))?;

    archive
        .to_writer_binary(&mut file)
        .map_err(|e| writing_error(e.to_string()))?;
    file.flush().map_err(|e| writing_error(e.to_string()))?;

    file.persist(path).map_err(|e| writing_error(e.error.to_string()))?;

    Ok(())
}

/// Flat object table of an `NSKeyedArchiver` archive.
struct KeyedArchive {
    objects: Vec<Value>,
    classes: Vec<(String, Uid)>,
}

impl KeyedArchive {
    fn new() -> Self {
        Self {
            objects: vec![Value::String("$null".to_string())],
            classes: Vec::new(),
        }
    }

    fn push(&mut self, value: Value) -> Uid {
        self.objects.push(value);
        Uid::new(self.objects.len() as u64 - 1)
    }

    fn reserve(&mut self) -> Uid {
        self.push(Value::String("$null".to_string()))
    }

    fn set(&mut self, uid: Uid, value: Value) {
        self.objects[uid.get() as usize] = value;
    }

    fn push_array(&mut self, items: Vec<Uid>) -> Uid {
        let class = self.class(&["NSArray", "NSObject"]);
        let mut array = Dictionary::new();
        array.insert(
            "NS.objects".to_string(),
            Value::Array(items.into_iter().map(Value::Uid).collect()),
        );
        array.insert("$class".to_string(), Value::Uid(class));
        self.push(Value::Dictionary(array))
    }

    /// Class descriptions are shared: each class name is archived once.
    fn class(&mut self, hierarchy: &[&str]) -> Uid {
        let name = hierarchy[0];
        if let Some((_, uid)) = self.classes.iter().find(|(n, _)| n == name) {
            return *uid;
        }

        let mut class = Dictionary::new();
        class.insert("$classname".to_string(), Value::String(name.to_string()));
        class.insert(
            "$classes".to_string(),
            Value::Array(
                hierarchy
                    .iter()
                    .map(|c| Value::String(c.to_string()))
                    .collect(),
            ),
        );
        let uid = self.push(Value::Dictionary(class));
        self.classes.push((name.to_string(), uid));
        uid
    }

    fn finish(self, root: Uid) -> Value {
        let mut top = Dictionary::new();
        top.insert("root".to_string(), Value::Uid(root));

        let mut archive = Dictionary::new();
        archive.insert("$version".to_string(), Value::Integer(ARCHIVE_VERSION.into()));
        archive.insert(
            "$archiver".to_string(),
            Value::String("NSKeyedArchiver".to_string()),
        );
        archive.insert("$top".to_string(), Value::Dictionary(top));
        archive.insert("$objects".to_string(), Value::Array(self.objects));
        Value::Dictionary(archive)
    }
}
