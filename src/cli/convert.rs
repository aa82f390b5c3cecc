//! Convert command implementation.
//!
//! Parses a GIMP palette and writes it as a colour list, optionally
//! installing the result.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use miette::Diagnostic;

use crate::error::{ConvertError, Result};
use crate::install::{ColorLibrary, Installer, SystemPaths};
use crate::output::{display_path, plural, Printer};
use crate::parser::read_gpl;
use crate::render::{parent_dir, ClrWriter, ColorListWriter};

/// Extension given to colour list files.
pub const CLR_EXTENSION: &str = "clr";

/// A single conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub install: bool,
    pub verbose: bool,
    pub dry_run: bool,
}

/// What a successful conversion did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    DryRun {
        colours: usize,
    },
    Written {
        output: PathBuf,
        installed: Option<PathBuf>,
    },
}

/// Top-level handler: run one conversion with the real writer and colour
/// library, reporting any failure as a single diagnostic line.
pub fn run(args: ConvertArgs, printer: &Printer) {
    let library = ColorLibrary::new(SystemPaths);

    if let Err(err) = convert(&args, &ClrWriter, &library, printer) {
        report(&err, printer);
    }
}

/// Print an error as exactly one diagnostic line.
pub fn report(err: &ConvertError, printer: &Printer) {
    printer.error("error", &diagnostic_line(err, printer.is_verbose()));
}

/// The single-line message for `err`; verbose mode folds the help text in.
pub fn diagnostic_line(err: &ConvertError, verbose: bool) -> String {
    match err.help() {
        Some(help) if verbose => format!("{} (help: {})", err, help),
        _ => err.to_string(),
    }
}

/// Run the conversion pipeline against the given collaborators.
pub fn convert(
    args: &ConvertArgs,
    writer: &dyn ColorListWriter,
    installer: &dyn Installer,
    printer: &Printer,
) -> Result<Outcome> {
    let input = display_path(&args.input);
    printer.step("Reading", &input);

    let document = read_gpl(&args.input)?;

    let count = plural(document.len(), "colour", "colours");
    match (&document.name, document.columns) {
        (Some(name), Some(columns)) => {
            printer.step("Parsed", &format!("{} from '{}' ({} columns)", count, name, columns))
        }
        (Some(name), None) => printer.step("Parsed", &format!("{} from '{}'", count, name)),
        _ => printer.step("Parsed", &count),
    }
    for entry in document.iter() {
        printer.step("", &printer.dim(&entry.to_string()));
    }

    if args.dry_run {
        printer.success("Finished", &format!("dry run of {}, {}, nothing written", input, count));
        return Ok(Outcome::DryRun {
            colours: document.len(),
        });
    }

    let output = output_path(&args.input, args.output.as_deref());
    ensure_writable_dir(&output)?;

    if document.is_empty() {
        printer.warning("Empty", &format!("{} has no colours", input));
    }

    let name = list_name(&output);
    printer.step("Writing", &format!("{} as '{}'", display_path(&output), name));
    writer.write(&name, &document, &output)?;

    let installed = if args.install {
        printer.step("Installing", &display_path(&output));
        Some(installer.install(&output)?)
    } else {
        None
    };

    printer.success(
        "Converted",
        &format!("{} -> {}", input, display_path(&output)),
    );
    if let Some(path) = &installed {
        printer.success("Installed", &display_path(path));
    }
    io::stdout().flush()?;

    Ok(Outcome::Written { output, installed })
}

/// Work out where the colour list goes.
///
/// An explicit, non-empty path is used as given, with `.clr` appended when
/// it has a different extension. Otherwise the input's extension is
/// replaced.
pub fn output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) if path.extension().is_some_and(|ext| ext == CLR_EXTENSION) => {
            path.to_path_buf()
        }
        Some(path) => {
            let mut with_ext = OsString::from(path.as_os_str());
            with_ext.push(".");
            with_ext.push(CLR_EXTENSION);
            PathBuf::from(with_ext)
        }
        None => input.with_extension(CLR_EXTENSION),
    }
}

/// Colour list name: the output file name without its extension.
pub fn list_name(output: &Path) -> String {
    output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Fail early if the output's directory cannot take a new file.
pub fn ensure_writable_dir(output: &Path) -> Result<()> {
    let dir = parent_dir(output);

    tempfile::tempfile_in(dir)
        .map(drop)
        .map_err(|e| ConvertError::FileCreation {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })
}
