//! Installing colour lists into the user's colour library.
//!
//! macOS colour pickers scan `~/Library/Colors` for `.clr` files. The home
//! directory comes from a `PathProvider` so tests never touch the real one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Resolves per-user directories.
pub trait PathProvider {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The invoking user's real directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPaths;

impl PathProvider for SystemPaths {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Copies a written colour list somewhere the platform will find it.
pub trait Installer {
    /// Install `source`, returning where it was copied to.
    fn install(&self, source: &Path) -> Result<PathBuf>;
}

/// Installs into `<home>/Library/Colors`.
pub struct ColorLibrary<P: PathProvider> {
    paths: P,
}

impl<P: PathProvider> ColorLibrary<P> {
    pub fn new(paths: P) -> Self {
        Self { paths }
    }

    /// The library directory, if the home directory is known.
    pub fn directory(&self) -> Option<PathBuf> {
        self.paths
            .home_dir()
            .map(|home| home.join("Library").join("Colors"))
    }
}

impl<P: PathProvider> Installer for ColorLibrary<P> {
    fn install(&self, source: &Path) -> Result<PathBuf> {
        let install_error = |message: String| ConvertError::Install {
            path: source.to_path_buf(),
            message,
        };

        let dir = self
            .directory()
            .ok_or_else(|| install_error("unable to resolve the home directory".to_string()))?;

        let file_name = source
            .file_name()
            .ok_or_else(|| install_error("source has no file name".to_string()))?;

        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                install_error(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }

        let destination = dir.join(file_name);
        fs::copy(source, &destination).map_err(|e| install_error(e.to_string()))?;

        Ok(destination)
    }
}
