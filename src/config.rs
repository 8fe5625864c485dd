//! Run configuration for pdfbind.
//!
//! A [`MergeConfig`] is constructed once at the host boundary (the CLI, or
//! a library caller) and passed into the pipeline as an immutable value.
//! The output-compression policy is deliberately not part of it: that
//! policy is fixed in [`crate::io::writer`].

use std::path::{Path, PathBuf};

use crate::error::{PdfBindError, Result};
use crate::sort::SortDirective;

/// Name of the output file when the host does not supply one.
pub const DEFAULT_OUTPUT_NAME: &str = "output.pdf";

/// Complete, immutable configuration for one merge run.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directory scanned for source PDF files.
    pub input_dir: PathBuf,

    /// Whether nested subdirectories are included in the scan.
    pub recursive: bool,

    /// Parsed sort directive controlling the merge order.
    pub sort: SortDirective,

    /// Explicit output path; `None` resolves to
    /// `<input_dir>/output.pdf`.
    pub output: Option<PathBuf>,

    /// Suppress progress reporting. Consumed by the host when choosing a
    /// sink; the core itself never prints.
    pub silent: bool,
}

impl MergeConfig {
    /// Build a configuration for merging everything under `input_dir` with
    /// defaults: recursive scan, `FileName Asc` ordering, default output
    /// path, progress reporting on.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            recursive: true,
            sort: SortDirective::default(),
            output: None,
            silent: false,
        }
    }

    /// Resolve the output target path.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_OUTPUT_NAME))
    }

    /// Check that the source directory exists before any file I/O.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBindError::DirectoryNotFound`] or
    /// [`PdfBindError::NotADirectory`].
    pub fn validate(&self) -> Result<()> {
        validate_input_dir(&self.input_dir)
    }
}

/// Shared precondition for configuration and discovery.
pub(crate) fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PdfBindError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(PdfBindError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
