//! Error types for pdfbind.
//!
//! Every failure carries enough context (offending path or token) to
//! diagnose a run without re-running in a debug mode. Nothing is retried
//! automatically: all causes are either configuration mistakes or I/O
//! conditions that will not self-resolve within the same run.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfbind operations.
pub type Result<T> = std::result::Result<T, PdfBindError>;

/// Main error type for pdfbind operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfBindError {
    /// The sort directive text could not be parsed.
    #[error("Invalid sort directive {input:?}: {reason}")]
    InvalidSortSpec {
        /// The directive text as supplied.
        input: String,
        /// What was expected versus what was found.
        reason: String,
    },

    /// The source directory does not exist.
    #[error("Source directory not found: {path}")]
    DirectoryNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The source path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// Path that is not a directory.
        path: PathBuf,
    },

    /// Directory traversal failed on an entry.
    #[error("Failed to read directory entry under {path}: {source}")]
    DiscoveryFailed {
        /// Root directory being scanned.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// A source file could not be opened or parsed as a PDF.
    ///
    /// Fatal: the whole merge aborts and no output file is written.
    #[error("Unreadable PDF: {path}\n  Reason: {reason}")]
    UnreadableDocument {
        /// Path to the offending file.
        path: PathBuf,
        /// Why the engine rejected it.
        reason: String,
    },

    /// The accumulator's page tree could not be updated.
    ///
    /// Indicates a structurally unexpected document rather than an I/O
    /// condition.
    #[error("Merge failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {path}\n  Reason: {source}")]
    FailedToCreateOutput {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the output file failed after creation.
    #[error("Failed to write output file: {path}\n  Reason: {source}")]
    FailedToWrite {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl PdfBindError {
    /// Create an UnreadableDocument error.
    pub fn unreadable_document(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::UnreadableDocument {
            path,
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidSortSpec error.
    pub fn invalid_sort_spec(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSortSpec {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// True for errors detected before any file I/O takes place.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSortSpec { .. } | Self::DirectoryNotFound { .. } | Self::NotADirectory { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSortSpec { .. } => 2,
            Self::DirectoryNotFound { .. } => 2,
            Self::NotADirectory { .. } => 2,
            Self::DiscoveryFailed { .. } => 2,
            Self::UnreadableDocument { .. } => 3,
            Self::MergeFailed { .. } => 6,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
        }
    }
}
