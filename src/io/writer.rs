//! Persisting the merged document.
//!
//! The output policy is fixed and not user-configurable: objects are
//! renumbered into a canonical layout and streams are written exactly as
//! stored, without a recompression pass. Merging is an I/O-bound batch
//! operation, so the policy trades output size for write speed and
//! reproducible bytes where the engine is deterministic.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document};

use crate::error::{PdfBindError, Result};

/// Outcome of a successful write.
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// Path the document was written to.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub file_size: u64,
}

/// Writer applying the fixed output policy.
///
/// The target file is created or truncated unconditionally — no existence
/// check, no prompt. Hosts that need overwrite protection must check
/// before invoking the pipeline.
#[derive(Debug, Default)]
pub struct OutputWriter;

impl OutputWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize `document` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBindError::FailedToCreateOutput`] when the target file
    /// cannot be created and [`PdfBindError::FailedToWrite`] when
    /// serialization or flushing fails.
    pub fn write(&self, document: &mut Document, target: &Path) -> Result<WriteReport> {
        document.renumber_objects();

        let file = File::create(target).map_err(|source| PdfBindError::FailedToCreateOutput {
            path: target.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        document
            .save_to(&mut writer)
            .map_err(|err| PdfBindError::FailedToWrite {
                path: target.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        writer.flush().map_err(|source| PdfBindError::FailedToWrite {
            path: target.to_path_buf(),
            source,
        })?;

        let file_size = std::fs::metadata(target).map(|m| m.len()).unwrap_or(0);

        Ok(WriteReport {
            path: target.to_path_buf(),
            file_size,
        })
    }
}
