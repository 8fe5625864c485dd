//! Loading source documents through the PDF engine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lopdf::{dictionary, Document};

use crate::error::{PdfBindError, Result};

/// Load one source PDF through a scoped read handle.
///
/// The handle is opened read-only and dropped when this function returns,
/// on success and on failure alike, so at most one source handle is ever
/// open during a merge run.
///
/// # Errors
///
/// Any open or parse failure (missing file, corrupt structure, encrypted
/// or unsupported document) maps to [`PdfBindError::UnreadableDocument`]
/// carrying the offending path.
pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path)
        .map_err(|err| PdfBindError::unreadable_document(path.to_path_buf(), err.to_string()))?;

    Document::load_from(BufReader::new(file))
        .map_err(|err| PdfBindError::unreadable_document(path.to_path_buf(), err.to_string()))
}
