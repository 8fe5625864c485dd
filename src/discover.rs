//! File discovery: enumerate merge candidates under a directory.
//!
//! Discovery never mutates the filesystem. Its output order is made
//! deterministic on purpose: entries are walked depth-first with siblings
//! sorted by file name, so the `None` sort key produces the same merge
//! order on every platform and every run. The `.pdf` extension match is
//! case-insensitive (`report.PDF` is a candidate).

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::{PdfBindError, Result};

/// A discovered file eligible for merging, with its filesystem metadata.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name component, lossily decoded.
    pub name: String,
    /// Creation timestamp. Filesystems that do not record one report the
    /// modification timestamp here instead.
    pub created: SystemTime,
    /// Modification timestamp.
    pub modified: SystemTime,
}

impl FileCandidate {
    fn from_entry(entry: &walkdir::DirEntry) -> std::result::Result<Self, walkdir::Error> {
        let metadata = entry.metadata()?;
        // modified() is available on every supported platform; created()
        // is not (notably some Linux filesystems), so it degrades to the
        // modification time.
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let created = metadata.created().unwrap_or(modified);

        Ok(Self {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            created,
            modified,
        })
    }
}

/// True when the path carries a `.pdf` extension in any letter case.
fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Enumerate PDF candidates under `root`.
///
/// `recursive=false` restricts the scan to direct children; `recursive=true`
/// walks all nested subdirectories with no depth limit.
///
/// # Errors
///
/// Fails with [`PdfBindError::DirectoryNotFound`] or
/// [`PdfBindError::NotADirectory`] before any traversal when `root` is not
/// an existing directory, and with [`PdfBindError::DiscoveryFailed`] when an
/// entry cannot be read mid-walk.
pub fn discover(root: &Path, recursive: bool) -> Result<Vec<FileCandidate>> {
    crate::config::validate_input_dir(root)?;

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| PdfBindError::DiscoveryFailed {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() || !has_pdf_extension(entry.path()) {
            continue;
        }

        let candidate =
            FileCandidate::from_entry(&entry).map_err(|source| PdfBindError::DiscoveryFailed {
                path: root.to_path_buf(),
                source,
            })?;
        candidates.push(candidate);
    }

    Ok(candidates)
}
