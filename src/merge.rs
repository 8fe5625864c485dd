//! Sequential page accumulation with format-version reconciliation.
//!
//! The merger walks the ordered candidates one at a time: open a scoped
//! read handle, import every page in its original order, fold the source's
//! format version into the accumulator, release the handle, move on. Any
//! unreadable candidate aborts the whole run — a partially merged document
//! is never handed to the writer.

use std::fmt;
use std::path::Path;

use lopdf::{dictionary, Document, Object, ObjectId};
use serde::Serialize;

use crate::discover::FileCandidate;
use crate::error::{PdfBindError, Result};
use crate::io::load_document;
use crate::output::{ProgressEvent, ProgressSink};

/// A PDF format version, ordered so reconciliation can take the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PdfVersion {
    /// Major version component.
    pub major: u8,
    /// Minor version component.
    pub minor: u8,
}

impl PdfVersion {
    /// The engine baseline: the version an empty output document declares.
    pub const MIN: PdfVersion = PdfVersion { major: 1, minor: 4 };

    /// Parse an engine version string such as `"1.7"`.
    ///
    /// Unparseable input ranks as [`PdfVersion::MIN`] so a malformed
    /// header can never drag the reconciled version below the baseline.
    pub fn parse(s: &str) -> Self {
        s.split_once('.')
            .and_then(|(major, minor)| {
                Some(Self {
                    major: major.trim().parse().ok()?,
                    minor: minor.trim().parse().ok()?,
                })
            })
            .unwrap_or(Self::MIN)
    }
}

impl fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The in-progress merged document owned by a single run.
#[derive(Debug)]
pub struct Accumulator {
    /// The merged document. Pages are append-only, in processing order.
    pub document: Document,
    /// Maximum format version among imported sources, or the baseline.
    pub version: PdfVersion,
    /// Total pages imported so far.
    pub total_pages: usize,
    /// Number of source files imported so far.
    pub files_merged: usize,
    /// Object id of the accumulator's page-tree root.
    pages_root: ObjectId,
}

impl Accumulator {
    /// Create an empty accumulator at the baseline version.
    fn empty() -> Self {
        let mut document = Document::with_version(PdfVersion::MIN.to_string());

        let pages_root = document.add_object(lopdf::dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = document.add_object(lopdf::dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_root,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            version: PdfVersion::MIN,
            total_pages: 0,
            files_merged: 0,
            pages_root,
        }
    }
}

/// Merger combining ordered candidates into one [`Accumulator`].
#[derive(Debug, Default)]
pub struct Merger;

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self
    }

    /// Merge `candidates` in the order given.
    ///
    /// Emits [`ProgressEvent::FileProcessing`] per candidate, with the path
    /// reported relative to `base_dir`. Zero candidates is not an error:
    /// the result is an empty accumulator at the baseline version.
    ///
    /// # Errors
    ///
    /// Fails with [`PdfBindError::UnreadableDocument`] on the first
    /// candidate that cannot be opened or parsed; the accumulator is
    /// discarded and nothing is written.
    pub fn merge(
        &self,
        candidates: &[FileCandidate],
        base_dir: &Path,
        sink: &dyn ProgressSink,
    ) -> Result<Accumulator> {
        let mut accumulator = Accumulator::empty();

        for candidate in candidates {
            let relative_path = candidate
                .path
                .strip_prefix(base_dir)
                .unwrap_or(candidate.path.as_path())
                .to_path_buf();
            sink.emit(&ProgressEvent::FileProcessing {
                name: candidate.name.clone(),
                relative_path,
            });

            // The read handle lives inside load_document and is released
            // before the next candidate is opened.
            let source = load_document(&candidate.path)?;
            let source_version = PdfVersion::parse(&source.version);

            let imported = import_pages(&mut accumulator, source)?;

            accumulator.total_pages += imported;
            accumulator.files_merged += 1;
            if source_version > accumulator.version {
                accumulator.version = source_version;
                accumulator.document.version = source_version.to_string();
            }
        }

        Ok(accumulator)
    }
}

/// Append every page of `source` to the accumulator's page tree, in the
/// source's own page order. Returns the number of pages imported.
fn import_pages(accumulator: &mut Accumulator, mut source: Document) -> Result<usize> {
    // Shift the source's object ids past everything already accumulated.
    source.renumber_objects_with(accumulator.document.max_id + 1);
    accumulator.document.max_id = source.max_id;

    // get_pages is keyed by page number, so values come out in the
    // source's own page order.
    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

    accumulator.document.objects.extend(source.objects);

    // Imported pages must point at our page tree, not their old one.
    for &page_id in &page_ids {
        let page = accumulator
            .document
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .map_err(|err| PdfBindError::merge_failed(format!("imported page is invalid: {err}")))?;
        page.set("Parent", Object::Reference(accumulator.pages_root));
    }

    let pages = accumulator
        .document
        .get_object_mut(accumulator.pages_root)
        .and_then(Object::as_dict_mut)
        .map_err(|err| PdfBindError::merge_failed(format!("page tree is invalid: {err}")))?;

    let kids = pages
        .get_mut(b"Kids")
        .and_then(Object::as_array_mut)
        .map_err(|err| PdfBindError::merge_failed(format!("page tree has no Kids array: {err}")))?;
    kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let count = pages.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
    pages.set("Count", Object::Integer(count + page_ids.len() as i64));

    Ok(page_ids.len())
}
