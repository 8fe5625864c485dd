//! Shared helpers for pdfbind integration tests.
//!
//! Test PDFs are generated in place with `lopdf` rather than shipped as
//! binary fixtures, so every test controls the exact page count and
//! format version of its inputs.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object};
use pdfbind::output::{ProgressEvent, ProgressSink};

/// Write a valid PDF with the given page count and format version.
pub fn build_pdf(path: &Path, pages: usize, version: &str) {
    let mut doc = Document::with_version(version);
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(lopdf::dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        lopdf::dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }
        .into(),
    );
    let catalog_id = doc.add_object(lopdf::dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Sink recording every event for later inspection.
pub struct RecordingSink {
    events: RefCell<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.borrow().clone()
    }

    /// Names of processed files, in processing order.
    pub fn processed_names(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ProgressEvent::FileProcessing { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: &ProgressEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Page count of a written PDF.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// Format version string of a written PDF.
pub fn pdf_version(path: &Path) -> String {
    Document::load(path).unwrap().version
}

/// Convenience: join a name onto a directory.
pub fn under(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
