//! The consolidated merge pipeline.
//!
//! One entry point drives the whole run: validate the source directory,
//! discover candidates, order them, accumulate pages, write the output.
//! Hosts (the CLI, library callers) stay thin on top of it.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::MergeConfig;
use crate::discover::discover;
use crate::error::Result;
use crate::io::OutputWriter;
use crate::merge::{Merger, PdfVersion};
use crate::output::{ProgressEvent, ProgressSink};
use crate::sort::order_candidates;

/// Summary of a completed merge run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Number of source files merged.
    pub files_merged: usize,
    /// Total pages in the output document.
    pub total_pages: usize,
    /// Reconciled format version of the output document.
    pub version: PdfVersion,
    /// Path the output was written to.
    pub output_path: PathBuf,
    /// Size of the output file in bytes.
    pub output_size: u64,
}

/// Run a complete merge according to `config`, reporting progress to
/// `sink`.
///
/// The run is all-or-nothing: any unreadable source aborts before the
/// output target is touched, so an existing file at the target path is
/// only ever replaced by a fully successful merge.
///
/// # Errors
///
/// Propagates configuration, discovery, merge, and write failures; see
/// [`crate::error::PdfBindError`] for the taxonomy.
pub fn run_merge(config: &MergeConfig, sink: &dyn ProgressSink) -> Result<MergeReport> {
    // Config errors fire before any traversal or file I/O.
    config.validate()?;

    sink.emit(&ProgressEvent::SearchStarted {
        dir: config.input_dir.clone(),
        recursive: config.recursive,
    });
    sink.emit(&ProgressEvent::SortChosen {
        directive: config.sort,
    });

    let candidates = discover(&config.input_dir, config.recursive)?;
    sink.emit(&ProgressEvent::FilesFound {
        count: candidates.len(),
    });

    let ordered = order_candidates(candidates, &config.sort);

    let mut accumulator = Merger::new().merge(&ordered, &config.input_dir, sink)?;

    let output_path = config.output_path();
    sink.emit(&ProgressEvent::SaveTarget {
        path: output_path.clone(),
    });

    let report = OutputWriter::new().write(&mut accumulator.document, &output_path)?;
    sink.emit(&ProgressEvent::Done);

    Ok(MergeReport {
        files_merged: accumulator.files_merged,
        total_pages: accumulator.total_pages,
        version: accumulator.version,
        output_path: report.path,
        output_size: report.file_size,
    })
}
