//! Progress reporting for merge runs.
//!
//! The core pipeline never prints: it emits [`ProgressEvent`]s through an
//! injected [`ProgressSink`], so a host can render them, stream them as
//! JSON, or silence them entirely. [`ConsoleSink`] is the stock terminal
//! renderer used by the CLI; [`JsonLinesSink`] emits one JSON object per
//! event for machine consumers; [`NoopSink`] drops everything
//! (`--silent`).

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;

use crate::sort::SortDirective;

/// An event emitted by the merge pipeline, in run order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressEvent {
    /// The directory scan is about to start.
    #[serde(rename_all = "camelCase")]
    SearchStarted {
        /// Directory being scanned.
        dir: PathBuf,
        /// Whether nested subdirectories are included.
        recursive: bool,
    },

    /// The sort directive in effect for this run.
    #[serde(rename_all = "camelCase")]
    SortChosen {
        /// The parsed directive.
        directive: SortDirective,
    },

    /// The scan finished.
    #[serde(rename_all = "camelCase")]
    FilesFound {
        /// Number of candidates discovered.
        count: usize,
    },

    /// A source file is being imported.
    #[serde(rename_all = "camelCase")]
    FileProcessing {
        /// File name.
        name: String,
        /// Path relative to the source directory.
        relative_path: PathBuf,
    },

    /// The output target has been resolved and is about to be written.
    #[serde(rename_all = "camelCase")]
    SaveTarget {
        /// Output path.
        path: PathBuf,
    },

    /// The run completed successfully.
    Done,
}

/// Receiver for pipeline progress events.
pub trait ProgressSink {
    /// Handle one event.
    fn emit(&self, event: &ProgressEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn emit(&self, _event: &ProgressEvent) {}
}

/// Terminal renderer for progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for ConsoleSink {
    fn emit(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::SearchStarted { dir, recursive } => {
                let scope = if *recursive {
                    "recursive search"
                } else {
                    "this directory only"
                };
                println!("Searching PDF files in directory ({scope}):");
                println!("{}", dir.display());
                println!();
            }
            ProgressEvent::SortChosen { directive } => {
                println!("Using sorting: {directive}");
                println!();
            }
            ProgressEvent::FilesFound { count } => {
                println!("Found {count} files.");
                println!();
                println!("Processing files.");
            }
            ProgressEvent::FileProcessing {
                name,
                relative_path,
            } => {
                println!("Processing {name} ({})", relative_path.display());
            }
            ProgressEvent::SaveTarget { path } => {
                println!();
                println!("Save result document to: {}", path.display());
            }
            ProgressEvent::Done => {
                println!();
                println!("Done.");
            }
        }
    }
}

/// Sink writing one JSON object per event to the wrapped writer.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> ProgressSink for JsonLinesSink<W> {
    fn emit(&self, event: &ProgressEvent) {
        if let Ok(line) = serde_json::to_string(event)
            && let Ok(mut out) = self.out.lock()
        {
            writeln!(out, "{line}").ok();
        }
    }
}
