//! pdfbind - Discover PDF files under a directory and merge them into a
//! single document.
//!
//! The pipeline is deterministic and repeatable: candidates are discovered
//! in a stable order, sorted by a configurable key, and their pages are
//! accumulated strictly sequentially while the output's format version is
//! reconciled to the maximum among the inputs. Progress is reported
//! through an injected event sink, never to the console directly.
//!
//! # Examples
//!
//! ## Merge a directory
//!
//! ```no_run
//! use pdfbind::config::MergeConfig;
//! use pdfbind::output::NoopSink;
//! use pdfbind::pipeline::run_merge;
//!
//! # fn example() -> pdfbind::Result<()> {
//! let config = MergeConfig::new("./reports");
//! let report = run_merge(&config, &NoopSink)?;
//! println!(
//!     "merged {} files into {} pages",
//!     report.files_merged, report.total_pages
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Using individual components
//!
//! ```no_run
//! use pdfbind::discover::discover;
//! use pdfbind::sort::{SortDirective, order_candidates};
//! use std::path::Path;
//!
//! # fn example() -> pdfbind::Result<()> {
//! let directive = SortDirective::parse(Some("DateModified Desc"))?;
//! let candidates = discover(Path::new("./reports"), true)?;
//! let ordered = order_candidates(candidates, &directive);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod discover;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod sort;

// Re-export commonly used types
pub use config::MergeConfig;
pub use error::{PdfBindError, Result};
pub use pipeline::{MergeReport, run_merge};
pub use sort::SortDirective;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
