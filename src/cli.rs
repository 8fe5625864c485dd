//! CLI argument parsing for pdfbind.
//!
//! Defines the command surface with `clap` and converts parsed arguments
//! into an immutable [`MergeConfig`]. Directive parsing happens here, at
//! the boundary, so a malformed `--sort` value is rejected before any
//! directory scan.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use pdfbind::config::MergeConfig;
use pdfbind::error::Result;
use pdfbind::sort::SortDirective;

/// Discover PDF files under a directory and merge them into one document.
#[derive(Parser, Debug)]
#[command(name = "pdfbind")]
#[command(version)]
#[command(about = "Merge the PDF files of a directory into a single document", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a directory for PDF files and merge them together.
    Merge(MergeArgs),
}

/// Arguments of the `merge` subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Path to the directory with source PDF files
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input: PathBuf,

    /// Include nested subdirectories in the search
    ///
    /// True by default; pass --recursive=false to restrict the scan to
    /// direct children of the input directory.
    #[arg(
        short = 'r',
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 1
    )]
    pub recursive: bool,

    /// Sorting for discovered files, in the form "key[ direction]"
    ///
    /// Key is one of None, DateCreated, DateModified, FileName, FilePath.
    /// Direction is Asc or Desc, optional, Asc by default.
    #[arg(short = 's', long, value_name = "DIRECTIVE")]
    pub sort: Option<String>,

    /// Merged PDF file path (defaults to <input>/output.pdf)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long)]
    pub silent: bool,
}

impl MergeArgs {
    /// Convert parsed arguments into a validated, immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`pdfbind::PdfBindError::InvalidSortSpec`] when the `--sort`
    /// text cannot be parsed.
    pub fn to_config(&self) -> Result<MergeConfig> {
        Ok(MergeConfig {
            input_dir: self.input.clone(),
            recursive: self.recursive,
            sort: SortDirective::parse(self.sort.as_deref())?,
            output: self.output.clone(),
            silent: self.silent,
        })
    }
}
