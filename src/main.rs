//! pdfbind - Merge the PDF files of a directory into a single document.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::{Cli, Command};
use pdfbind::output::{ConsoleSink, NoopSink, ProgressSink};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> pdfbind::Result<()> {
    match cli.command {
        Command::Merge(args) => {
            let config = args.to_config()?;

            let sink: Box<dyn ProgressSink> = if config.silent {
                Box::new(NoopSink)
            } else {
                Box::new(ConsoleSink::new())
            };

            pdfbind::run_merge(&config, sink.as_ref())?;
            Ok(())
        }
    }
}
