//! CLI entry point for adjacency-model texture synthesis

use clap::Parser;
use pixelchain::io::cli::{Cli, FileProcessor};

fn main() -> pixelchain::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_written| ())
}
