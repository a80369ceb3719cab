use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use log::info;

use huffpack::CompressedArtifact;

#[derive(Parser, Debug)]
#[command(about = "Decompress a huffpack artifact back into text", long_about = None)]
struct Args {
    /// The compressed artifact.
    input: String,

    /// Where to write the decompressed text.
    output: String,
}

pub fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let args = Args::parse();
    let artifact = CompressedArtifact::load(&args.input)?;

    let mut pl = ProgressLogger::default();
    pl.start("Decompressing...");

    let text = huffpack::decompress(artifact)?;

    pl.done_with_count(text.len());

    std::fs::write(&args.output, &text)?;
    info!("{} bytes written to {}", text.len(), args.output);

    Ok(())
}
