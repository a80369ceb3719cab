use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use log::info;

use huffpack::huffman::frequencies::FrequencyTable;
use huffpack::utils::{compression_ratio, entropy};

#[derive(Parser, Debug)]
#[command(about = "Compress a text file into a huffpack artifact", long_about = None)]
struct Args {
    /// The file to compress.
    input: String,

    /// Where to write the compressed artifact.
    output: String,
}

pub fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let args = Args::parse();
    let text = std::fs::read(&args.input)?;

    let mut pl = ProgressLogger::default();
    pl.start("Compressing...");

    let artifact = huffpack::compress(&text)?;

    pl.done_with_count(text.len());

    artifact.store(&args.output)?;

    let frequencies = FrequencyTable::from_bytes(&text)?;
    info!(
        "{} bytes in, {} bytes out (ratio {:.3}), source entropy {:.3} bits/symbol",
        text.len(),
        artifact.serialized_len(),
        compression_ratio(text.len(), artifact.serialized_len()),
        entropy(&frequencies),
    );

    Ok(())
}
