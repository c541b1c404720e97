//! ort-dist CLI - release manifest generator
//!
//! Scans `artifacts/` for ONNX Runtime build archives and writes
//! `manifest.json` and `ort_dist.yaml` into the current directory.

use clap::Parser;
use std::path::Path;

mod generate;

#[derive(Parser)]
#[command(name = "ort-dist")]
#[command(author, version, about = "Generate release manifests for ONNX Runtime build archives", long_about = None)]
struct Cli {
    /// The release tag the archives belong to
    #[arg(long)]
    release_tag: String,

    /// The ONNX Runtime ref the archives were built from
    #[arg(long)]
    onnxruntime_ref: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    generate::run(&cli.release_tag, &cli.onnxruntime_ref, Path::new("."))?;

    Ok(())
}
