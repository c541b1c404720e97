//! Manifest generation command.
//!
//! Scans a directory of release archives and writes `manifest.json` and
//! `ort_dist.yaml` next to it.

use anyhow::{Context, Result};
use ort_dist_manifest::{DIST_FILE, MANIFEST_FILE, ManifestBuilder, TargetMap, find_archives};
use std::fs;
use std::path::Path;

/// Directory scanned for release archives, relative to the working root.
const ARTIFACTS_DIR: &str = "artifacts";

/// Run manifest generation rooted at `root`.
///
/// Output files land in `root`. A missing or empty artifacts directory is
/// reported and nothing is written. Archives that fail to process are
/// reported and skipped; the remaining archives still produce output, even
/// when none survive.
pub fn run(release_tag: &str, onnxruntime_ref: &str, root: &Path) -> Result<()> {
    let artifacts_dir = root.join(ARTIFACTS_DIR);

    if !artifacts_dir.exists() {
        eprintln!("Error: {ARTIFACTS_DIR}/ directory not found");
        return Ok(());
    }

    let archives = find_archives(&artifacts_dir);
    if archives.is_empty() {
        eprintln!("Warning: No archives found in {ARTIFACTS_DIR}/");
        return Ok(());
    }

    let mut builder = ManifestBuilder::new();
    for path in &archives {
        println!("Processing {}...", path.display());
        match builder.add_archive(path) {
            Ok(_) => {}
            Err(err) if err.is_classification() => {
                eprintln!("Warning: {err} in {}", path.display());
            }
            Err(err) => {
                eprintln!("Error reading archive {}: {err}", path.display());
            }
        }
    }

    let manifest = builder.finish();

    // Serialize both outputs before writing either, so a late failure
    // cannot leave one file stale against the other.
    let json = manifest
        .to_json_pretty()
        .context("Failed to serialize manifest")?;
    let yaml = manifest
        .to_dist(&TargetMap::new(), release_tag, onnxruntime_ref)
        .to_yaml()
        .context("Failed to serialize dist file")?;

    let manifest_path = root.join(MANIFEST_FILE);
    fs::write(&manifest_path, json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
    println!("\nManifest generated: {MANIFEST_FILE}");
    println!("Total artifacts: {}", manifest.len());

    let dist_path = root.join(DIST_FILE);
    fs::write(&dist_path, yaml)
        .with_context(|| format!("Failed to write {}", dist_path.display()))?;
    println!("\nort dist generated: {DIST_FILE}");

    Ok(())
}
