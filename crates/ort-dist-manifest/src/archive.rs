//! ZIP archive inspection.

use crate::ManifestResult;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// List the entry names of a ZIP archive in central-directory order.
///
/// Directory entries (names ending in `/`) are included; nothing is
/// decompressed.
pub fn entry_names<P: AsRef<Path>>(path: P) -> ManifestResult<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let archive = ZipArchive::new(file)?;

    Ok((0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(String::from))
        .collect())
}
