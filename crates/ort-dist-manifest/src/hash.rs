//! File fingerprinting.

use crate::ManifestResult;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming hashes.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file and return it as a lowercase hex
/// string.
///
/// The file is read in chunks so archives never need to fit in memory.
pub fn sha256_file<P: AsRef<Path>>(path: P) -> ManifestResult<String> {
    let mut file = File::open(path.as_ref())?;
    let mut hasher = Sha256::new();

    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
