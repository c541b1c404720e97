//! Library file classification.
//!
//! ONNX Runtime build archives keep their binaries under a small set of
//! well-known directories. Classification walks an archive's entry list,
//! picks out the files sitting directly in those directories, and splits
//! them into the main ONNX Runtime library and its companion runtime files.

use crate::{ManifestError, ManifestResult};
use std::collections::BTreeSet;

/// Infix that marks versioned shared objects such as `libonnxruntime.so.1`.
const VERSIONED_SO_INFIX: &str = ".so.";

/// Where build archives keep their libraries and which names count as the
/// main library.
///
/// The default layout matches ONNX Runtime release archives. All paths are
/// `/`-separated archive entry paths, not filesystem paths.
#[derive(Debug, Clone)]
pub struct LibraryLayout {
    /// Directories searched for library files.
    pub directories: &'static [&'static str],
    /// Basenames recognized as the main ONNX Runtime library.
    pub main_library_names: &'static [&'static str],
    /// Extensions that mark companion runtime files (import libraries,
    /// debug symbols, secondary shared objects).
    pub extra_extensions: &'static [&'static str],
}

impl Default for LibraryLayout {
    fn default() -> Self {
        Self {
            directories: &["onnxruntime/bin", "onnxruntime/lib"],
            main_library_names: &[
                "onnxruntime.dll",
                "libonnxruntime.so",
                "libonnxruntime.dylib",
                "onnxruntime.lib",
                "libonnxruntime.a",
            ],
            extra_extensions: &[".dll", ".so", ".dylib", ".pdb"],
        }
    }
}

/// Classified library files from one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFiles {
    /// Entry path of the main ONNX Runtime library.
    pub main_library: String,
    /// Companion runtime files, sorted by entry path.
    pub extra_files: Vec<String>,
}

impl LibraryLayout {
    /// Classify an archive's entry list into main library and extra files.
    ///
    /// Only files sitting directly in a recognized library directory are
    /// considered; nested subdirectories are ignored. When several entries
    /// qualify as the main library, the first in sorted entry-path order
    /// wins, so results never depend on archive entry order.
    ///
    /// # Errors
    ///
    /// Returns a classification error when no recognized directory is
    /// present, the directories hold no files, or none of the files is a
    /// main ONNX Runtime library. See [`ManifestError::is_classification`].
    pub fn classify(&self, entries: &[String]) -> ManifestResult<LibraryFiles> {
        let present_dirs: Vec<&str> = self
            .directories
            .iter()
            .copied()
            .filter(|dir| {
                let prefix = format!("{dir}/");
                entries.iter().any(|e| e.starts_with(&prefix))
            })
            .collect();

        if present_dirs.is_empty() {
            return Err(ManifestError::NoLibraryDirs);
        }

        // BTreeSet both deduplicates and fixes iteration order.
        let mut candidates: BTreeSet<&str> = BTreeSet::new();
        for dir in &present_dirs {
            let prefix = format!("{dir}/");
            for entry in entries {
                if let Some(relative) = entry.strip_prefix(&prefix) {
                    if !relative.is_empty() && !relative.contains('/') {
                        candidates.insert(entry.as_str());
                    }
                }
            }
        }

        if candidates.is_empty() {
            return Err(ManifestError::NoLibraryFiles);
        }

        let main_library = candidates
            .iter()
            .copied()
            .find(|path| self.main_library_names.contains(&basename(path)))
            .ok_or(ManifestError::NoMainLibrary)?;

        let extra_files = candidates
            .iter()
            .copied()
            .filter(|&path| path != main_library)
            .filter(|path| {
                self.extra_extensions.iter().any(|ext| path.ends_with(ext))
                    || path.contains(VERSIONED_SO_INFIX)
            })
            .map(String::from)
            .collect();

        Ok(LibraryFiles {
            main_library: main_library.to_string(),
            extra_files,
        })
    }
}

/// Final path segment of a `/`-separated archive entry path.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
