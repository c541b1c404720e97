//! Manifest assembly.
//!
//! The [`ManifestBuilder`] turns archives on disk into [`DistManifest`]
//! entries: hash the archive, list its contents, classify the library
//! files, and file the result under a normalized artifact id.

use crate::classify::LibraryLayout;
use crate::manifest::{ArtifactEntry, DistManifest};
use crate::{ARCHIVE_EXTENSION, ManifestResult, archive, hash, naming};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find release archives under a directory, recursively.
///
/// Only regular files with a `.zip` extension count; the comparison is
/// case-sensitive. Unreadable directory entries are skipped. Paths come
/// back sorted so processing order is stable across runs.
#[must_use]
pub fn find_archives<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut archives: Vec<PathBuf> = WalkDir::new(dir.as_ref())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
        })
        .map(|e| e.into_path())
        .collect();

    archives.sort();
    archives
}

/// Builds a [`DistManifest`] from release archives.
///
/// # Example
///
/// ```no_run
/// use ort_dist_manifest::{ManifestBuilder, find_archives};
///
/// let mut builder = ManifestBuilder::new();
/// for archive in find_archives("artifacts") {
///     builder.add_archive(&archive)?;
/// }
/// let manifest = builder.finish();
/// # Ok::<(), ort_dist_manifest::ManifestError>(())
/// ```
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    layout: LibraryLayout,
    manifest: DistManifest,
}

impl ManifestBuilder {
    /// Create a builder with the default ONNX Runtime layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom library layout.
    #[must_use]
    pub fn with_layout(layout: LibraryLayout) -> Self {
        Self {
            layout,
            manifest: DistManifest::new(),
        }
    }

    /// Process one archive and record it in the manifest.
    ///
    /// Returns the artifact id the entry was filed under. An id collision
    /// replaces the previous entry, so with sorted input the archive later
    /// in path order wins.
    ///
    /// # Errors
    ///
    /// Fails when the archive cannot be read or hashed, is not a valid ZIP
    /// file, or does not classify as an ONNX Runtime build. The manifest
    /// is left unchanged on error.
    pub fn add_archive<P: AsRef<Path>>(&mut self, path: P) -> ManifestResult<String> {
        let path = path.as_ref();

        let sha256 = hash::sha256_file(path)?;
        let entries = archive::entry_names(path)?;
        let files = self.layout.classify(&entries)?;

        let base_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let id = naming::artifact_id(&base_name);
        self.manifest.insert(
            id.clone(),
            ArtifactEntry {
                archive: file_name,
                sha256,
                ort_lib: files.main_library,
                extra_files: files.extra_files,
            },
        );

        Ok(id)
    }

    /// The manifest assembled so far.
    #[must_use]
    pub fn manifest(&self) -> &DistManifest {
        &self.manifest
    }

    /// Consume the builder and return the manifest.
    #[must_use]
    pub fn finish(self) -> DistManifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::ManifestError;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_archive(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = dir.join(name);

        let file = File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (entry_name, contents) in entries {
            zip.start_file(*entry_name, options).unwrap();
            zip.write_all(contents).unwrap();
        }
        zip.finish().unwrap();

        path
    }

    fn linux_release_entries() -> Vec<(&'static str, &'static [u8])> {
        vec![
            ("onnxruntime/lib/libonnxruntime.so", b"main library".as_slice()),
            ("onnxruntime/lib/libonnxruntime.so.1", b"versioned".as_slice()),
            ("onnxruntime/lib/README", b"docs".as_slice()),
        ]
    }

    #[test]
    fn find_archives___collects_zip_files_recursively_in_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("b-dir");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("z.zip"), b"z").unwrap();
        fs::write(nested.join("a.zip"), b"a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"skip").unwrap();
        fs::write(temp_dir.path().join("no_extension"), b"skip").unwrap();

        let archives = find_archives(temp_dir.path());

        assert_eq!(
            archives,
            vec![nested.join("a.zip"), temp_dir.path().join("z.zip")]
        );
    }

    #[test]
    fn find_archives___missing_directory___returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(find_archives(&missing).is_empty());
    }

    #[test]
    fn find_archives___extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("upper.ZIP"), b"skip").unwrap();
        fs::write(temp_dir.path().join("lower.zip"), b"keep").unwrap();

        let archives = find_archives(temp_dir.path());

        assert_eq!(archives, vec![temp_dir.path().join("lower.zip")]);
    }

    #[test]
    fn ManifestBuilder___add_archive___records_classified_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_archive(
            temp_dir.path(),
            "ort-1.2.3-linux-x86_64-release.zip",
            &linux_release_entries(),
        );

        let mut builder = ManifestBuilder::new();
        let id = builder.add_archive(&path).unwrap();

        assert_eq!(id, "linux-x86_64-release");
        let entry = builder.manifest().get(&id).unwrap();
        assert_eq!(entry.archive, "ort-1.2.3-linux-x86_64-release.zip");
        assert_eq!(entry.sha256, hash::sha256_file(&path).unwrap());
        assert_eq!(entry.ort_lib, "onnxruntime/lib/libonnxruntime.so");
        assert_eq!(
            entry.extra_files,
            vec!["onnxruntime/lib/libonnxruntime.so.1"]
        );
    }

    #[test]
    fn ManifestBuilder___add_archive___not_a_zip___leaves_manifest_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.zip");
        fs::write(&path, b"not a zip file").unwrap();

        let mut builder = ManifestBuilder::new();
        let err = builder.add_archive(&path).unwrap_err();

        assert!(matches!(err, ManifestError::Zip(_)));
        assert!(builder.manifest().is_empty());
    }

    #[test]
    fn ManifestBuilder___add_archive___unrecognizable_layout___returns_classification_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_archive(
            temp_dir.path(),
            "ort-1.2.3-linux-x86_64-release.zip",
            &[("include/onnxruntime_c_api.h", b"header".as_slice())],
        );

        let mut builder = ManifestBuilder::new();
        let err = builder.add_archive(&path).unwrap_err();

        assert!(err.is_classification());
        assert!(builder.manifest().is_empty());
    }

    #[test]
    fn ManifestBuilder___add_archive___colliding_ids___later_archive_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dir_a = temp_dir.path().join("a");
        let dir_b = temp_dir.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();
        write_archive(
            &dir_a,
            "ort-1.2.3-linux-x86_64-release.zip",
            &linux_release_entries(),
        );
        write_archive(
            &dir_b,
            "ort-9.9.9-linux-x86_64-release.zip",
            &linux_release_entries(),
        );

        let mut builder = ManifestBuilder::new();
        for path in find_archives(temp_dir.path()) {
            builder.add_archive(&path).unwrap();
        }

        let manifest = builder.finish();
        assert_eq!(manifest.len(), 1);
        assert_eq!(
            manifest.get("linux-x86_64-release").unwrap().archive,
            "ort-9.9.9-linux-x86_64-release.zip"
        );
    }

    #[test]
    fn ManifestBuilder___with_layout___uses_custom_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_archive(
            temp_dir.path(),
            "custom.zip",
            &[("runtime/libonnxruntime.so", b"lib".as_slice())],
        );

        let layout = LibraryLayout {
            directories: &["runtime"],
            ..LibraryLayout::default()
        };
        let mut builder = ManifestBuilder::with_layout(layout);
        let id = builder.add_archive(&path).unwrap();

        assert_eq!(id, "custom");
        assert_eq!(
            builder.manifest().get("custom").unwrap().ort_lib,
            "runtime/libonnxruntime.so"
        );
    }
}
