//! Release manifest generation for ONNX Runtime build archives.
//!
//! This crate inspects the ZIP archives of a multi-platform ONNX Runtime
//! release, fingerprints each one, locates the libraries inside it, and
//! models the two files consumers read: `manifest.json` (entries keyed by
//! artifact id) and `ort_dist.yaml` (entries keyed by Rust target
//! descriptor, plus release metadata).
//!
//! # Archive Structure
//!
//! Classification expects the layout ONNX Runtime builds produce:
//!
//! ```text
//! ort-1.22.0-linux-x86_64-release.zip
//! ├── onnxruntime/
//! │   ├── lib/
//! │   │   ├── libonnxruntime.so        # main library
//! │   │   └── libonnxruntime.so.1      # companion runtime file
//! │   └── include/
//! │       └── onnxruntime_c_api.h
//! ├── LICENSE
//! └── README.md
//! ```
//!
//! Windows builds keep their binaries under `onnxruntime/bin/` instead;
//! both directories are searched.
//!
//! # Example
//!
//! ```no_run
//! use ort_dist_manifest::{ManifestBuilder, TargetMap, find_archives};
//!
//! let mut builder = ManifestBuilder::new();
//! for archive in find_archives("artifacts") {
//!     builder.add_archive(&archive)?;
//! }
//!
//! let manifest = builder.finish();
//! let json = manifest.to_json_pretty()?;
//! let yaml = manifest
//!     .to_dist(&TargetMap::new(), "v2.0.1", "v1.22.0")
//!     .to_yaml()?;
//! # Ok::<(), ort_dist_manifest::ManifestError>(())
//! ```

mod archive;
mod error;
mod hash;
mod manifest;

pub mod builder;
pub mod classify;
pub mod naming;

pub use archive::entry_names;
pub use builder::{ManifestBuilder, find_archives};
pub use classify::{LibraryFiles, LibraryLayout};
pub use error::ManifestError;
pub use hash::sha256_file;
pub use manifest::{ArtifactEntry, DistManifest, OrtDist};
pub use naming::{TargetMap, artifact_id};

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Release archive file extension.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Manifest output file name.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Dist output file name.
pub const DIST_FILE: &str = "ort_dist.yaml";
