//! Manifest and dist-file schemas.
//!
//! The manifest (`manifest.json`) records every processed archive keyed by
//! artifact id. The dist file (`ort_dist.yaml`) re-keys the same records by
//! Rust target descriptor and adds release metadata.

use crate::ManifestResult;
use crate::naming::TargetMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One processed archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Archive file name, e.g. `ort-1.22.0-linux-x86_64-release.zip`.
    pub archive: String,

    /// SHA-256 digest of the whole archive, lowercase hex.
    pub sha256: String,

    /// Entry path of the main ONNX Runtime library inside the archive.
    pub ort_lib: String,

    /// Companion runtime files, sorted by entry path.
    pub extra_files: Vec<String>,
}

/// Release manifest: artifact entries keyed by artifact id.
///
/// This corresponds to the `manifest.json` file. Keys come out sorted, so
/// repeated runs over the same archives produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistManifest(BTreeMap<String, ArtifactEntry>);

impl DistManifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under an artifact id.
    ///
    /// A colliding id replaces the previous entry (last write wins) and
    /// the displaced entry is returned.
    pub fn insert(&mut self, artifact_id: String, entry: ArtifactEntry) -> Option<ArtifactEntry> {
        self.0.insert(artifact_id, entry)
    }

    /// Look up an entry by artifact id.
    #[must_use]
    pub fn get(&self, artifact_id: &str) -> Option<&ArtifactEntry> {
        self.0.get(artifact_id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the manifest holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in artifact-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ArtifactEntry)> {
        self.0.iter()
    }

    /// Serialize to pretty-printed JSON (2-space indent).
    pub fn to_json_pretty(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> ManifestResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the dist view of this manifest.
    ///
    /// Entries whose artifact id resolves to no Rust target are left out
    /// of the dist file; they stay in the manifest itself.
    #[must_use]
    pub fn to_dist(&self, targets: &TargetMap, release_tag: &str, onnxruntime_ref: &str) -> OrtDist {
        let rust_targets = self
            .0
            .iter()
            .filter_map(|(id, entry)| targets.resolve(id).map(|target| (target, entry.clone())))
            .collect();

        OrtDist {
            release_tag: release_tag.to_string(),
            onnxruntime_ref: onnxruntime_ref.to_string(),
            rust_targets,
        }
    }
}

/// Release metadata plus artifacts keyed by Rust target descriptor.
///
/// This corresponds to the `ort_dist.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrtDist {
    /// Tag of the release the archives belong to.
    pub release_tag: String,

    /// Upstream ONNX Runtime ref the archives were built from.
    pub onnxruntime_ref: String,

    /// Artifact entries keyed by descriptors such as
    /// `x86_64-unknown-linux-gnu-release`.
    pub rust_targets: BTreeMap<String, ArtifactEntry>,
}

impl OrtDist {
    /// Serialize to YAML.
    pub fn to_yaml(&self) -> ManifestResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
