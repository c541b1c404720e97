//! Artifact naming and Rust target resolution.
//!
//! Release archives are named `ort-<version>-<platform>-<buildtype>.zip`.
//! The manifest keys artifacts by the `<platform>-<buildtype>` part,
//! lowercased, and the dist file re-keys them by Rust target triple.

/// Leading name component of release archives.
const ARTIFACT_PREFIX: &str = "ort";

/// Normalize an archive base name (file name without `.zip`) into an
/// artifact id.
///
/// Strips the `ort-<version>-` prefix when present, then lowercases. Names
/// that do not carry the prefix pass through unchanged apart from case, so
/// the function is idempotent.
#[must_use]
pub fn artifact_id(base_name: &str) -> String {
    strip_version_prefix(base_name).to_lowercase()
}

/// Strip `ort-<version>-` from `ort-<version>-<platform>-<buildtype>`.
///
/// The prefix match is exact; anything that does not split into at least
/// three `-`-separated parts with a leading `ort` is returned as-is.
fn strip_version_prefix(base_name: &str) -> &str {
    let mut parts = base_name.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(_version), Some(rest)) if prefix == ARTIFACT_PREFIX => rest,
        _ => base_name,
    }
}

/// Platform substrings mapped to Rust target triples, in match order.
///
/// `android-x86_64` sits before `android-x86`; the first is a superstring
/// of the second, so swapping them would misresolve 64-bit Android ids.
const TARGET_TRIPLES: &[(&str, &str)] = &[
    ("linux-aarch64", "aarch64-unknown-linux-gnu"),
    ("linux-x86_64", "x86_64-unknown-linux-gnu"),
    ("macos-aarch64", "aarch64-apple-darwin"),
    ("macos-x86_64", "x86_64-apple-darwin"),
    ("windows-aarch64", "aarch64-pc-windows-msvc"),
    ("windows-x86_64", "x86_64-pc-windows-msvc"),
    ("emscripten-wasm32", "wasm32-unknown-emscripten"),
    ("ios-aarch64", "aarch64-apple-ios"),
    ("ios-simulator-aarch64", "aarch64-apple-ios-sim"),
    ("android-aarch64", "aarch64-linux-android"),
    ("android-armeabi-v7a", "armv7-linux-androideabi"),
    ("android-x86_64", "x86_64-linux-android"),
    ("android-x86", "i686-linux-android"),
];

/// Ordered lookup table from artifact ids to Rust target descriptors.
#[derive(Debug, Clone)]
pub struct TargetMap {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for TargetMap {
    fn default() -> Self {
        Self {
            entries: TARGET_TRIPLES,
        }
    }
}

impl TargetMap {
    /// Create a map with the built-in platform table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an artifact id to a target descriptor such as
    /// `x86_64-unknown-linux-gnu-release`.
    ///
    /// The first table entry contained in the id wins. The build-type
    /// suffix is `release` when the id contains `release`, otherwise
    /// `debug`. Returns `None` for platforms the table does not know,
    /// which drops the artifact from the dist file but not the manifest.
    #[must_use]
    pub fn resolve(&self, artifact_id: &str) -> Option<String> {
        for (platform, triple) in self.entries.iter().copied() {
            if artifact_id.contains(platform) {
                let build_mode = if artifact_id.contains("release") {
                    "release"
                } else {
                    "debug"
                };
                return Some(format!("{triple}-{build_mode}"));
            }
        }
        None
    }

    /// The underlying `(platform substring, target triple)` table.
    #[must_use]
    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        self.entries
    }
}
