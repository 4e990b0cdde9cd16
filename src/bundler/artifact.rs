//! Host-facing generated artifact.
//!
//! The artifact carries everything a host build tool needs to materialize
//! one bundle: a virtual file path unique to the `(root, entryPoint)` pair,
//! the generated code, the invalidation inputs that key the host's cache,
//! and an explicit pipeline stop so the output is not bundled again.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;

use crate::specifier::BundleMode;

/// One finished bundle, ready to hand to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    /// Virtual path of the generated file, rooted in the module directory
    pub file_path: PathBuf,
    /// Generated source text
    pub code: String,
    /// Integrity fingerprint of the bundled table, lowercase hex
    pub integrity: String,
    /// Glob the host watches so created or deleted files rebuild the bundle
    pub invalidate_on_file_create: String,
    /// Every discovered source file; content changes rebuild the bundle
    pub invalidate_on_file_change: Vec<PathBuf>,
    /// Always `None`: no further pipeline stage runs on this output
    pub pipeline: Option<String>,
}

/// Virtual file name for a mode and entry-point pair.
///
/// The entry spelling is folded in as URL-safe unpadded base64, keeping the
/// name filesystem-clean while staying unique per entry. No entry encodes
/// as the empty string.
pub fn file_name(mode: BundleMode, entry: Option<&str>) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(entry.unwrap_or(""));
    match mode {
        BundleMode::Modules => format!(".room-modules.{encoded}.js"),
        BundleMode::Integrity => format!(".room-modules-integrity.{encoded}.json"),
        BundleMode::Room => format!(".room-module.{encoded}.js"),
    }
}

/// Creation-watch glob for the module root. Forward slashes on every
/// platform; hosts treat globs as portable strings, not native paths.
pub fn creation_glob(root_dir: &Path) -> String {
    let normalized = root_dir.to_string_lossy().replace('\\', "/");
    format!("{}/**/*", normalized.trim_end_matches('/'))
}
