//! Bundle orchestration.
//!
//! One call runs the whole pipeline: walk the module root, resolve the
//! entry point, transform every file concurrently, assemble the table,
//! fingerprint it and render the generated source. Every step is
//! deterministic given the directory's contents, so rebuilding an unchanged
//! tree reproduces the artifact byte for byte.

pub mod artifact;
pub mod codegen;
pub mod hash;
pub mod media;
pub mod names;
pub mod record;
pub mod resolve;
pub mod suggest;
pub mod transform;
pub mod transpile;
pub mod walker;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;

pub use artifact::GeneratedArtifact;
pub use record::{BundleValue, ModuleRecord, ModuleTable, RoomModule};
pub use walker::FileLocation;

use crate::bundler::names::canonicalize;
use crate::error::Result;
use crate::specifier::{BundleMode, BundleSpecifier};

/// A fully described bundle request.
#[derive(Debug, Clone)]
pub struct BundleRequest {
    /// Parsed `root[:entryPoint]` specifier
    pub specifier: BundleSpecifier,
    /// Output mode selected by the host pipeline tag
    pub mode: BundleMode,
    /// File the specifier appeared in; the root resolves relative to its
    /// directory
    pub resolve_from: PathBuf,
}

impl BundleRequest {
    /// Builds a request from a raw specifier string.
    pub fn new(specifier: &str, mode: BundleMode, resolve_from: impl Into<PathBuf>) -> Self {
        Self {
            specifier: BundleSpecifier::parse(specifier),
            mode,
            resolve_from: resolve_from.into(),
        }
    }

    /// Builds a request from a host pipeline tag, declining tags that are
    /// not ours.
    pub fn from_pipeline(
        specifier: &str,
        pipeline: &str,
        resolve_from: impl Into<PathBuf>,
    ) -> Option<Self> {
        let mode = BundleMode::from_pipeline(pipeline)?;
        Some(Self::new(specifier, mode, resolve_from))
    }

    /// Directory holding the module set.
    pub fn module_root(&self) -> PathBuf {
        self.resolve_from
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.specifier.root)
    }
}

/// Runs one bundle request to completion.
///
/// # Examples
///
/// ```no_run
/// use roompack::{BundleMode, BundleRequest, bundle};
///
/// # async fn demo() -> roompack::Result<()> {
/// let request = BundleRequest::new(
///     "rooms/demo:index.ts",
///     BundleMode::Room,
///     "src/app.js",
/// );
/// let artifact = bundle(&request).await?;
/// println!("{} bytes at {}", artifact.code.len(), artifact.file_path.display());
/// # Ok(())
/// # }
/// ```
pub async fn bundle(request: &BundleRequest) -> Result<GeneratedArtifact> {
    let root_dir = request.module_root();
    let locations = walker::walk(&root_dir).await?;
    log::debug!(
        "discovered {} module files under {}",
        locations.len(),
        root_dir.display()
    );

    let mut names: Vec<String> = locations
        .iter()
        .map(|location| location.module_name.clone())
        .collect();
    names.sort();

    let entry = request.specifier.entry.as_deref();
    let root = request.specifier.root.as_str();

    let table = match request.mode {
        BundleMode::Room => {
            let main = resolve::resolve_entry(&root_dir, root, entry, &names)?;
            let source = transform_all(&locations, Some(&main)).await?;
            ModuleTable::Room(RoomModule { main, source })
        }
        BundleMode::Modules | BundleMode::Integrity => {
            let main = resolve::resolve_optional_entry(&root_dir, root, entry, &names)?;
            let records = transform_all(&locations, main.as_deref()).await?;
            ModuleTable::Flat(
                records
                    .into_iter()
                    .map(|(name, record)| (format!("/{name}"), record))
                    .collect(),
            )
        }
    };

    let value = table.to_value();
    let integrity = hash::fingerprint(&value);
    log::debug!("bundle \"{}\" integrity {integrity}", request.specifier);

    let code = match request.mode {
        BundleMode::Modules => format!(
            "export const integrity={};export const modules={};",
            codegen::string_literal(&integrity),
            codegen::to_source_code(&value)
        ),
        BundleMode::Integrity => codegen::string_literal(&integrity),
        BundleMode::Room => format!(
            "export const roomIntegrity={};export const roomModule={};",
            codegen::string_literal(&integrity),
            codegen::to_source_code(&value)
        ),
    };

    let mut changed: Vec<PathBuf> = locations.into_iter().map(|location| location.path).collect();
    changed.sort();

    Ok(GeneratedArtifact {
        file_path: root_dir.join(artifact::file_name(request.mode, entry)),
        code,
        integrity,
        invalidate_on_file_create: artifact::creation_glob(&root_dir),
        invalidate_on_file_change: changed,
        pipeline: None,
    })
}

/// Transforms every discovered file concurrently, keyed by module name.
///
/// `main` is the resolved canonical entry; every record whose canonical
/// name equals it gets the entry flags, which also covers source/compiled
/// name collisions.
async fn transform_all(
    locations: &[FileLocation],
    main: Option<&str>,
) -> Result<BTreeMap<String, ModuleRecord>> {
    let transforms = locations.iter().map(|location| {
        let is_entry = main == Some(canonicalize(&location.module_name).as_str());
        async move {
            let record = transform::transform(location, is_entry).await?;
            Ok::<_, crate::error::BundleError>((location.module_name.clone(), record))
        }
    });
    let records = try_join_all(transforms).await?;
    Ok(records.into_iter().collect())
}
