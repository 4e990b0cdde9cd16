//! Per-file content transformation.

use tokio::fs;

use crate::bundler::media::{self, SourceClass};
use crate::bundler::record::ModuleRecord;
use crate::bundler::transpile;
use crate::bundler::walker::FileLocation;
use crate::error::{BundleError, Result};

/// Converts one discovered file into its bundled record.
///
/// Pure given the file's current bytes: the record depends only on content
/// and module name. `is_entry` marks a JavaScript record as the eagerly
/// evaluated, hook-exposing entry point; it has no effect on json, text or
/// binary records.
pub async fn transform(location: &FileLocation, is_entry: bool) -> Result<ModuleRecord> {
    let bytes = fs::read(&location.path)
        .await
        .map_err(|source| BundleError::FileUnreadable {
            path: location.path.clone(),
            source,
        })?;
    let name = location.module_name.as_str();
    let class = media::classify(name);
    log::trace!("transform \"{name}\" as {class:?}");

    match class {
        SourceClass::Json => {
            let parsed: serde_json::Value =
                serde_json::from_slice(&bytes).map_err(|source| BundleError::InvalidJson {
                    name: name.to_string(),
                    source,
                })?;
            let source =
                serde_json::to_string(&parsed).map_err(|source| BundleError::InvalidJson {
                    name: name.to_string(),
                    source,
                })?;
            Ok(ModuleRecord::Json { source })
        }
        SourceClass::TypeScript => {
            let text = String::from_utf8_lossy(&bytes);
            let source = transpile::transpile(&text, name)?;
            Ok(ModuleRecord::js(source, is_entry))
        }
        SourceClass::JavaScript => {
            let source = String::from_utf8_lossy(&bytes).into_owned();
            Ok(ModuleRecord::js(source, is_entry))
        }
        SourceClass::Text => Ok(ModuleRecord::Text {
            source: String::from_utf8_lossy(&bytes).into_owned(),
        }),
        SourceClass::Binary => Ok(ModuleRecord::Bin { source: bytes }),
    }
}
