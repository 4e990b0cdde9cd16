//! Error types for bundle construction.
//!
//! Every failure maps to exactly one variant and every variant is fatal: a
//! build request either produces a complete artifact or stops at the first
//! error. The entry-point variants embed a corrected specifier so the host
//! tool can print a "did you mean" hint without recomputing it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Main error type for all bundling operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// The module root (or a nested directory) could not be listed
    #[error("cannot list module directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory that failed to list
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// A discovered file could not be statted or read
    #[error("cannot read module file {}: {source}", path.display())]
    FileUnreadable {
        /// File that failed to read
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// A `.json` module failed to parse
    #[error("module \"{name}\" is not valid JSON: {source}")]
    InvalidJson {
        /// Module name of the offending file
        name: String,
        /// Parser diagnostic
        #[source]
        source: serde_json::Error,
    },

    /// The TypeScript compiler reported a diagnostic
    #[error("cannot transpile module \"{name}\": {message}")]
    Transpile {
        /// Module name of the offending file
        name: String,
        /// Compiler diagnostic text
        message: String,
    },

    /// The module root contained no files at all
    #[error("module directory {} contains no files", path.display())]
    EmptyModuleSet {
        /// Walked module root
        path: PathBuf,
    },

    /// The request requires an entry point but the specifier named none
    #[error("no entry point in specifier \"{root}\", did you mean \"{root}:{suggestion}\"?")]
    MissingEntryPoint {
        /// Root portion of the offending specifier
        root: String,
        /// Discovered module name closest to the conventional entry
        suggestion: String,
    },

    /// The requested entry point matches no discovered module
    #[error("unknown entry point \"{entry}\" in \"{root}:{entry}\", did you mean \"{root}:{suggestion}\"?")]
    UnknownEntryPoint {
        /// Root portion of the offending specifier
        root: String,
        /// Entry point exactly as requested
        entry: String,
        /// Discovered module name closest to the requested entry
        suggestion: String,
    },
}
