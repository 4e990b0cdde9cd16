//! Deterministic module-table bundler
//!
//! Turns a directory of heterogeneous files into a self-describing bundle:
//! - a typed module table (JSON validated, TypeScript transpiled, text
//!   decoded, everything else kept as raw bytes)
//! - an order-independent SHA-256 integrity fingerprint of that table
//! - a JavaScript source literal that reconstructs the table in a host
//!   runtime
//!
//! Requests arrive as `root[:entryPoint]` specifiers. When a mode requires
//! an entry point it is validated up front, with edit-distance "did you
//! mean" suggestions baked into the errors.

pub mod bundler;
pub mod error;
pub mod specifier;

// Re-export commonly used types
pub use bundler::{BundleRequest, GeneratedArtifact, ModuleRecord, ModuleTable, bundle};
pub use error::{BundleError, Result};
pub use specifier::{BundleMode, BundleSpecifier};
