//! File classification.
//!
//! Dispatch is a fixed priority chain on the module name: `.json`, then the
//! TypeScript flavors, then `.js`, then a MIME lookup on the extension.
//! `text/*` categories decode as text records, everything else lands in
//! binary records. Unknown extensions are not an error.

/// How one file's content enters the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceClass {
    /// `.json`, parsed and re-serialized
    Json,
    /// `.ts`, `.tsx` or `.mts`, transpiled to JavaScript
    TypeScript,
    /// `.js`, passed through unchanged
    JavaScript,
    /// `text/*` MIME category, decoded as UTF-8 text
    Text,
    /// Everything else, kept as raw bytes
    Binary,
}

/// Classifies a module name. Suffix checks are case sensitive; the MIME
/// lookup is not.
pub fn classify(name: &str) -> SourceClass {
    if name.ends_with(".json") {
        return SourceClass::Json;
    }
    if name.ends_with(".ts") || name.ends_with(".tsx") || name.ends_with(".mts") {
        return SourceClass::TypeScript;
    }
    if name.ends_with(".js") {
        return SourceClass::JavaScript;
    }
    match media_type(name) {
        Some(media) if media.starts_with("text/") => SourceClass::Text,
        _ => SourceClass::Binary,
    }
}

/// MIME type for a module name, by the extension of its final segment.
///
/// A closed table. It only has to be exhaustive enough to make the
/// text-versus-binary call; extensions it does not know fall through to
/// `None` and bundle as binary.
pub fn media_type(name: &str) -> Option<&'static str> {
    let file_name = match name.rsplit_once('/') {
        Some((_, file_name)) => file_name,
        None => name,
    };
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        // Dotfiles like `.gitignore` have no extension.
        return None;
    }
    let ext = ext.to_ascii_lowercase();
    let media = match ext.as_str() {
        "txt" | "text" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "yaml" | "yml" => "text/yaml",
        "js" | "mjs" => "text/javascript",
        "jsx" => "text/jsx",
        "vtt" => "text/vtt",
        "ics" => "text/calendar",
        "xml" | "xsd" | "xsl" => "application/xml",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(media)
}
