//! TypeScript to JavaScript transpilation using deno_ast.
//!
//! The compiler is a collaborator with a pinned configuration: ESNext
//! module output, classic React JSX, comments stripped, no source maps.
//! Compiler diagnostics are surfaced as bundle errors, never swallowed.

use deno_ast::{
    EmitOptions, MediaType, ModuleSpecifier, ParseParams, SourceMapOption, TranspileModuleOptions,
    TranspileOptions,
};

use crate::error::{BundleError, Result};

/// Specifier used when a module name does not form a valid file URL.
const FALLBACK_SPECIFIER: &str = "file:///module.ts";

/// Transpiles TypeScript source text to JavaScript.
///
/// `name` is the module name: it selects the syntax flavor (`.tsx` parses
/// JSX, `.mts` parses as an ES module) and labels compiler diagnostics.
pub fn transpile(source: &str, name: &str) -> Result<String> {
    let specifier = match ModuleSpecifier::parse(&format!("file:///{name}")) {
        Ok(url) => url,
        Err(_) => ModuleSpecifier::parse(FALLBACK_SPECIFIER)
            .map_err(|e| diagnostic(name, e.to_string()))?,
    };

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source.into(),
        media_type: media_type_for(name),
        capture_tokens: false,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| diagnostic(name, e.to_string()))?;

    // parse_module recovers from some syntax errors; recovered diagnostics
    // still fail the bundle.
    if let Some(first) = parsed.diagnostics().first() {
        return Err(diagnostic(name, first.to_string()));
    }

    let transpiled = parsed
        .transpile(
            &TranspileOptions::default(),
            &TranspileModuleOptions::default(),
            &EmitOptions {
                remove_comments: true,
                source_map: SourceMapOption::None,
                ..Default::default()
            },
        )
        .map_err(|e| diagnostic(name, e.to_string()))?;

    Ok(transpiled.into_source().text)
}

fn media_type_for(name: &str) -> MediaType {
    if name.ends_with(".tsx") {
        MediaType::Tsx
    } else if name.ends_with(".mts") {
        MediaType::Mts
    } else {
        MediaType::TypeScript
    }
}

fn diagnostic(name: &str, message: String) -> BundleError {
    BundleError::Transpile {
        name: name.to_string(),
        message,
    }
}
