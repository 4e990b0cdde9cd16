//! Entry-point resolution.
//!
//! Runs after discovery and before any file content is read, so a typo'd
//! request never pays for transformation. Matching is canonical on both
//! sides: requesting `index.ts` finds a discovered `index.ts` because both
//! canonicalize to `index.js`, and that canonical spelling is what the
//! loader will look up at runtime.

use std::path::Path;

use crate::bundler::names::canonicalize;
use crate::bundler::suggest::suggest;
use crate::error::{BundleError, Result};

/// Entry name suggested when a specifier forgot to name one.
const CONVENTIONAL_ENTRY: &str = "index.ts";

/// Resolves a mandatory entry point to its canonical name.
///
/// `names` are the discovered module names, pre-sorted so suggestion
/// tie-breaking is deterministic. Fails with [`BundleError::EmptyModuleSet`]
/// when nothing was discovered, [`BundleError::MissingEntryPoint`] when the
/// specifier named no entry, and [`BundleError::UnknownEntryPoint`] when it
/// named one that matches nothing.
pub fn resolve_entry(
    root_dir: &Path,
    root: &str,
    entry: Option<&str>,
    names: &[String],
) -> Result<String> {
    ensure_non_empty(root_dir, names)?;
    match entry {
        Some(entry) => match_entry(root, entry, names),
        None => Err(BundleError::MissingEntryPoint {
            root: root.to_string(),
            suggestion: closest(CONVENTIONAL_ENTRY, names),
        }),
    }
}

/// Resolves an optional entry point.
///
/// Same matching and same [`BundleError::EmptyModuleSet`] gate as
/// [`resolve_entry`], but a specifier without an entry is fine and resolves
/// to `None`.
pub fn resolve_optional_entry(
    root_dir: &Path,
    root: &str,
    entry: Option<&str>,
    names: &[String],
) -> Result<Option<String>> {
    ensure_non_empty(root_dir, names)?;
    entry
        .map(|entry| match_entry(root, entry, names))
        .transpose()
}

fn ensure_non_empty(root_dir: &Path, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(BundleError::EmptyModuleSet {
            path: root_dir.to_path_buf(),
        });
    }
    Ok(())
}

fn match_entry(root: &str, entry: &str, names: &[String]) -> Result<String> {
    let canonical = canonicalize(entry);
    if names.iter().any(|name| canonicalize(name) == canonical) {
        return Ok(canonical);
    }
    // Suggest against the names as spelled: the user typed a source
    // spelling, so the hint should be one too.
    Err(BundleError::UnknownEntryPoint {
        root: root.to_string(),
        entry: entry.to_string(),
        suggestion: closest(entry, names),
    })
}

fn closest(query: &str, names: &[String]) -> String {
    suggest(query, names.iter().map(String::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    fn root_dir() -> PathBuf {
        PathBuf::from("rooms/demo")
    }

    #[test]
    fn source_spelling_resolves_to_canonical_name() {
        let names = names(&["config.json", "index.ts", "lib/util.ts"]);
        let main = resolve_entry(&root_dir(), "rooms/demo", Some("index.ts"), &names).unwrap();
        assert_eq!(main, "index.js");
    }

    #[test]
    fn compiled_spelling_matches_source_file() {
        let names = names(&["index.ts"]);
        let main = resolve_entry(&root_dir(), "rooms/demo", Some("index.js"), &names).unwrap();
        assert_eq!(main, "index.js");
    }

    #[test]
    fn non_script_entries_resolve_verbatim() {
        let names = names(&["config.json", "index.ts"]);
        let main = resolve_entry(&root_dir(), "rooms/demo", Some("config.json"), &names).unwrap();
        assert_eq!(main, "config.json");
    }

    #[test]
    fn missing_entry_suggests_closest_to_convention() {
        let names = names(&["config.json", "index.ts", "lib/util.ts"]);
        let err = resolve_entry(&root_dir(), "rooms/demo", None, &names).unwrap_err();
        match err {
            BundleError::MissingEntryPoint { root, suggestion } => {
                assert_eq!(root, "rooms/demo");
                assert_eq!(suggestion, "index.ts");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_entry_message_contains_corrected_specifier() {
        let names = names(&["index.ts"]);
        let err = resolve_entry(&root_dir(), "rooms/demo", None, &names).unwrap_err();
        assert!(err.to_string().contains("\"rooms/demo:index.ts\""));
    }

    #[test]
    fn unknown_entry_suggests_closest_name() {
        let names = names(&["config.json", "index.ts", "lib/util.ts"]);
        let err =
            resolve_entry(&root_dir(), "rooms/demo", Some("indx.ts"), &names).unwrap_err();
        match err {
            BundleError::UnknownEntryPoint {
                root,
                entry,
                suggestion,
            } => {
                assert_eq!(root, "rooms/demo");
                assert_eq!(entry, "indx.ts");
                assert_eq!(suggestion, "index.ts");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_module_set_wins_over_entry_errors() {
        let err = resolve_entry(&root_dir(), "rooms/demo", Some("index.ts"), &[]).unwrap_err();
        assert!(matches!(err, BundleError::EmptyModuleSet { path } if path == root_dir()));

        let err = resolve_optional_entry(&root_dir(), "rooms/demo", None, &[]).unwrap_err();
        assert!(matches!(err, BundleError::EmptyModuleSet { .. }));
    }

    #[test]
    fn optional_entry_absent_is_fine() {
        let names = names(&["a.txt"]);
        let main = resolve_optional_entry(&root_dir(), "rooms/demo", None, &names).unwrap();
        assert_eq!(main, None);
    }

    #[test]
    fn optional_entry_present_is_still_validated() {
        let names = names(&["a.txt"]);
        let err = resolve_optional_entry(&root_dir(), "rooms/demo", Some("b.txt"), &names)
            .unwrap_err();
        assert!(matches!(err, BundleError::UnknownEntryPoint { .. }));

        let main = resolve_optional_entry(&root_dir(), "rooms/demo", Some("a.txt"), &names)
            .unwrap()
            .unwrap();
        assert_eq!(main, "a.txt");
    }

    #[test]
    fn colliding_canonical_names_both_match() {
        let names = names(&["shared.js", "shared.ts"]);
        let via_source =
            resolve_entry(&root_dir(), "rooms/demo", Some("shared.ts"), &names).unwrap();
        let via_compiled =
            resolve_entry(&root_dir(), "rooms/demo", Some("shared.js"), &names).unwrap();
        assert_eq!(via_source, "shared.js");
        assert_eq!(via_compiled, "shared.js");
    }
}
