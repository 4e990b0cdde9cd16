//! Module-name canonicalization.

/// Rewrites a module name to its compiled-output spelling.
///
/// Trailing `.ts` becomes `.js`, `.tsx` becomes `.jsx`, and `.mts` becomes
/// `.mjs`; every other name passes through unchanged. This exists so an
/// entry point can be requested by source spelling (`index.ts`) and still
/// match the name the transpiled module answers to (`index.js`). Stored
/// table keys are never canonicalized.
pub fn canonicalize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix(".ts") {
        format!("{stem}.js")
    } else if let Some(stem) = name.strip_suffix(".tsx") {
        format!("{stem}.jsx")
    } else if let Some(stem) = name.strip_suffix(".mts") {
        format!("{stem}.mjs")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_typescript_suffixes() {
        assert_eq!(canonicalize("index.ts"), "index.js");
        assert_eq!(canonicalize("app.tsx"), "app.jsx");
        assert_eq!(canonicalize("worker.mts"), "worker.mjs");
    }

    #[test]
    fn keeps_other_names_unchanged() {
        assert_eq!(canonicalize("index.js"), "index.js");
        assert_eq!(canonicalize("config.json"), "config.json");
        assert_eq!(canonicalize("notes.txt"), "notes.txt");
        assert_eq!(canonicalize("logo"), "logo");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn applies_to_nested_names() {
        assert_eq!(canonicalize("lib/util.ts"), "lib/util.js");
        assert_eq!(canonicalize("ui/panel.tsx"), "ui/panel.jsx");
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(canonicalize("INDEX.TS"), "INDEX.TS");
        assert_eq!(canonicalize("Index.Ts"), "Index.Ts");
    }

    #[test]
    fn canonical_names_are_fixed_points() {
        for name in [
            "index.ts",
            "app.tsx",
            "worker.mts",
            "index.js",
            "data.json",
            "readme.md",
            "lib/deep/mod.ts",
        ] {
            let once = canonicalize(name);
            assert_eq!(canonicalize(&once), once);
        }
    }
}
