//! Request specifiers and pipeline gating.
//!
//! A bundle request arrives as a compact specifier string, `root[:entryPoint]`,
//! plus the pipeline tag of the host build step that produced it. The tag
//! selects one of three output modes; unrecognized tags mean the request is
//! not ours and must be declined before any filesystem work happens.

use std::fmt;

/// A parsed `root[:entryPoint]` specifier.
///
/// `root` is a directory path relative to the importing file's directory.
/// The split happens on the first `:` only, so an entry point may itself
/// contain colons. `"root:"` yields an empty entry point, which is a real
/// (if never matching) request, not an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSpecifier {
    /// Directory holding the module set, relative to the importer
    pub root: String,
    /// Requested entry point, verbatim
    pub entry: Option<String>,
}

impl BundleSpecifier {
    /// Parses a specifier string. Never fails: any string is a valid root.
    pub fn parse(specifier: &str) -> Self {
        match specifier.split_once(':') {
            Some((root, entry)) => Self {
                root: root.to_string(),
                entry: Some(entry.to_string()),
            },
            None => Self {
                root: specifier.to_string(),
                entry: None,
            },
        }
    }
}

impl fmt::Display for BundleSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "{}:{}", self.root, entry),
            None => write!(f, "{}", self.root),
        }
    }
}

/// Output mode of a bundle request, selected by the host pipeline tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleMode {
    /// Flat module table with `/`-prefixed names, exported as
    /// `integrity` and `modules`.
    Modules,
    /// Fingerprint only, emitted as a bare JSON string.
    Integrity,
    /// Structured bundle with a validated entry point, exported as
    /// `roomIntegrity` and `roomModule`.
    Room,
}

impl BundleMode {
    /// Maps a host pipeline tag to a mode. `None` declines the request.
    pub fn from_pipeline(tag: &str) -> Option<Self> {
        match tag {
            "room-modules" => Some(Self::Modules),
            "room-modules-integrity" => Some(Self::Integrity),
            "room-module" => Some(Self::Room),
            _ => None,
        }
    }

    /// Whether this mode refuses requests without an entry point.
    pub fn requires_entry(self) -> bool {
        matches!(self, Self::Room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root_only() {
        let spec = BundleSpecifier::parse("rooms/demo");
        assert_eq!(spec.root, "rooms/demo");
        assert_eq!(spec.entry, None);
    }

    #[test]
    fn parse_root_and_entry() {
        let spec = BundleSpecifier::parse("rooms/demo:index.ts");
        assert_eq!(spec.root, "rooms/demo");
        assert_eq!(spec.entry.as_deref(), Some("index.ts"));
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        let spec = BundleSpecifier::parse("rooms:a:b");
        assert_eq!(spec.root, "rooms");
        assert_eq!(spec.entry.as_deref(), Some("a:b"));
    }

    #[test]
    fn parse_empty_entry_is_present() {
        let spec = BundleSpecifier::parse("rooms/demo:");
        assert_eq!(spec.entry.as_deref(), Some(""));
    }

    #[test]
    fn display_round_trips() {
        for raw in ["rooms/demo", "rooms/demo:index.ts", "rooms:a:b", "rooms:"] {
            assert_eq!(BundleSpecifier::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn pipeline_tags_map_to_modes() {
        assert_eq!(
            BundleMode::from_pipeline("room-modules"),
            Some(BundleMode::Modules)
        );
        assert_eq!(
            BundleMode::from_pipeline("room-modules-integrity"),
            Some(BundleMode::Integrity)
        );
        assert_eq!(
            BundleMode::from_pipeline("room-module"),
            Some(BundleMode::Room)
        );
    }

    #[test]
    fn foreign_pipeline_tags_decline() {
        assert_eq!(BundleMode::from_pipeline("css"), None);
        assert_eq!(BundleMode::from_pipeline(""), None);
        assert_eq!(BundleMode::from_pipeline("room-modules2"), None);
    }

    #[test]
    fn only_room_mode_requires_entry() {
        assert!(BundleMode::Room.requires_entry());
        assert!(!BundleMode::Modules.requires_entry());
        assert!(!BundleMode::Integrity.requires_entry());
    }
}
