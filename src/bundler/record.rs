//! Module records and the bundle value tree.
//!
//! Records are the fully materialized form of each bundled file. Both the
//! fingerprint and the generated source are computed from one shared
//! [`BundleValue`] projection of the table, so the two can never drift
//! apart. Maps use [`BTreeMap`] throughout: sorted keys are what make the
//! fingerprint independent of directory enumeration order.

use std::collections::BTreeMap;

/// One bundled file in its typed form.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleRecord {
    /// Validated JSON, re-serialized to the canonical compact form
    Json {
        /// Compact JSON text with sorted object keys
        source: String,
    },
    /// JavaScript text, original or transpiled
    Js {
        /// JavaScript source text
        source: String,
        /// Evaluate eagerly at load time (entry point only)
        evaluate: bool,
        /// Hook exposure pattern (entry point only, always `"*"`)
        hooks: Option<String>,
    },
    /// Decoded text for `text/*` files
    Text {
        /// UTF-8 text, lossily decoded
        source: String,
    },
    /// Raw bytes for everything else
    Bin {
        /// Verbatim file content
        source: Vec<u8>,
    },
}

impl ModuleRecord {
    /// Builds a JavaScript record, marking it as the entry point when asked.
    ///
    /// Entry flags never appear on non-entry records: absent and `false`
    /// would otherwise fingerprint differently for the same logical bundle.
    pub fn js(source: String, is_entry: bool) -> Self {
        Self::Js {
            source,
            evaluate: is_entry,
            hooks: is_entry.then(|| "*".to_string()),
        }
    }

    /// The record's type tag as stored in the bundle.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Json { .. } => "json",
            Self::Js { .. } => "js",
            Self::Text { .. } => "text",
            Self::Bin { .. } => "bin",
        }
    }

    /// Projects the record into the shared value tree.
    pub fn to_value(&self) -> BundleValue {
        let mut map = BTreeMap::new();
        map.insert(
            "type".to_string(),
            BundleValue::Str(self.type_tag().to_string()),
        );
        match self {
            Self::Json { source } | Self::Text { source } => {
                map.insert("source".to_string(), BundleValue::Str(source.clone()));
            }
            Self::Js {
                source,
                evaluate,
                hooks,
            } => {
                map.insert("source".to_string(), BundleValue::Str(source.clone()));
                if *evaluate {
                    map.insert("evaluate".to_string(), BundleValue::Bool(true));
                }
                if let Some(hooks) = hooks {
                    map.insert("hooks".to_string(), BundleValue::Str(hooks.clone()));
                }
            }
            Self::Bin { source } => {
                map.insert("source".to_string(), BundleValue::Bytes(source.clone()));
            }
        }
        BundleValue::Map(map)
    }
}

/// A structured bundle: the resolved entry point plus every module.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomModule {
    /// Canonical name of the entry point
    pub main: String,
    /// Module records keyed by bare module name
    pub source: BTreeMap<String, ModuleRecord>,
}

/// The two table shapes a bundle can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleTable {
    /// Records keyed by `/`-prefixed module name
    Flat(BTreeMap<String, ModuleRecord>),
    /// Entry point plus records keyed by bare module name
    Room(RoomModule),
}

impl ModuleTable {
    /// Projects the whole table into the shared value tree.
    pub fn to_value(&self) -> BundleValue {
        match self {
            Self::Flat(records) => records_value(records),
            Self::Room(room) => {
                let mut map = BTreeMap::new();
                map.insert("main".to_string(), BundleValue::Str(room.main.clone()));
                map.insert("source".to_string(), records_value(&room.source));
                BundleValue::Map(map)
            }
        }
    }
}

fn records_value(records: &BTreeMap<String, ModuleRecord>) -> BundleValue {
    BundleValue::Map(
        records
            .iter()
            .map(|(name, record)| (name.clone(), record.to_value()))
            .collect(),
    )
}

/// Tagged value tree shared by the fingerprint and the source serializer.
///
/// Distinguishes text from bytes so `"1"`, `1` and a one-byte buffer can
/// never collide in either output.
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    Bytes(Vec<u8>),
    Seq(Vec<BundleValue>),
    Map(BTreeMap<String, BundleValue>),
}
