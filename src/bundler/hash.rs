//! Content fingerprinting.
//!
//! One SHA-256 digest over a canonical encoding of the bundle value tree.
//! Canonical means: map keys in sorted order (the tree's maps are already
//! sorted), every node type-tagged, and every variable-length payload
//! length-prefixed. The digest therefore depends only on logical content,
//! never on discovery order, and two trees that differ anywhere produce
//! different byte streams.

use sha2::{Digest, Sha256};

use crate::bundler::record::BundleValue;

// One tag byte per node type keeps differently-typed leaves apart,
// e.g. the string "1" versus the number 1.
const TAG_NULL: u8 = b'z';
const TAG_BOOL: u8 = b'b';
const TAG_NUM: u8 = b'n';
const TAG_STR: u8 = b's';
const TAG_BYTES: u8 = b'y';
const TAG_SEQ: u8 = b'a';
const TAG_MAP: u8 = b'm';

/// Computes the integrity fingerprint of a bundle value.
///
/// Returns the digest as lowercase hex, 64 characters.
pub fn fingerprint(value: &BundleValue) -> String {
    let mut hasher = Sha256::new();
    update(&mut hasher, value);
    hex::encode(hasher.finalize())
}

fn update(hasher: &mut Sha256, value: &BundleValue) {
    match value {
        BundleValue::Null => hasher.update([TAG_NULL]),
        BundleValue::Bool(flag) => hasher.update([TAG_BOOL, u8::from(*flag)]),
        BundleValue::Num(num) => {
            hasher.update([TAG_NUM]);
            hasher.update(num.to_le_bytes());
        }
        BundleValue::Str(text) => {
            hasher.update([TAG_STR]);
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
        BundleValue::Bytes(bytes) => {
            hasher.update([TAG_BYTES]);
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        }
        BundleValue::Seq(items) => {
            hasher.update([TAG_SEQ]);
            hasher.update((items.len() as u64).to_le_bytes());
            for item in items {
                update(hasher, item);
            }
        }
        BundleValue::Map(entries) => {
            hasher.update([TAG_MAP]);
            hasher.update((entries.len() as u64).to_le_bytes());
            for (key, item) in entries {
                hasher.update((key.len() as u64).to_le_bytes());
                hasher.update(key.as_bytes());
                update(hasher, item);
            }
        }
    }
}
