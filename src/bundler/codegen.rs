//! Rendering bundle values as JavaScript source.
//!
//! The output is a single expression a loader can evaluate: byte buffers
//! become `Uint8Array.of(...)` calls so they reconstruct without decoding,
//! and scalars use their JSON literal form. Compact, not pretty-printed,
//! and injective on the value tree.

use crate::bundler::record::BundleValue;

/// Serializes a bundle value as a JavaScript expression.
pub fn to_source_code(value: &BundleValue) -> String {
    match value {
        BundleValue::Null => "null".to_string(),
        BundleValue::Bool(flag) => flag.to_string(),
        BundleValue::Num(num) => number_literal(*num),
        BundleValue::Str(text) => string_literal(text),
        BundleValue::Bytes(bytes) => {
            let mut out = String::from("Uint8Array.of(");
            for (index, byte) in bytes.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&byte.to_string());
            }
            out.push(')');
            out
        }
        BundleValue::Seq(items) => {
            let body: Vec<String> = items.iter().map(to_source_code).collect();
            format!("[{}]", body.join(","))
        }
        BundleValue::Map(entries) => {
            let body: Vec<String> = entries
                .iter()
                .map(|(key, item)| format!("{}:{}", key_literal(key), to_source_code(item)))
                .collect();
            format!("{{{}}}", body.join(","))
        }
    }
}

/// JSON string literal, also valid as a JavaScript string.
pub fn string_literal(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Object keys stay bare only when every character is ASCII lowercase;
/// anything else is emitted as a computed `["..."]` key. Dots, digits and
/// uppercase would all change meaning or break parsing if left bare.
fn key_literal(key: &str) -> String {
    if key.chars().all(|c| c.is_ascii_lowercase()) {
        key.to_string()
    } else {
        format!("[{}]", string_literal(key))
    }
}

/// JSON number literal. Non-finite values have no JSON form and render as
/// `null`, matching how JSON serialization treats them.
fn number_literal(num: f64) -> String {
    match serde_json::Number::from_f64(num) {
        Some(number) => number.to_string(),
        None => "null".to_string(),
    }
}
