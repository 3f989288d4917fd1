//! JSON rendering
//!
//! Output is indented with tabs and keeps the key order of the input.

use platutils_core::{raise_error, ErrorCode, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fmt::Debug;

/// Serialize a value to tab-indented JSON
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));

    value.serialize(&mut serializer).map_err(|err| {
        raise_error("", ErrorCode::INVALID_INPUT, "failed to serialize to json", err)
    })?;

    String::from_utf8(buffer).map_err(|err| {
        raise_error("", ErrorCode::INVALID_INPUT, "serialized json is not utf-8", err)
    })
}

/// Reformat JSON text with tab indentation
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error if the text is not valid JSON.
pub fn pretty_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| raise_error("", ErrorCode::INVALID_INPUT, "failed to parse json", err))?;
    to_json(&value)
}

/// Debug dump of a value followed by its JSON rendering
pub fn json_text<T: Serialize + Debug + ?Sized>(value: &T) -> String {
    let mut text = format!("json for {:?}...\n", value);
    match to_json(value) {
        Ok(json) => {
            text.push_str(&json);
            text.push('\n');
        }
        Err(err) => {
            text.push_str(&format!("json marshal error: {}\n", err.message()));
        }
    }
    text
}

/// Compare two values by their JSON rendering
///
/// Values that cannot be serialized never compare equal.
pub fn compare_as_json<A, B>(one: &A, two: &B) -> bool
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    match (to_json(one), to_json(two)) {
        (Ok(one), Ok(two)) => one == two,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_to_json_uses_tabs() {
        assert_eq!(to_json(&["one", "two"]).unwrap(), "[\n\t\"one\",\n\t\"two\"\n]");
        assert_eq!(to_json("one").unwrap(), "\"one\"");
        assert_eq!(to_json("").unwrap(), "\"\"");
        assert_eq!(to_json(&None::<u8>).unwrap(), "null");

        let map = BTreeMap::from([("1", "one"), ("2", "two")]);
        assert_eq!(
            to_json(&map).unwrap(),
            "{\n\t\"1\": \"one\",\n\t\"2\": \"two\"\n}"
        );
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        assert_eq!(
            pretty_json("{\"b\":1,\"a\":{\"key\":\"data\"}}").unwrap(),
            "{\n\t\"b\": 1,\n\t\"a\": {\n\t\t\"key\": \"data\"\n\t}\n}"
        );
    }

    #[test]
    fn test_pretty_json_rejects_empty_input() {
        let err = pretty_json("").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
        assert!(err.message().starts_with("failed to parse json, EOF while parsing"));
    }

    #[test]
    fn test_json_text() {
        assert_eq!(json_text(&vec![1, 2]), "json for [1, 2]...\n[\n\t1,\n\t2\n]\n");
    }

    #[test]
    fn test_json_text_reports_serialization_failure() {
        // Maps with non-string keys cannot be rendered as JSON objects
        let map = BTreeMap::from([((1, 2), "pair")]);
        let text = json_text(&map);
        assert!(text.starts_with("json for {(1, 2): \"pair\"}...\njson marshal error: "));
    }
}
