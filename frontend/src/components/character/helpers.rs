//! Utilities for the character page: user-facing messages and the inline
//! editing of scalar leaves inside the opaque character document.
//!
//! The document is addressed with a [`FieldPath`], a list of object keys and
//! array indices from the root to a leaf. Only leaves (strings, numbers,
//! booleans) are editable; the shape of the document never changes on the
//! client.

use serde_json::{Number, Value};

pub const LOAD_FALLBACK: &str = "Something went wrong loading character";
pub const GENERATE_FALLBACK: &str = "Something went wrong generating character";
pub const SAVE_FALLBACK: &str = "Something went wrong saving character";
pub const MISSING_ID: &str = "Missing or invalid character ID";
pub const INVALID_ID: &str = "Invalid ID";
pub const NOT_LOADED_YET: &str = "Please wait until the character has loaded to save it";

/// Delay before the load dialog closes itself after a successful load.
pub const LOAD_DIALOG_AUTO_CLOSE_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

pub type FieldPath = Vec<PathSegment>;

/// New value for a leaf, as produced by the corresponding input element.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Raw text of a number input; parsed against the old value's kind.
    Number(String),
    Flag(bool),
}

fn leaf_mut<'a>(doc: &'a mut Value, path: &[PathSegment]) -> Option<&'a mut Value> {
    path.iter().try_fold(doc, |node, segment| match segment {
        PathSegment::Key(key) => node.as_object_mut()?.get_mut(key),
        PathSegment::Index(index) => node.as_array_mut()?.get_mut(*index),
    })
}

/// Replaces the leaf at `path` with `value`.
///
/// Returns `false`, leaving the document untouched, when the path does not
/// exist, does not end on a leaf of the same kind, or a number fails to parse.
/// Integers stay integers: `"12.5"` is rejected for a field holding `12`.
pub fn apply_edit(doc: &mut Value, path: &[PathSegment], value: FieldValue) -> bool {
    let Some(leaf) = leaf_mut(doc, path) else {
        return false;
    };

    match (leaf, value) {
        (Value::String(old), FieldValue::Text(new)) => {
            *old = new;
            true
        }
        (Value::Bool(old), FieldValue::Flag(new)) => {
            *old = new;
            true
        }
        (leaf, FieldValue::Number(raw)) if leaf.is_number() => match parse_number(leaf, raw.trim()) {
            Some(number) => {
                *leaf = Value::Number(number);
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn parse_number(old: &Value, raw: &str) -> Option<Number> {
    if old.is_i64() || old.is_u64() {
        raw.parse::<i64>().ok().map(Number::from)
    } else {
        raw.parse::<f64>().ok().and_then(Number::from_f64)
    }
}

/// Turns API keys such as `Hit_Points` or `Adapted_To` into labels.
pub fn label_for(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(k: &str) -> PathSegment {
        PathSegment::Key(k.to_string())
    }

    fn sheet() -> Value {
        json!({
            "Class": "Federal Agent",
            "Veteran": false,
            "Stats": { "Strength": 12, "Power": 11 },
            "Bonds": [ { "Name": "Spouse", "Strength": 14 } ],
            "Multiplier": 1.5
        })
    }

    #[test]
    fn edits_a_top_level_string() {
        let mut doc = sheet();
        assert!(apply_edit(
            &mut doc,
            &[key("Class")],
            FieldValue::Text("Physician".to_string())
        ));
        assert_eq!(doc["Class"], "Physician");
    }

    #[test]
    fn edits_a_nested_integer() {
        let mut doc = sheet();
        assert!(apply_edit(
            &mut doc,
            &[key("Stats"), key("Strength")],
            FieldValue::Number(" 15 ".to_string())
        ));
        assert_eq!(doc["Stats"]["Strength"], 15);
    }

    #[test]
    fn edits_through_arrays() {
        let mut doc = sheet();
        let path = [key("Bonds"), PathSegment::Index(0), key("Name")];
        assert!(apply_edit(&mut doc, &path, FieldValue::Text("Sibling".to_string())));
        assert_eq!(doc["Bonds"][0]["Name"], "Sibling");
    }

    #[test]
    fn bad_numbers_keep_the_old_value() {
        let mut doc = sheet();
        let path = [key("Stats"), key("Power")];
        assert!(!apply_edit(&mut doc, &path, FieldValue::Number("lots".to_string())));
        assert!(!apply_edit(&mut doc, &path, FieldValue::Number("12.5".to_string())));
        assert_eq!(doc["Stats"]["Power"], 11);
    }

    #[test]
    fn floats_accept_fractions() {
        let mut doc = sheet();
        assert!(apply_edit(
            &mut doc,
            &[key("Multiplier")],
            FieldValue::Number("2.25".to_string())
        ));
        assert_eq!(doc["Multiplier"], 2.25);
    }

    #[test]
    fn toggles_flags() {
        let mut doc = sheet();
        assert!(apply_edit(&mut doc, &[key("Veteran")], FieldValue::Flag(true)));
        assert_eq!(doc["Veteran"], true);
    }

    #[test]
    fn rejects_missing_paths_and_kind_changes() {
        let mut doc = sheet();
        let before = doc.clone();
        assert!(!apply_edit(&mut doc, &[key("Nope")], FieldValue::Text("x".to_string())));
        assert!(!apply_edit(
            &mut doc,
            &[key("Bonds"), PathSegment::Index(3)],
            FieldValue::Text("x".to_string())
        ));
        assert!(!apply_edit(&mut doc, &[key("Stats")], FieldValue::Text("x".to_string())));
        assert!(!apply_edit(&mut doc, &[key("Class")], FieldValue::Flag(true)));
        assert_eq!(doc, before);
    }

    #[test]
    fn labels_replace_underscores() {
        assert_eq!(label_for("Hit_Points"), "Hit Points");
        assert_eq!(label_for("Class"), "Class");
    }
}
