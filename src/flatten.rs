//! Flatten a parsed JSON object into dotted key-value pairs.
//!
//! `{"a": {"b": 1, "c": "x"}}` → `{"a.b": "1", "a.c": "x"}`
//!
//! Leaves are stringified the same way a value would be typed on the command
//! line: strings verbatim, booleans as `true`/`false`, numbers in their
//! decimal form, with whole-valued floats written without a fraction. `null`
//! leaves produce no entry, so the field falls through to its default. Arrays
//! are kept as compact JSON text.

use serde_json::{Map, Number, Value};

use crate::resolve::SourceMap;
use crate::tree::join;

pub fn flatten(object: &Map<String, Value>) -> SourceMap {
    let mut out = SourceMap::new();
    flatten_into(object, "", &mut out);
    out
}

fn flatten_into(object: &Map<String, Value>, prefix: &str, out: &mut SourceMap) {
    for (key, value) in object {
        let dotted = join(prefix, key);
        match value {
            Value::Object(nested) => flatten_into(nested, &dotted, out),
            Value::Null => {}
            leaf => {
                out.insert(dotted, scalar_to_string(leaf));
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        other => other.to_string(),
    }
}

/// Whole-valued floats lose their fractional part (`30.0` → `30`) so they
/// still coerce into integer fields. Beyond 1e21 the exponent form is kept.
fn number_to_string(n: &Number) -> String {
    if let Some(f) = n.as_f64()
        && n.is_f64()
        && f.fract() == 0.0
        && f.abs() < 1e21
    {
        return format!("{f:.0}");
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat(value: Value) -> SourceMap {
        match value {
            Value::Object(map) => flatten(&map),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn nested_object_becomes_dotted_keys() {
        let out = flat(json!({"a": {"b": 1, "c": "x"}}));
        assert_eq!(out.len(), 2);
        assert_eq!(out["a.b"], "1");
        assert_eq!(out["a.c"], "x");
    }

    #[test]
    fn deep_nesting() {
        let out = flat(json!({"a": {"b": {"c": {"d": true}}}}));
        assert_eq!(out["a.b.c.d"], "true");
    }

    #[test]
    fn scalars_stringified() {
        let out = flat(json!({
            "name": "alice",
            "age": 30,
            "negative": -5,
            "ratio": 1.5,
            "enabled": false
        }));
        assert_eq!(out["name"], "alice");
        assert_eq!(out["age"], "30");
        assert_eq!(out["negative"], "-5");
        assert_eq!(out["ratio"], "1.5");
        assert_eq!(out["enabled"], "false");
    }

    #[test]
    fn whole_floats_drop_fraction() {
        let out = flat(serde_json::from_str(r#"{"age": 30.0, "neg": -2.0, "ratio": 0.25}"#).unwrap());
        assert_eq!(out["age"], "30");
        assert_eq!(out["neg"], "-2");
        assert_eq!(out["ratio"], "0.25");

        let huge = flat(json!({"big": 1e22}));
        assert_eq!(huge["big"], Number::from_f64(1e22).unwrap().to_string());
    }

    #[test]
    fn null_produces_no_entry() {
        let out = flat(json!({"gone": null, "kept": ""}));
        assert!(!out.contains_key("gone"));
        assert_eq!(out["kept"], "");
    }

    #[test]
    fn array_kept_as_json_text() {
        let out = flat(json!({"list": [1, "two"]}));
        assert_eq!(out["list"], r#"[1,"two"]"#);
    }

    #[test]
    fn empty_object_contributes_nothing() {
        let out = flat(json!({"section": {}}));
        assert!(out.is_empty());
    }

    #[test]
    fn keys_with_dots_are_joined_verbatim() {
        let out = flat(json!({"nested": {"nestedtwo.bool": "yes"}}));
        assert_eq!(out["nested.nestedtwo.bool"], "yes");
    }
}
