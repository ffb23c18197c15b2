//! Overlaying one variant payload onto another.

use serde_json::{Map, Value};

/// Copy every entry of `source` onto `target`, trimming string values.
///
/// String handling realises the variation precedence rule: a non-empty
/// string is stored whitespace-trimmed, while an empty string never
/// overwrites whatever `target` already holds for that key. Any other value
/// (numbers, booleans, `null`, arrays, objects) is copied verbatim, so
/// falsy values such as `0` and `false` do override.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Map, json};
/// use varied_definition::extend;
///
/// let mut target = Map::new();
/// target.insert("label".into(), json!("Contact"));
/// target.insert("required".into(), json!(true));
///
/// let mut overlay = Map::new();
/// overlay.insert("label".into(), json!(""));
/// overlay.insert("required".into(), json!(false));
/// overlay.insert("hint".into(), json!("  call us  "));
///
/// extend(&mut target, &overlay);
/// assert_eq!(target.get("label"), Some(&json!("Contact")));
/// assert_eq!(target.get("required"), Some(&json!(false)));
/// assert_eq!(target.get("hint"), Some(&json!("call us")));
/// ```
pub fn extend(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    extend_except(target, source, &[]);
}

/// Like [`extend`], but entries whose key appears in `skip` are left out.
///
/// Flattening uses this after consuming a variation's component-name
/// ordering, which must not be merged again as a raw name list.
pub fn extend_except(target: &mut Map<String, Value>, source: &Map<String, Value>, skip: &[&str]) {
    for (key, value) in source {
        if skip.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::String(text) => {
                // The emptiness test is on the raw string: a whitespace-only
                // override still wins, collapsing to "" once trimmed.
                if !text.is_empty() {
                    target.insert(key.clone(), Value::String(text.trim().to_owned()));
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
