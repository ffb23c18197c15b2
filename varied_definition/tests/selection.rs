//! Selection properties: variation name lists filtering and reordering
//! flattened component lists.

use anyhow::Result;
use rstest::rstest;
use serde_json::{Value, json};
use varied_definition::{FlattenOptions, flatten};

fn element_options() -> FlattenOptions {
    FlattenOptions::new()
        .with_nesting(["_elements"])
        .with_selection(["_elements"])
}

#[rstest]
fn unlisted_components_are_dropped() -> Result<()> {
    let definition = json!({
        "default": {
            "name": "form",
            "_elements": [
                { "default": { "name": "a" } },
                { "default": { "name": "b" } },
                { "default": { "name": "c" } },
            ],
        },
        "list": { "_elements": ["c", "a"] },
    });
    let flat = flatten(&definition, Some("list"), &element_options())?;
    assert_eq!(
        flat.get("_elements"),
        Some(&json!([{ "name": "c" }, { "name": "a" }]))
    );
    Ok(())
}

#[rstest]
fn name_list_is_consumed_even_without_a_target_list() -> Result<()> {
    // The ordering must never be merged raw, even when the default payload
    // produced nothing to reorder.
    let definition = json!({
        "default": { "name": "form" },
        "add": { "_elements": ["a"], "label": "Add" },
    });
    let flat = flatten(&definition, Some("add"), &element_options())?;
    assert_eq!(Value::Object(flat), json!({ "name": "form", "label": "Add" }));
    Ok(())
}

#[rstest]
fn orderings_require_a_selection_property() -> Result<()> {
    // Without `selection`, the variation's array merges like any value.
    let definition = json!({
        "default": {
            "name": "form",
            "_elements": [{ "default": { "name": "a" } }],
        },
        "add": { "_elements": ["a"] },
    });
    let options = FlattenOptions::new().with_nesting(["_elements"]);
    let flat = flatten(&definition, Some("add"), &options)?;
    assert_eq!(flat.get("_elements"), Some(&json!(["a"])));
    Ok(())
}

#[rstest]
fn non_string_ordering_entries_never_match() -> Result<()> {
    let definition = json!({
        "default": {
            "name": "form",
            "_elements": [
                { "default": { "name": "a" } },
                { "default": { "name": "b" } },
            ],
        },
        "add": { "_elements": [{ "name": "a" }, "b"] },
    });
    let flat = flatten(&definition, Some("add"), &element_options())?;
    assert_eq!(flat.get("_elements"), Some(&json!([{ "name": "b" }])));
    Ok(())
}

#[rstest]
fn unnamed_components_are_dropped_by_reordering() -> Result<()> {
    let definition = json!({
        "default": {
            "name": "form",
            "_elements": [
                { "default": { "name": "a" } },
                { "default": { "label": "anonymous" } },
            ],
        },
        "add": { "_elements": ["a"] },
    });
    let flat = flatten(&definition, Some("add"), &element_options())?;
    assert_eq!(flat.get("_elements"), Some(&json!([{ "name": "a" }])));
    Ok(())
}
