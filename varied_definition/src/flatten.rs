//! Flattening of varied definitions down to a single variation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{DefinitionError, DefinitionResult};
use crate::merge::{extend, extend_except};
use crate::select::sort_and_filter_by_name;

/// Property names conventionally holding component lists in form
/// definitions.
pub const FORM_NESTING: [&str; 6] = [
    "_elements",
    "_sections",
    "_pages",
    "_behaviours",
    "_checks",
    "_actions",
];

/// Options naming the nested-component properties of a definition.
///
/// `nesting` lists the `default` properties holding arrays of components to
/// flatten recursively. `selection` lists the subset whose variation
/// payload may instead carry a plain ordering of component names, used to
/// filter and reorder the flattened list.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FlattenOptions {
    /// Properties whose `default` value is an array of nested components.
    #[serde(default)]
    pub nesting: Vec<String>,
    /// Nesting properties a variation may reorder via a name list.
    #[serde(default)]
    pub selection: Vec<String>,
}

impl FlattenOptions {
    /// Create options with no nesting or selection properties.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nesting: Vec::new(),
            selection: Vec::new(),
        }
    }

    /// Options for the conventional form-definition component lists.
    ///
    /// Nests every property in [`FORM_NESTING`] and lets variations
    /// reorder `_elements`.
    #[must_use]
    pub fn form() -> Self {
        Self::new()
            .with_nesting(FORM_NESTING)
            .with_selection(["_elements"])
    }

    /// Replace the nesting property names.
    #[must_use]
    pub fn with_nesting<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nesting = props.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the selection property names.
    #[must_use]
    pub fn with_selection<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = props.into_iter().map(Into::into).collect();
        self
    }
}

/// Check the structural requirements on a raw definition.
///
/// Returns the definition's object form so callers can keep working with
/// it. The checks are exactly those [`flatten`] performs up front: the
/// value is an object, it carries an object payload under `default`, and
/// that payload holds a non-empty `name` string.
///
/// # Errors
///
/// Returns the [`DefinitionError`] for the first violated requirement.
pub fn validate(definition: &Value) -> DefinitionResult<&Map<String, Value>> {
    let def = definition.as_object().ok_or(DefinitionError::NotAnObject)?;
    let default = def
        .get("default")
        .and_then(Value::as_object)
        .ok_or(DefinitionError::MissingDefault)?;
    let named = default
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());
    if !named {
        return Err(DefinitionError::MissingName);
    }
    Ok(def)
}

/// Flatten `definition` down to the view for `variation`.
///
/// The result starts as a copy of the `default` payload with strings
/// trimmed, and the component lists named by `options.nesting` flatten
/// recursively. When the definition carries a payload for the variation,
/// it is overlaid on top with the precedence rules of [`extend`]. A
/// selection property whose variation value is an array is consumed as a
/// component-name ordering for [`sort_and_filter_by_name`] rather than
/// merged.
///
/// Passing `None`, or the name of a variation the definition has no object
/// payload for, yields the default-only view. Inputs are never mutated;
/// the result is freshly allocated.
///
/// # Errors
///
/// Returns a [`DefinitionError`] when `definition` fails [`validate`].
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use varied_definition::{FlattenOptions, flatten};
///
/// let definition = json!({
///     "default": { "name": " contact ", "heading": "Contact" },
///     "edit": { "heading": "Edit contact" },
/// });
///
/// let flat = flatten(&definition, Some("edit"), &FlattenOptions::new())?;
/// assert_eq!(flat.get("name"), Some(&json!("contact")));
/// assert_eq!(flat.get("heading"), Some(&json!("Edit contact")));
/// # Ok::<_, varied_definition::DefinitionError>(())
/// ```
pub fn flatten(
    definition: &Value,
    variation: Option<&str>,
    options: &FlattenOptions,
) -> DefinitionResult<Map<String, Value>> {
    let def = validate(definition)?;
    trace!(
        ?variation,
        nesting = options.nesting.len(),
        "flattening definition"
    );
    Ok(flatten_level(def, variation, options))
}

/// Flatten a single definition level: defaults, nested components, then
/// the variation overlay. Components re-enter here without the structural
/// checks, so a missing or malformed `default` contributes nothing.
fn flatten_level(
    def: &Map<String, Value>,
    variation: Option<&str>,
    options: &FlattenOptions,
) -> Map<String, Value> {
    let empty = Map::new();
    let default = def
        .get("default")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let mut result = Map::new();
    extend(&mut result, default);

    for prop in &options.nesting {
        if let Some(Value::Array(components)) = default.get(prop) {
            let flattened = components
                .iter()
                .map(|component| flatten_component(component, variation, options))
                .collect();
            result.insert(prop.clone(), Value::Array(flattened));
        }
    }

    let Some(requested) = variation else {
        return result;
    };
    let Some(overlay) = def.get(requested).and_then(Value::as_object) else {
        return result;
    };

    let mut consumed: Vec<&str> = Vec::new();
    for prop in &options.selection {
        if let Some(Value::Array(ordering)) = overlay.get(prop) {
            // Consumed even when there is nothing to reorder: a name list
            // must never reach the merge below.
            consumed.push(prop.as_str());
            let names: Vec<&str> = ordering.iter().filter_map(Value::as_str).collect();
            if let Some(Value::Array(current)) = result.get(prop) {
                let reordered = sort_and_filter_by_name(current, &names);
                result.insert(prop.clone(), Value::Array(reordered));
            }
        }
    }
    extend_except(&mut result, overlay, &consumed);

    result
}

fn flatten_component(
    component: &Value,
    variation: Option<&str>,
    options: &FlattenOptions,
) -> Value {
    let flattened = component
        .as_object()
        .map(|def| flatten_level(def, variation, options))
        .unwrap_or_default();
    Value::Object(flattened)
}
