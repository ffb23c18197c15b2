//! Filtering and reordering component objects by name.

use serde_json::Value;

/// Return the objects whose `name` appears in `names`, ordered to match.
///
/// The result is keyed by the position of the first occurrence of each
/// object's `name` within `names`; the sort is stable, so objects sharing a
/// name keep their source order. Entries that are not objects, lack a
/// string `name`, or carry a name absent from `names` are dropped. The
/// input slice is left untouched.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use varied_definition::sort_and_filter_by_name;
///
/// let components = [
///     json!({"name": "email"}),
///     json!({"name": "phone"}),
///     json!({"name": "fax"}),
/// ];
/// let picked = sort_and_filter_by_name(&components, &["phone", "email"]);
/// assert_eq!(picked, [json!({"name": "phone"}), json!({"name": "email"})]);
/// ```
#[must_use]
pub fn sort_and_filter_by_name<N>(objects: &[Value], names: &[N]) -> Vec<Value>
where
    N: AsRef<str>,
{
    let position = |object: &Value| -> Option<usize> {
        let name = object.as_object()?.get("name")?.as_str()?;
        names.iter().position(|candidate| candidate.as_ref() == name)
    };

    let mut kept: Vec<(usize, &Value)> = objects
        .iter()
        .filter_map(|object| position(object).map(|index| (index, object)))
        .collect();
    kept.sort_by_key(|&(index, _)| index);
    kept.into_iter().map(|(_, object)| object.clone()).collect()
}
