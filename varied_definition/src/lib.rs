//! Flatten varied definitions into single-variation views.
//!
//! A varied definition is a JSON object holding a `default` variant plus
//! zero or more named override variants (`add`, `edit`, `list`, …).
//! [`flatten`] collapses one such tree into the flat configuration object
//! for a single requested variation: the `default` payload forms the
//! baseline and the variation's payload is overlaid on top, with nested
//! component lists flattened recursively. Non-empty override strings are
//! trimmed and win over the baseline; empty override strings lose; any
//! other override value wins, falsy or not. A variation may also filter
//! and reorder a nested component list by supplying the component names in
//! the desired order.
//!
//! Inputs are borrowed and never mutated; each call allocates its result
//! from scratch, so concurrent callers need no coordination.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use varied_definition::{FlattenOptions, flatten};
//!
//! let definition = json!({
//!     "default": {
//!         "name": "contact",
//!         "label": "Contact",
//!         "_elements": [
//!             { "default": { "name": "email" } },
//!             { "default": { "name": "phone" }, "edit": { "label": "Phone" } },
//!         ],
//!     },
//!     "edit": {
//!         "label": "Edit contact",
//!         "_elements": ["phone"],
//!     },
//! });
//!
//! let options = FlattenOptions::new()
//!     .with_nesting(["_elements"])
//!     .with_selection(["_elements"]);
//! let flat = flatten(&definition, Some("edit"), &options)?;
//!
//! assert_eq!(flat.get("label"), Some(&json!("Edit contact")));
//! assert_eq!(
//!     flat.get("_elements"),
//!     Some(&json!([{ "name": "phone", "label": "Phone" }]))
//! );
//! # Ok::<_, varied_definition::DefinitionError>(())
//! ```

mod error;
mod flatten;
mod merge;
mod select;

pub use error::{DefinitionError, DefinitionResult};
pub use flatten::{FORM_NESTING, FlattenOptions, flatten, validate};
pub use merge::{extend, extend_except};
pub use select::sort_and_filter_by_name;
