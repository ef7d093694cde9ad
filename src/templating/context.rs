//! Render context construction.
//!
//! Page and badge templates see their data under a single `data` binding.
//! The menu template sees the fields of its data at the top level, plus the
//! injected `menu` marker.

use serde_json::{Map, Value};
use tera::Context as TeraContext;

use crate::constants::{DATA_BINDING, MENU_FIELD, MENU_NORMAL};

/// JSON object used as template data.
pub type ContextMap = Map<String, Value>;

/// Copies every field of `page` onto `main`, `page` winning on collisions.
///
/// The copy is shallow: nested objects in `page` replace their counterpart in
/// `main` wholesale. `main` is modified in place and stays modified after the
/// call; callers building a sequence of pages rely on that accumulation.
pub fn merge_into(main: &mut ContextMap, page: &ContextMap) {
    for (key, value) in page {
        main.insert(key.clone(), value.clone());
    }
}

/// Non-mutating form of [`merge_into`].
pub fn merge_contexts(main: &ContextMap, page: &ContextMap) -> ContextMap {
    let mut merged = main.clone();
    merge_into(&mut merged, page);
    merged
}

/// Wraps `data` in the `data` binding used by page and badge templates.
pub fn data_context(data: &ContextMap) -> TeraContext {
    let mut context = TeraContext::new();
    context.insert(DATA_BINDING, data);
    context
}

/// Shallow copy of `data` with `menu = "normal"`, exposed at the top level.
pub fn menu_context(data: &ContextMap) -> TeraContext {
    let mut fields = data.clone();
    fields.insert(MENU_FIELD.to_string(), Value::String(MENU_NORMAL.to_string()));

    let mut context = TeraContext::new();
    for (key, value) in &fields {
        context.insert(key.as_str(), value);
    }
    context
}
