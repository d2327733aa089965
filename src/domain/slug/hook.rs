// src/domain/slug/hook.rs
use serde_json::{Map, Value};

use super::format::format_slug;

/// Name of the slug field inside a record's data map.
pub const SLUG_FIELD: &str = "slug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOperation {
    Create,
    Update,
}

/// Everything the slug hook gets to see during a save.
#[derive(Debug, Clone, Copy)]
pub struct SlugHookArgs<'a> {
    /// Value submitted for the slug field on this save, if any.
    pub value: Option<&'a Value>,
    pub operation: FieldOperation,
    /// The record's field values, including the currently stored slug.
    pub data: &'a Map<String, Value>,
}

/// Slug field configuration for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugField {
    fallback: String,
}

impl SlugField {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Decides the value stored in the slug field.
    ///
    /// An explicit non-empty string always wins. Otherwise a create, or a
    /// record without a slug, derives one from the fallback field. In every
    /// other case the submitted value is handed back untouched.
    pub fn apply(&self, args: SlugHookArgs<'_>) -> Option<Value> {
        if let Some(explicit) = args.value.and_then(non_empty_str) {
            return Some(Value::String(format_slug(explicit)));
        }

        let has_slug = args.data.get(SLUG_FIELD).is_some_and(is_truthy);
        if args.operation == FieldOperation::Create || !has_slug {
            if let Some(source) = args.data.get(&self.fallback).and_then(non_empty_str) {
                return Some(Value::String(format_slug(source)));
            }
        }

        args.value.cloned()
    }
}

impl Default for SlugField {
    fn default() -> Self {
        Self::new("title")
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn create_derives_from_title() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Про нас" }));
        let out = field.apply(SlugHookArgs {
            value: None,
            operation: FieldOperation::Create,
            data: &data,
        });
        assert_eq!(out, Some(json!("pro-nas")));
    }

    #[test]
    fn create_with_empty_explicit_value_falls_back() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Про нас", "slug": "" }));
        let empty = json!("");
        let out = field.apply(SlugHookArgs {
            value: Some(&empty),
            operation: FieldOperation::Create,
            data: &data,
        });
        assert_eq!(out, Some(json!("pro-nas")));
    }

    #[test]
    fn update_keeps_existing_slug() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Зовсім нова назва", "slug": "pro-nas" }));
        let out = field.apply(SlugHookArgs {
            value: None,
            operation: FieldOperation::Update,
            data: &data,
        });
        assert_eq!(out, None);
    }

    #[test]
    fn update_without_stored_slug_derives_one() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Новини", "slug": null }));
        let out = field.apply(SlugHookArgs {
            value: None,
            operation: FieldOperation::Update,
            data: &data,
        });
        assert_eq!(out, Some(json!("novyny")));
    }

    #[test]
    fn explicit_value_wins_everywhere() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Про нас", "slug": "pro-nas" }));
        let explicit = json!("Custom Value");
        for operation in [FieldOperation::Create, FieldOperation::Update] {
            let out = field.apply(SlugHookArgs {
                value: Some(&explicit),
                operation,
                data: &data,
            });
            assert_eq!(out, Some(json!("custom-value")));
        }
    }

    #[test]
    fn non_string_value_passes_through() {
        let field = SlugField::default();
        let data = data(json!({ "title": "Про нас", "slug": "pro-nas" }));
        let number = json!(42);
        let out = field.apply(SlugHookArgs {
            value: Some(&number),
            operation: FieldOperation::Update,
            data: &data,
        });
        assert_eq!(out, Some(json!(42)));
    }

    #[test]
    fn non_string_fallback_is_ignored() {
        let field = SlugField::default();
        let data = data(json!({ "title": 7 }));
        let out = field.apply(SlugHookArgs {
            value: None,
            operation: FieldOperation::Create,
            data: &data,
        });
        assert_eq!(out, None);
    }

    #[test]
    fn custom_fallback_field() {
        let field = SlugField::new("name");
        let data = data(json!({ "title": "ignored", "name": "Львів" }));
        let out = field.apply(SlugHookArgs {
            value: None,
            operation: FieldOperation::Create,
            data: &data,
        });
        assert_eq!(out, Some(json!("lviv")));
    }
}
