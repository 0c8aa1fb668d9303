//! JSON schema generation for strict structured outputs.
//!
//! OpenAI's strict mode requires `additionalProperties: false` on every
//! object schema, every property listed in `required` (nullable ones
//! included), and no `$ref` indirection. Raw `schemars` output satisfies
//! none of those, so it gets post-processed here.

use schemars::{schema_for, JsonSchema};

/// Generate a strict-mode JSON schema for `T`.
pub fn strict_object_schema<T: JsonSchema>() -> serde_json::Value {
    let schema = schema_for!(T);
    let mut value = serde_json::to_value(schema).unwrap_or_default();

    fix_object_schemas(&mut value);

    // Inline $refs, then drop the sections strict mode has no use for.
    let definitions = value.get("definitions").cloned();
    if let Some(definitions) = definitions {
        inline_refs(&mut value, &definitions);
    }
    if let serde_json::Value::Object(map) = &mut value {
        map.remove("definitions");
        map.remove("$schema");
    }

    value
}

/// Add `additionalProperties: false` to every object schema and force all
/// of its properties into `required`.
fn fix_object_schemas(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );

                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(all_keys));
                }
            }

            for (_, nested) in map.iter_mut() {
                fix_object_schemas(nested);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                fix_object_schemas(item);
            }
        }
        _ => {}
    }
}

/// Replace every `$ref` with its definition, recursively.
fn inline_refs(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(definition) = definitions.get(name) {
                        *value = definition.clone();
                        inline_refs(value, definitions);
                        return;
                    }
                }
            }

            for (_, nested) in map.iter_mut() {
                inline_refs(nested, definitions);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct TestItem {
        url: String,
        label: Option<String>,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct TestResponse {
        items: Vec<TestItem>,
    }

    #[test]
    fn test_root_object_is_strict() {
        let schema = strict_object_schema::<TestResponse>();
        let root = schema.as_object().unwrap();

        assert_eq!(
            root.get("additionalProperties"),
            Some(&serde_json::Value::Bool(false))
        );
        assert!(!root.contains_key("$schema"));
        assert!(!root.contains_key("definitions"));
    }

    #[test]
    fn test_all_properties_required() {
        // strict mode wants Option fields in required too
        let schema = strict_object_schema::<TestItem>();
        let required = schema
            .as_object()
            .unwrap()
            .get("required")
            .unwrap()
            .as_array()
            .unwrap();
        let names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();

        assert!(names.contains(&"url"));
        assert!(names.contains(&"label"));
    }

    #[test]
    fn test_nested_refs_inlined() {
        let schema = strict_object_schema::<TestResponse>();
        let serialized = serde_json::to_string(&schema).unwrap();
        assert!(!serialized.contains("$ref"));

        // the array item schema is the inlined object, strict and complete
        let items = schema
            .as_object()
            .unwrap()
            .get("properties")
            .unwrap()
            .get("items")
            .unwrap()
            .get("items")
            .unwrap()
            .as_object()
            .unwrap();

        assert_eq!(
            items.get("type"),
            Some(&serde_json::Value::String("object".to_string()))
        );
        assert_eq!(
            items.get("additionalProperties"),
            Some(&serde_json::Value::Bool(false))
        );
        let required = items.get("required").unwrap().as_array().unwrap();
        assert_eq!(required.len(), 2);
    }
}
