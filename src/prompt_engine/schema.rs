// prompt_engine/schema.rs - Declared response schemas (Gemini OpenAPI subset)

use serde::Serialize;
use std::collections::BTreeMap;

/// Response schema attached to a structured-output request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Schema {
    String,
    Number,
    Array {
        items: Box<Schema>,
    },
    Object {
        properties: BTreeMap<String, Schema>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
    },
}

impl Schema {
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    pub fn string_list() -> Self {
        Schema::array(Schema::String)
    }

    /// Object whose listed fields are all required
    pub fn object<const N: usize>(fields: [(&str, Schema); N]) -> Self {
        let required = fields.iter().map(|(name, _)| name.to_string()).collect();
        let properties = fields
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();

        Schema::Object {
            properties,
            required,
        }
    }

    /// Names of the top-level required fields (empty for non-objects)
    pub fn required_fields(&self) -> &[String] {
        match self {
            Schema::Object { required, .. } => required,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_gemini_shape() {
        let schema = Schema::object([
            ("suggestions", Schema::string_list()),
            ("score", Schema::Number),
        ]);

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["suggestions", "score"]
            })
        );
    }

    #[test]
    fn nested_objects_keep_their_required_list() {
        let schema = Schema::object([(
            "tasks",
            Schema::array(Schema::object([
                ("task", Schema::String),
                ("priority", Schema::String),
            ])),
        )]);

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value["properties"]["tasks"]["items"]["required"],
            json!(["task", "priority"])
        );
        assert_eq!(schema.required_fields(), ["tasks".to_string()]);
    }
}
