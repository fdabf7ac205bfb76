//! Type-safe schema generation for OpenAI structured outputs.
//!
//! Uses the `schemars` crate to generate JSON schemas from Rust types, then
//! rewrites them into the shape OpenAI's strict mode accepts.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use openai_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Listing {
//!     title: String,
//!     url: String,
//! }
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct ListingResponse {
//!     listings: Vec<Listing>,
//! }
//!
//! let schema = ListingResponse::openai_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as OpenAI structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate an OpenAI-compatible JSON schema for this type.
    ///
    /// OpenAI strict mode requires:
    /// 1. `additionalProperties: false` on all object schemas
    /// 2. ALL properties listed in `required`, even nullable ones
    /// 3. Fully inlined schemas (no `$ref` references)
    ///
    /// This method transforms the schemars output to meet these requirements.
    fn openai_schema() -> serde_json::Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        // Pull the definitions table out up front: strict mode wants a fully
        // inlined schema, so the table only serves as a lookup during the
        // rewrite and must not appear in the output. $schema goes with it.
        let definitions = match &mut value {
            serde_json::Value::Object(map) => {
                map.remove("$schema");
                map.remove("definitions").unwrap_or(serde_json::Value::Null)
            }
            _ => serde_json::Value::Null,
        };

        strictify(&mut value, &definitions);
        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// One pass over the schema tree: inline every `$ref` against the
/// definitions table, force `additionalProperties: false` on every object,
/// and list every property in `required` (strict mode wants nullable fields
/// there too).
fn strictify(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(path)) = map.get("$ref").cloned() {
                if let Some(name) = path.strip_prefix("#/definitions/") {
                    if let Some(definition) = definitions.get(name) {
                        *value = definition.clone();
                        // The inlined definition may itself carry refs
                        strictify(value, definitions);
                        return;
                    }
                }
            }

            if map.get("type").and_then(|t| t.as_str()) == Some("object") {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );

                if let Some(serde_json::Value::Object(properties)) = map.get("properties") {
                    let every_key = properties
                        .keys()
                        .cloned()
                        .map(serde_json::Value::String)
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(every_key));
                }
            }

            for child in map.values_mut() {
                strictify(child, definitions);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                strictify(item, definitions);
            }
        }
        _ => {}
    }
}
