//! Field-presence validation for API payloads.
//!
//! Every entity declares its permitted field names as static required and
//! optional sets; one shared routine checks any candidate JSON object
//! against them before deserialization. Validation is presence/absence
//! only, all-or-nothing, and reports every offending field name at once.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{PowerDnsError, Result};

/// Static field schema for one entity kind.
pub(crate) struct ObjectSchema {
    /// Entity name used in error reporting.
    pub entity: &'static str,
    /// Fields that must be present.
    pub required: &'static [&'static str],
    /// Fields that may be present.
    pub optional: &'static [&'static str],
}

impl ObjectSchema {
    /// Check that `map` carries every required field and nothing outside
    /// required ∪ optional.
    pub(crate) fn validate(&self, map: &Map<String, Value>) -> Result<()> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|field| !map.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect();

        let unexpected: Vec<String> = map
            .keys()
            .filter(|key| {
                !self.required.contains(&key.as_str()) && !self.optional.contains(&key.as_str())
            })
            .cloned()
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(PowerDnsError::Schema {
                entity: self.entity.to_string(),
                missing,
                unexpected,
            })
        }
    }
}

/// A typed API entity constructed from a schema-validated JSON payload.
pub(crate) trait ApiObject: DeserializeOwned {
    const SCHEMA: ObjectSchema;

    /// Validate nested collections before deserializing.
    fn validate_nested(_map: &Map<String, Value>) -> Result<()> {
        Ok(())
    }

    /// Post-validation fixup (e.g. trailing-dot name normalization).
    /// Runs only after the schema check succeeded.
    fn normalize(&mut self) {}

    /// Build a typed entity from a raw JSON value.
    fn from_value(value: Value) -> Result<Self> {
        {
            let Value::Object(map) = &value else {
                return Err(PowerDnsError::Parse {
                    detail: format!("expected a JSON object for {}", Self::SCHEMA.entity),
                });
            };
            Self::SCHEMA.validate(map)?;
            Self::validate_nested(map)?;
        }

        let mut object: Self =
            serde_json::from_value(value).map_err(|e| PowerDnsError::Parse {
                detail: format!("{}: {e}", Self::SCHEMA.entity),
            })?;
        object.normalize();
        Ok(object)
    }

    /// Build a vector of typed entities from a raw JSON array.
    fn vec_from_value(value: Value) -> Result<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(PowerDnsError::Parse {
                detail: format!("expected a JSON array of {}s", Self::SCHEMA.entity),
            });
        };
        items.into_iter().map(Self::from_value).collect()
    }
}

/// Validate every element of a nested JSON array against `schema`,
/// recursing through `nested` for each element.
pub(crate) fn validate_items(
    map: &Map<String, Value>,
    field: &str,
    schema: &ObjectSchema,
    nested: fn(&Map<String, Value>) -> Result<()>,
) -> Result<()> {
    if let Some(Value::Array(items)) = map.get(field) {
        for item in items {
            if let Value::Object(item_map) = item {
                schema.validate(item_map)?;
                nested(item_map)?;
            }
        }
    }
    Ok(())
}
