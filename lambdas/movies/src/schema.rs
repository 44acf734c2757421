use jsonschema::Validator;
use model::movie::ApiName;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::MoviesError;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostBody {
    pub api_id: String,
    pub api_name: ApiName,
}

pub struct PostBodySchema {
    validator: Validator,
}

impl PostBodySchema {
    pub fn new() -> Result<PostBodySchema, MoviesError> {
        let api_names: Vec<&str> = ApiName::ALL.iter().map(ApiName::as_str).collect();
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "api_id": { "type": "string" },
                "api_name": { "type": "string", "enum": api_names }
            },
            "required": ["api_id", "api_name"]
        });

        let validator = jsonschema::validator_for(&schema)
            .map_err(|err| MoviesError::Schema(err.to_string()))?;

        Ok(PostBodySchema { validator })
    }

    /// Checks `body` against the schema. The error is the validator's description of
    /// the first violation.
    pub fn validate(&self, body: &Value) -> Result<PostBody, String> {
        if let Some(err) = self.validator.iter_errors(body).next() {
            return Err(err.to_string());
        }

        serde_json::from_value(body.clone()).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PostBodySchema {
        PostBodySchema::new().unwrap()
    }

    #[test]
    fn accepts_a_supported_movie() {
        let body = schema()
            .validate(&json!({"api_id": "123", "api_name": "tmdb"}))
            .unwrap();

        assert_eq!(
            body,
            PostBody {
                api_id: "123".to_string(),
                api_name: ApiName::Tmdb
            }
        );
    }

    #[test]
    fn names_the_unexpected_property() {
        let err = schema().validate(&json!({"aa": "bb"})).unwrap_err();

        assert_eq!(err, "Additional properties are not allowed ('aa' was unexpected)");
    }

    #[test]
    fn rejects_extra_properties_next_to_valid_ones() {
        let err = schema()
            .validate(&json!({"api_id": "123", "api_name": "mal", "year": "1999"}))
            .unwrap_err();

        assert!(err.contains("'year' was unexpected"), "{}", err);
    }

    #[test]
    fn names_the_missing_property() {
        let err = schema().validate(&json!({"api_id": "123"})).unwrap_err();

        assert!(err.contains("\"api_name\" is a required property"), "{}", err);
    }

    #[test]
    fn rejects_non_string_ids() {
        let err = schema()
            .validate(&json!({"api_id": 123, "api_name": "tmdb"}))
            .unwrap_err();

        assert!(err.contains("is not of type \"string\""), "{}", err);
    }

    #[test]
    fn rejects_unsupported_api_names() {
        assert!(schema()
            .validate(&json!({"api_id": "123", "api_name": "INVALID"}))
            .is_err());
    }

    #[test]
    fn rejects_non_objects() {
        assert!(schema().validate(&json!(["api_id", "api_name"])).is_err());
    }
}
