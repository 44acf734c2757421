use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace of every movie id. Changing it changes every derived id, so it is pinned.
pub const MOVIE_ID_NAMESPACE: Uuid = Uuid::from_u128(0x8f9a6a52_4c1e_4b7e_9d3a_5e2f1c0b7a64);

/// External catalog a movie was looked up in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApiName {
    Tmdb,
    Mal,
}

impl ApiName {
    pub const ALL: [ApiName; 2] = [ApiName::Tmdb, ApiName::Mal];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiName::Tmdb => "tmdb",
            ApiName::Mal => "mal",
        }
    }
}

impl FromStr for ApiName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<ApiName, Self::Err> {
        ApiName::ALL
            .into_iter()
            .find(|api_name| api_name.as_str() == s)
            .ok_or_else(|| anyhow!("`{}` is not a supported api_name", s))
    }
}

impl fmt::Display for ApiName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub api_id: String,
    pub api_name: ApiName,
}

impl Movie {
    /// Builds the record for an external id, deriving its `id`.
    pub fn new(api_id: String, api_name: ApiName) -> Movie {
        Movie {
            id: movie_id(&api_id, api_name).to_string(),
            api_id,
            api_name,
        }
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("id".to_string(), AttributeValue::S(self.id.clone())),
            ("api_id".to_string(), AttributeValue::S(self.api_id.clone())),
            (
                "api_name".to_string(),
                AttributeValue::S(self.api_name.to_string()),
            ),
        ])
    }
}

/// Name-based (v5) UUID of `<api_name>:<api_id>` under [`MOVIE_ID_NAMESPACE`].
///
/// Pure: the same pair always maps to the same id, on any runtime that implements
/// RFC 4122 version 5 UUIDs.
pub fn movie_id(api_id: &str, api_name: ApiName) -> Uuid {
    let name = format!("{}:{}", api_name.as_str(), api_id);
    Uuid::new_v5(&MOVIE_ID_NAMESPACE, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_is_pinned() {
        assert_eq!(
            movie_id("123", ApiName::Tmdb).to_string(),
            "f7e0aca0-58d6-570d-8686-99eaf06f5697"
        );
        assert_eq!(
            movie_id("123", ApiName::Mal).to_string(),
            "e0e16c8e-ad89-54c1-9d88-0d9d609df133"
        );
    }

    #[test]
    fn movie_id_is_deterministic_and_distinct() {
        assert_eq!(movie_id("123", ApiName::Tmdb), movie_id("123", ApiName::Tmdb));
        assert_ne!(movie_id("123", ApiName::Tmdb), movie_id("123", ApiName::Mal));
        assert_ne!(movie_id("123", ApiName::Tmdb), movie_id("456", ApiName::Tmdb));
    }

    #[test]
    fn api_name_parsing_is_case_sensitive() {
        assert_eq!("tmdb".parse::<ApiName>().unwrap(), ApiName::Tmdb);
        assert_eq!("mal".parse::<ApiName>().unwrap(), ApiName::Mal);
        assert!("TMDB".parse::<ApiName>().is_err());
        assert!("INVALID".parse::<ApiName>().is_err());
    }

    #[test]
    fn dynamo_item_holds_the_record() {
        let item = Movie::new("123".to_string(), ApiName::Tmdb).to_dynamo_item();

        assert_eq!(item.len(), 3);
        assert_eq!(item["id"].as_s().unwrap(), "f7e0aca0-58d6-570d-8686-99eaf06f5697");
        assert_eq!(item["api_id"].as_s().unwrap(), "123");
        assert_eq!(item["api_name"].as_s().unwrap(), "tmdb");
    }
}
