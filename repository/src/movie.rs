use std::env;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use model::item::{self, Item};
use model::movie::{ApiName, Movie};

use crate::error::RepositoryError;

pub const TABLE_ENV: &str = "MOVIES_TABLE";
pub const API_INDEX_ENV: &str = "MOVIES_API_INDEX";
pub const DEFAULT_API_INDEX: &str = "api_id-api_name-index";

/// Storage accessor for movies.
///
/// Lookups that find nothing fail with [`RepositoryError::NotFound`] so callers can
/// tell a missing movie apart from a failing store.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Every stored item whose `api_id` and `api_name` attributes match.
    async fn query(&self, api_id: &str, api_name: ApiName) -> Result<Vec<Item>, RepositoryError>;

    /// The item stored under the primary key `id`.
    async fn get(&self, id: &str) -> Result<Item, RepositoryError>;

    /// Inserts the movie unless a record with the same `id` already exists.
    async fn put(&self, movie: &Movie) -> Result<(), RepositoryError>;
}

pub struct MovieRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl MovieRepository {
    pub fn new(shared_config: &SdkConfig) -> Result<MovieRepository, RepositoryError> {
        let table_name = env::var(TABLE_ENV)
            .map_err(|_| RepositoryError::Config(format!("{} is not set", TABLE_ENV)))?;
        let index_name = env::var(API_INDEX_ENV).unwrap_or_else(|_| DEFAULT_API_INDEX.to_string());

        Ok(MovieRepository::new_with_table_name(
            shared_config,
            table_name,
            index_name,
        ))
    }

    pub fn new_with_table_name(
        shared_config: &SdkConfig,
        table_name: String,
        index_name: String,
    ) -> MovieRepository {
        MovieRepository {
            client: Client::new(shared_config),
            table_name,
            index_name,
        }
    }
}

#[async_trait]
impl MovieStore for MovieRepository {
    async fn query(&self, api_id: &str, api_name: ApiName) -> Result<Vec<Item>, RepositoryError> {
        let response = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression("api_id = :api_id AND api_name = :api_name")
            .expression_attribute_values(":api_id", AttributeValue::S(api_id.to_string()))
            .expression_attribute_values(":api_name", AttributeValue::S(api_name.to_string()))
            .send()
            .await
            .map_err(dynamo_error)?;

        let items: Vec<Item> = response.items().iter().map(item::from_dynamo_item).collect();

        if items.is_empty() {
            Err(RepositoryError::NotFound)
        } else {
            Ok(items)
        }
    }

    async fn get(&self, id: &str) -> Result<Item, RepositoryError> {
        self.client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(dynamo_error)?
            .item()
            .map(item::from_dynamo_item)
            .ok_or(RepositoryError::NotFound)
    }

    async fn put(&self, movie: &Movie) -> Result<(), RepositoryError> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(movie.to_dynamo_item()))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await;

        match result.map_err(aws_sdk_dynamodb::Error::from) {
            Ok(_) => Ok(()),
            Err(aws_sdk_dynamodb::Error::ConditionalCheckFailedException(_)) => {
                tracing::info!(id = %movie.id, "Movie was created by a concurrent request");
                Ok(())
            }
            Err(err) => Err(RepositoryError::Dynamo(err)),
        }
    }
}

fn dynamo_error<E>(err: E) -> RepositoryError
where
    aws_sdk_dynamodb::Error: From<E>,
{
    match aws_sdk_dynamodb::Error::from(err) {
        aws_sdk_dynamodb::Error::ResourceNotFoundException(_) => RepositoryError::NotFound,
        other => RepositoryError::Dynamo(other),
    }
}
