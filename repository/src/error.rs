use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The query target does not exist or holds no matching movie.
    #[error("movie not found")]
    NotFound,

    #[error("DynamoDB request failed: {0}")]
    Dynamo(#[from] aws_sdk_dynamodb::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
