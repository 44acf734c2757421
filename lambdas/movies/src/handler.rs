use lambda_http::{Body, Error, Request, RequestExt, Response};
use model::movie::{ApiName, Movie};
use repository::{MovieStore, RepositoryError};
use response::{bad_request, bad_request_error, not_found, ok};
use serde_json::{json, Value};

use crate::error::MoviesError;
use crate::schema::PostBodySchema;

pub struct Movies<S> {
    store: S,
    schema: PostBodySchema,
}

impl<S: MovieStore> Movies<S> {
    pub fn new(store: S) -> Result<Movies<S>, MoviesError> {
        Ok(Movies {
            store,
            schema: PostBodySchema::new()?,
        })
    }

    /// Routes the request by its HTTP method. Anything but `GET` and `POST` fails with
    /// [`MoviesError::UnsupportedMethod`] instead of producing a response.
    pub async fn handle(&self, event: Request) -> Result<Response<Body>, Error> {
        match event.method().as_str() {
            "GET" => self.get(&event).await,
            "POST" => self.post(event.body()).await,
            method => {
                tracing::error!(method, "Unsupported method");
                Err(MoviesError::UnsupportedMethod(method.to_string()).into())
            }
        }
    }

    async fn get(&self, event: &Request) -> Result<Response<Body>, Error> {
        let params = event.query_string_parameters();

        if params.iter().next().is_none() {
            return Ok(bad_request_error("Please specify query parameters")?);
        }

        let api_id = params.first("api_id");
        let id = params.first("id");

        if api_id.is_none() && id.is_none() {
            return Ok(bad_request_error("Missing api_id query parameter")?);
        }

        if api_id.is_some() && params.first("api_name").is_none() {
            return Ok(bad_request_error("Missing api_name query parameter")?);
        }

        // a present api_name is always checked, whichever key the lookup uses
        let api_name = match params.first("api_name").map(str::parse::<ApiName>).transpose() {
            Ok(api_name) => api_name,
            Err(err) => {
                tracing::warn!("{}", err);
                return Ok(bad_request_error("Unsupported query param")?);
            }
        };

        let (api_id, api_name) = match (api_id, api_name, id) {
            (Some(api_id), Some(api_name), _) => (api_id, api_name),
            (None, _, Some(id)) => return self.get_by_id(id).await,
            _ => return Ok(bad_request_error("Missing api_id query parameter")?),
        };

        match self.store.query(api_id, api_name).await {
            Ok(items) => match items.first() {
                Some(item) => Ok(ok(item)?),
                None => Ok(not_found()?),
            },
            Err(RepositoryError::NotFound) => {
                tracing::info!(api_id, %api_name, "Movie not found");
                Ok(not_found()?)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Response<Body>, Error> {
        match self.store.get(id).await {
            Ok(item) => Ok(ok(&item)?),
            Err(RepositoryError::NotFound) => {
                tracing::info!(id, "Movie not found");
                Ok(not_found()?)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn post(&self, body: &Body) -> Result<Response<Body>, Error> {
        if let Body::Empty = body {
            return Ok(bad_request("Invalid post body".to_string())?);
        }

        let body: Value = match serde_json::from_slice(body) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Could not parse post body: {}", err);
                return Ok(bad_request("Invalid post body".to_string())?);
            }
        };

        let body = match self.schema.validate(&body) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Invalid post schema: {}", err);
                let message = json!({
                    "message": "Invalid post schema",
                    "error": err
                });
                return Ok(bad_request(message.to_string())?);
            }
        };

        let movie = Movie::new(body.api_id, body.api_name);

        match self.store.query(&movie.api_id, movie.api_name).await {
            Ok(_) => {
                tracing::info!(id = %movie.id, "Movie already exists");
            }
            Err(RepositoryError::NotFound) => {
                self.store.put(&movie).await?;
                tracing::info!(id = %movie.id, api_id = %movie.api_id, api_name = %movie.api_name, "Created movie");
            }
            Err(err) => return Err(err.into()),
        }

        Ok(ok(&json!({ "id": movie.id }))?)
    }
}
