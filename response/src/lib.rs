use lambda_http::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        response::Builder,
        Error, StatusCode,
    },
    Body, Response,
};
use serde::Serialize;
use serde_json::json;

fn builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
}

/// 200 with `body` serialized as JSON.
pub fn ok<T>(body: &T) -> Result<Response<Body>, Error>
where
    T: Serialize,
{
    builder(StatusCode::OK).body(Body::Text(json!(body).to_string()))
}

/// 400 with `body` sent as is.
pub fn bad_request(body: String) -> Result<Response<Body>, Error> {
    builder(StatusCode::BAD_REQUEST).body(Body::Text(body))
}

/// 400 with `{"error": message}`.
pub fn bad_request_error(message: &str) -> Result<Response<Body>, Error> {
    bad_request(json!({ "error": message }).to_string())
}

/// 404 without a body.
pub fn not_found() -> Result<Response<Body>, Error> {
    builder(StatusCode::NOT_FOUND).body(Body::Empty)
}
