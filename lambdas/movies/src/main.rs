mod error;
mod handler;
mod schema;

use handler::Movies;
use lambda_http::{run, service_fn, Error, Request};
use repository::MovieRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let shared_config = aws_config::load_from_env().await;
    let movies_ref = &Movies::new(MovieRepository::new(&shared_config)?)?;

    run(service_fn(move |event: Request| async move {
        tracing::info!(method = %event.method(), "Handling movies request");
        movies_ref.handle(event).await
    }))
    .await?;
    Ok(())
}
