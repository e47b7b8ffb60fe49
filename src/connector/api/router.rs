use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::domain::{Answer, Question};

use super::container::Container;
use super::error::ApiError;
use super::models::{QueryRequest, WelcomeResponse};

/// Build the inbound HTTP surface around a [`Container`].
///
/// Handlers are stateless; the container is shared read-only behind an `Arc`,
/// so concurrent requests need no coordination.
pub fn build_router(container: Container) -> Router {
    let cors = cors_layer(container.cors_origins());

    Router::new()
        .route("/", get(root))
        .route("/api/nasa/apod", get(get_astronomy_picture_of_the_day))
        .route("/api/query", post(handle_query))
        .layer(cors)
        .with_state(Arc::new(container))
}

/// Bind and serve until the process is stopped.
pub async fn serve(container: Container, host: &str, port: u16) -> anyhow::Result<()> {
    let app = build_router(container);
    let listener = TcpListener::bind(format!("{host}:{port}")).await?;
    info!(
        "CosmicQuery API v{} listening on http://{}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {o}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}

async fn get_astronomy_picture_of_the_day(
    State(container): State<Arc<Container>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let body = container.apod_use_case().execute().await?;
    Ok(Json(body))
}

async fn handle_query(
    State(container): State<Arc<Container>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<Answer>, ApiError> {
    let question = Question::new(request.question)?;
    let answer = container.query_use_case().execute(question).await?;
    Ok(Json(answer))
}
