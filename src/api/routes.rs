use axum::{
    body::Bytes,
    routing::{get, post},
    Router,
    extract::State,
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{Result, AppError};
use crate::api::models::{HealthResponse, ScrapeRequest, ScrapeResponse, SUCCESS_MESSAGE};
use crate::api::response;
use crate::scraper::{excerpt, fetch_text, EXCERPT_CHARS};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/scrape", post(scrape_handler))
        .route("/health/check", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> impl IntoResponse {
    response::success(HealthResponse {
        status: "healthy".to_string(),
        message: "Service is running".to_string(),
    })
}

// Raw body; parse errors become a 500.
async fn scrape_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match process_scrape_request(&state, &body).await {
        Ok(scraped) => response::success(scraped).into_response(),
        Err(err) => {
            if !matches!(err, AppError::Validation(_)) {
                tracing::warn!(error = %err, "scrape request failed");
            }
            err.into_response()
        }
    }
}

async fn process_scrape_request(state: &AppState, body: &[u8]) -> Result<ScrapeResponse> {
    let req: ScrapeRequest = serde_json::from_slice(body)?;
    let (url, property_id) = req.required_fields()?;

    tracing::info!(url = %url, property_id = %property_id, "scraping property page");
    let page = fetch_text(&state.client, &url).await?;

    Ok(ScrapeResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: excerpt(&page, EXCERPT_CHARS).to_string(),
    })
}
