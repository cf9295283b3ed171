//! JSON HTTP server for the gallery.
//!
//! Serves the two screens of the gallery (the listing and the per-article
//! detail view) as JSON for a browser or any other rendering layer.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Listing view model (`category`, `sort`, `offset`, `rows` query params) |
//! | `GET`  | `/categories` | Category menu entries |
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/articles/{id}` | Detail view of one article |
//!
//! Every request builds its own [`ViewProjector`](article_gallery_core::ViewProjector)
//! over the shared dataset, so responses depend only on the dataset and the
//! request.
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "invalid page size 10: must be one of 12, 24, 48" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a browser frontend on
//! another origin can read the API.

use article_gallery_core::{PageSize, SortKey, ViewModel};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::categories::{list_categories, CategoryEntry};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::get::{get_article, ArticleDetail};
use crate::list::{list_articles, ListRequest};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    /// Cloning shares the underlying record collection.
    dataset: Dataset,
}

/// Build the router with all gallery routes and CORS.
pub fn router(config: Arc<Config>, dataset: Dataset) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_list))
        .route("/categories", get(handle_categories))
        .route("/health", get(handle_health))
        .route("/articles/{id}", get(handle_get))
        .layer(cors)
        .with_state(AppState { config, dataset })
}

/// Starts the HTTP server on `[server].bind` and runs until the process is
/// terminated.
pub async fn run_server(config: &Config, dataset: Dataset) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = router(Arc::new(config.clone()), dataset);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("gallery server listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (`"bad_request"`, `"not_found"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

// ============ GET / ============

/// Query parameters of the listing route. Names follow the paginator:
/// `offset` is the first visible index, `rows` the page size.
#[derive(Debug, Deserialize)]
struct ListParams {
    category: Option<String>,
    sort: Option<String>,
    #[serde(default)]
    offset: usize,
    rows: Option<usize>,
}

impl ListParams {
    /// Validate at the boundary: unknown sort keys and page sizes are
    /// rejected rather than silently ignored.
    fn into_request(self) -> Result<ListRequest, AppError> {
        let sort = self
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(|e| bad_request(e.to_string()))?;
        let page_size = self
            .rows
            .map(PageSize::try_from)
            .transpose()
            .map_err(|e| bad_request(e.to_string()))?;
        Ok(ListRequest {
            category: self.category,
            sort,
            offset: self.offset,
            page_size,
        })
    }
}

async fn handle_list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ViewModel>, AppError> {
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;
    let req = params.into_request()?;
    Ok(Json(list_articles(&state.config, &state.dataset, &req)))
}

// ============ GET /categories ============

#[derive(Serialize)]
struct CategoriesResponse {
    categories: Vec<CategoryEntry>,
}

async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: list_categories(&state.dataset),
    })
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /articles/{id} ============

async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleDetail>, AppError> {
    get_article(&state.dataset, &id)
        .map(Json)
        .map_err(|e| not_found(e.to_string()))
}
