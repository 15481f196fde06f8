mod config;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use connect_four::{best_move, position_status, GameError, MoveRequest};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_filter);
    let app = app_router(&config);

    let listener = TcpListener::bind(config.addr).await?;
    info!(depth = config.depth, "Listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Clone, Debug)]
struct AppState {
    depth: usize,
}

fn app_router(config: &Config) -> Router {
    let state = AppState {
        depth: config.depth,
    };
    let api = Router::new()
        .route("/move", get(handle_move))
        .route("/status", get(handle_status))
        .route("/health", get(|| async { "ok" }))
        .with_state(state);
    Router::new()
        .nest("/api", api)
        .fallback_service(
            ServeDir::new(&config.static_dir).append_index_html_on_directories(true),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET])
                .allow_origin(axum::http::HeaderValue::from_static("*"))
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, serde::Deserialize)]
struct PositionQuery {
    #[serde(default)]
    position: String,
}

async fn handle_move(
    State(state): State<AppState>,
    Query(query): Query<PositionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let req = MoveRequest {
        position: query.position,
    };
    let depth = state.depth;
    // The search is CPU-bound; keep it off the async workers.
    let mv = tokio::task::spawn_blocking(move || best_move(&req, depth)).await??;
    debug!(column = mv.column, score = mv.score, "move computed");
    let headers = [(header::CACHE_CONTROL, "no-store")];
    Ok((headers, Json(mv)))
}

async fn handle_status(Query(query): Query<PositionQuery>) -> Result<impl IntoResponse, ApiError> {
    let status = position_status(&query.position)?;
    Ok(Json(status))
}

#[derive(Debug)]
struct ApiError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is::<GameError>() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = format!("{}", self.0);
        (status, body).into_response()
    }
}
