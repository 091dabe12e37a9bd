use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use crate::api::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::youtube::YouTubeClient;
use commentscope::config::AppConfig;
use commentscope::insights::generate_insights;
use commentscope::sentiment::score_comments;

#[derive(Clone)]
struct AppState {
    youtube: YouTubeClient,
    config: Arc<AppConfig>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let youtube = YouTubeClient::from_env(&config.fetch)?;
    let state = AppState {
        youtube,
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/analyze", post(analyze_handler))
        .nest_service("/", static_service)
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "starting server");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(url) = request.url.filter(|value| !value.is_empty()) else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'url' parameter.",
        ));
    };
    let max_comments = request
        .max_comments
        .unwrap_or(state.config.fetch.default_max_comments) as usize;
    let keyword = request.keyword;

    info!(url = %url, max_comments, keyword = ?keyword, "analysis request received");

    let raw_comments = state.youtube.fetch_comments(&url, max_comments).await;
    if raw_comments.is_empty() {
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not fetch any comments. Check URL or API key.",
        ));
    }

    let scored = score_comments(&raw_comments);
    match generate_insights(&scored, keyword.as_deref(), state.config.analysis.top_words) {
        Ok(insights) => Ok(Json(AnalyzeResponse {
            success: true,
            insights,
        })),
        Err(err) => {
            error!(error = %err, "analysis failed");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("An internal server error occurred during analysis: {}", err),
            ))
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(message)))
}
