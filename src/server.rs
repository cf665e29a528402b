// Storyboard HTTP API
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::export::{self, ExportFormat};
use crate::state::{OptionsResponse, ServerState};
use crate::storyboard::{generate_storyboard, split_lyrics, LengthCategory, Mood, NoProgress, SceneRecord};

pub type AppState = Arc<ServerState>;

pub const EMPTY_LYRICS_ERROR: &str = "Please enter some lyrics to generate scenes.";

#[derive(Deserialize)]
pub struct StoryboardRequest {
    pub lyrics: String,
    pub mood: Option<String>,
    pub length: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct StoryboardResponse {
    pub mood: Mood,
    pub length: LengthCategory,
    pub scenes: Vec<SceneRecord>,
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub scenes: Vec<SceneRecord>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(err: anyhow::Error) -> Self {
        error!("[SERVER] {:#}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/options", get(get_options))
        .route("/api/storyboard", post(create_storyboard))
        .route("/api/export/:format", post(export_storyboard))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn start_server(port: u16, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let display_addr = if addr.ip().is_unspecified() {
        format!("127.0.0.1:{}", port)
    } else {
        addr.to_string()
    };
    info!("[SERVER] Storyboard API running on http://{}", display_addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from_config(&state.config))
}

async fn create_storyboard(
    State(state): State<AppState>,
    Json(payload): Json<StoryboardRequest>,
) -> Result<Json<StoryboardResponse>, ApiError> {
    if payload.lyrics.trim().is_empty() {
        return Err(ApiError::bad_request(EMPTY_LYRICS_ERROR));
    }

    let mood = match payload.mood.as_deref() {
        Some(name) => name.parse::<Mood>().map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => state.config.default_mood,
    };
    let length = match payload.length.as_deref() {
        Some(name) => name
            .parse::<LengthCategory>()
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => state.config.default_length,
    };

    let mut rng = state.config.rng(payload.seed);
    let scenes = generate_storyboard(
        &state.composer,
        &mut rng,
        split_lyrics(&payload.lyrics),
        mood,
        length,
        &mut NoProgress,
    );
    info!("[SERVER] Generated {} scenes", scenes.len());

    Ok(Json(StoryboardResponse { mood, length, scenes }))
}

async fn export_storyboard(
    Path(format): Path<ExportFormat>,
    Json(payload): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let body = export::render(&payload.scenes, format)
        .await
        .map_err(ApiError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        body,
    )
        .into_response())
}
