//! HTTP routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use chimera_domain::GameId;

use super::error::ApiError;
use crate::app::App;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health).fallback(unsupported_method))
        .route("/api/health", get(health).fallback(unsupported_method))
        .route("/api/generate", post(generate).fallback(unsupported_method))
        .route(
            "/api/narrative",
            get(default_narrative).fallback(unsupported_method),
        )
        .route("/api/action", post(default_action).fallback(unsupported_method))
        .route("/api/games", post(start_game).fallback(unsupported_method))
        .route(
            "/api/games/{game_id}/narrative",
            get(game_narrative).fallback(unsupported_method),
        )
        .route(
            "/api/games/{game_id}/action",
            post(game_action).fallback(unsupported_method),
        )
}

async fn health() -> &'static str {
    "OK"
}

/// Known path, wrong method. `OPTIONS` always succeeds so pre-flight checks
/// pass even when no CORS layer is installed.
async fn unsupported_method(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        ApiError::MethodNotAllowed.into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}

#[derive(Debug, Serialize)]
pub struct GameCreatedResponse {
    pub game_id: String,
    pub narrative: String,
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!(error = %rejection, "Rejected request body");
    ApiError::BadRequest(rejection.body_text())
}

fn parse_game_id(raw: String) -> Result<GameId, ApiError> {
    GameId::new(raw).map_err(|e| {
        tracing::warn!(error = %e, "Rejected game id");
        ApiError::BadRequest(e.message().to_string())
    })
}

async fn generate(
    State(app): State<Arc<App>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body.map_err(reject_body)?;
    let text = app.use_cases.generate.text.execute(request.prompt).await?;
    Ok(Json(GenerateResponse { text }))
}

async fn start_game(
    State(app): State<Arc<App>>,
) -> Result<(StatusCode, Json<GameCreatedResponse>), ApiError> {
    let started = app.use_cases.narrative.start.execute().await?;
    Ok((
        StatusCode::CREATED,
        Json(GameCreatedResponse {
            game_id: started.game_id.into(),
            narrative: started.narrative.into_inner(),
        }),
    ))
}

async fn default_narrative(
    State(app): State<Arc<App>>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    fetch_narrative(&app, &GameId::default()).await
}

async fn game_narrative(
    State(app): State<Arc<App>>,
    Path(game_id): Path<String>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let game_id = parse_game_id(game_id)?;
    fetch_narrative(&app, &game_id).await
}

async fn default_action(
    State(app): State<Arc<App>>,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let Json(request) = body.map_err(reject_body)?;
    process_action(&app, &GameId::default(), request.action).await
}

async fn game_action(
    State(app): State<Arc<App>>,
    Path(game_id): Path<String>,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let game_id = parse_game_id(game_id)?;
    let Json(request) = body.map_err(reject_body)?;
    process_action(&app, &game_id, request.action).await
}

async fn fetch_narrative(app: &App, game_id: &GameId) -> Result<Json<NarrativeResponse>, ApiError> {
    let fetched = app.use_cases.narrative.fetch.execute(game_id).await?;
    Ok(Json(NarrativeResponse {
        narrative: fetched.narrative.into_inner(),
    }))
}

async fn process_action(
    app: &App,
    game_id: &GameId,
    action: Option<String>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let processed = app.use_cases.narrative.turn.execute(game_id, action).await?;
    tracing::info!(
        game_id = %game_id,
        state_updated = processed.state_updated,
        "Processed player action"
    );
    Ok(Json(NarrativeResponse {
        narrative: processed.narrative.into_inner(),
    }))
}
