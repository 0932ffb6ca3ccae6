//! HTTP routes of the answer service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::generator::AnswerGenerator;
use crate::types::{Answer, GenerateRequest};

pub type AppState = Arc<AnswerGenerator>;

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

async fn home() -> &'static str {
    "AI Service is running!"
}

async fn generate(
    State(generator): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Answer>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            info!(reason = %rejection, "rejected generate request body");
            return Err(api_error(StatusCode::BAD_REQUEST, "Question is required"));
        }
    };

    let Some(question) = req.question() else {
        return Err(api_error(StatusCode::BAD_REQUEST, "Question is required"));
    };

    let answer = generator.generate(question).await.map_err(|e| {
        error!(error = %e, "model call failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(answer))
}
