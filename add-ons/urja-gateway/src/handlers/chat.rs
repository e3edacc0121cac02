//! Chat handlers: POST /chat keyword routing and GET /weekly-tip generation.
//!
//! Adapter failures are logged server-side and answered with a generic 500
//! body; internal error detail never reaches the client.

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use urja_core::{ChatReply, RequestContext};

/// Request body for POST /chat. `message` is required; `state` defaults to "".
#[derive(serde::Deserialize)]
pub(crate) struct ChatRequest {
    message: Option<String>,
    #[serde(default)]
    state: String,
}

type JsonError = (StatusCode, Json<serde_json::Value>);

fn server_fault() -> JsonError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "inference backend unavailable" })),
    )
}

/// POST /chat – routes the message to exactly one of the four response paths.
pub(crate) async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, JsonError> {
    let Some(message) = req.message else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "field 'message' is required" })),
        ));
    };

    let ctx = RequestContext::with_correlation_id(uuid::Uuid::new_v4().to_string());
    tracing::info!(
        correlation_id = ctx.correlation(),
        "chat request received ({} chars)",
        message.len()
    );

    match state.router.dispatch(&ctx, &message, &req.state).await {
        Ok(reply) => Ok(Json(reply_body(reply))),
        Err(e) => {
            tracing::error!(
                correlation_id = ctx.correlation(),
                "chat dispatch failed: {}",
                e
            );
            Err(server_fault())
        }
    }
}

/// GET /weekly-tip – fresh sampled tip stamped with the server-local date.
pub(crate) async fn weekly_tip(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, JsonError> {
    let ctx = RequestContext::with_correlation_id(uuid::Uuid::new_v4().to_string());
    match state.router.energy_tip(&ctx).await {
        Ok(tip) => {
            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            Ok(Json(serde_json::json!({ "date": date, "weekly_tip": tip })))
        }
        Err(e) => {
            tracing::error!(
                correlation_id = ctx.correlation(),
                "weekly tip generation failed: {}",
                e
            );
            Err(server_fault())
        }
    }
}

/// Serializes a reply into its wire shape. The answer variant carries its
/// confidence as a sibling of `data`, so the mapping is spelled out rather
/// than derived.
fn reply_body(reply: ChatReply) -> serde_json::Value {
    match reply {
        ChatReply::Quiz(q) => serde_json::json!({ "type": "quiz", "data": q }),
        ChatReply::Tip(tip) => serde_json::json!({ "type": "tip", "data": tip }),
        ChatReply::Scheme(scheme) => serde_json::json!({ "type": "scheme", "data": scheme }),
        ChatReply::Answer { text, confidence } => serde_json::json!({
            "type": "answer",
            "data": text,
            "confidence": confidence,
        }),
    }
}
