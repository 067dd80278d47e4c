use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::assistant::advisor::{self, ProjectRequest};
use crate::db::ChatbotExchange;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::llm_client::ChatMessage;
use crate::models::chat::ChatTurn;
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 50;
const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// POST /api/chat
/// Stateless pass-through: the caller supplies the whole conversation.
pub async fn handle_chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    if body.messages.is_empty() {
        return Err(AppError::Validation("messages must not be empty".to_string()));
    }

    let message = state
        .llm
        .chat(&body.messages)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(json!({ "message": message })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotRequest {
    pub skills: Option<Vec<String>>,
    pub resume_text: Option<String>,
    pub request_type: Option<String>,
}

/// POST /api/chatbot
pub async fn handle_chatbot(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ChatbotRequest>,
) -> Result<Json<Value>, AppError> {
    let missing = || AppError::Validation("Missing required parameters".to_string());
    let skills = body.skills.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let resume_text = body
        .resume_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(missing)?;
    let request_type = body
        .request_type
        .filter(|t| !t.is_empty())
        .ok_or_else(missing)?;

    let request = ProjectRequest::from_name(&request_type)
        .ok_or_else(|| AppError::Validation("Invalid request type".to_string()))?;

    info!("Project advisor request: {} ({} skills)", request.as_str(), skills.len());
    let response = advisor::advise(&state.llm, request, &skills, &resume_text)
        .await
        .map_err(|e| {
            error!("Project advisor failed: {e}");
            AppError::Upstream("Failed to process request".to_string())
        })?;

    state.conversation_log.record_chatbot_exchange(ChatbotExchange {
        skills,
        resume_text,
        request_type: request.as_str(),
        response: response.clone(),
    });

    Ok(Json(json!({ "response": response })))
}

/// POST /api/chat/sessions
pub async fn handle_create_session() -> Json<Value> {
    Json(json!({ "sessionId": Uuid::new_v4().to_string() }))
}

#[derive(Debug, Deserialize)]
pub struct SessionMessageRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat/sessions/:id/messages
pub async fn handle_session_message(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<String>,
    ApiJson(body): ApiJson<SessionMessageRequest>,
) -> Result<Json<ChatTurn>, AppError> {
    validate_session_id(&session_id)?;
    let text = body.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    Ok(Json(state.assistant.send_message(&session_id, text).await))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// GET /api/chat/sessions/:id/history
pub async fn handle_session_history(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<String>,
    ApiQuery(params): ApiQuery<HistoryParams>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    validate_session_id(&session_id)?;
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    let turns = state
        .assistant
        .history(&session_id, limit)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(turns))
}

fn validate_session_id(session_id: &str) -> Result<(), AppError> {
    if session_id.trim().is_empty() || session_id.len() > MAX_SESSION_ID_LEN {
        return Err(AppError::Validation(format!(
            "sessionId must be 1-{MAX_SESSION_ID_LEN} characters"
        )));
    }
    Ok(())
}
