use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::domain::Message;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: Option<Message>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

pub async fn get_messages(State(state): State<AppState>) -> Json<MessagesResponse> {
    let session = state.session.lock().await;
    Json(MessagesResponse {
        messages: session.conversation.messages().to_vec(),
    })
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let mut session = state.session.lock().await;
    let exchange = state.chat_service.ask(
        &request.message,
        session.conversation.clone(),
        &session.corpus,
    );

    if exchange.reply.is_some() {
        state
            .store
            .save_conversation(&exchange.history)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to save conversation");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
        session.conversation = exchange.history;
    }

    Ok(Json(ChatResponse {
        reply: exchange.reply,
        messages: session.conversation.messages().to_vec(),
    }))
}

pub async fn clear_messages(
    State(state): State<AppState>,
) -> Result<Json<MessagesResponse>, StatusCode> {
    let mut session = state.session.lock().await;
    let conversation = state
        .chat_service
        .clear_history(&session.conversation);

    state
        .store
        .save_conversation(&conversation)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to save conversation");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    session.conversation = conversation;

    Ok(Json(MessagesResponse {
        messages: Vec::new(),
    }))
}
