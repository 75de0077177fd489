//! Chat route — form parsing, dispatch to the responder, status mapping.
//!
//! DESIGN
//! ======
//! The handler never fails: every path ends in a [`ChatOutcome`], which
//! renders as 200 with the reply, 400 with a client error, or 500 with a
//! generic apology plus the error detail. The responder runs on its own task
//! so a panic inside it surfaces as a 500 instead of a dropped connection.

use std::sync::Arc;

use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use super::now_iso8601;
use crate::state::AppState;

pub const APOLOGY: &str = "Sorry, I'm having trouble right now. Please try again in a moment! 🤖";

// =============================================================================
// ERRORS AND OUTCOME
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        ChatOutcome::from(self).into_response()
    }
}

/// Result of one `/chat` call, mapped to a status code at the transport edge.
#[derive(Debug)]
pub enum ChatOutcome {
    Ok(String),
    ClientError(String),
    InternalError(String),
}

impl From<ChatError> for ChatOutcome {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::MissingMessage => Self::ClientError(e.to_string()),
            ChatError::Internal(detail) => Self::InternalError(detail),
        }
    }
}

impl IntoResponse for ChatOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => (StatusCode::OK, Json(json!({ "response": text, "timestamp": now_iso8601() })))
                .into_response(),
            Self::ClientError(reason) => (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response(),
            Self::InternalError(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "response": APOLOGY, "error": detail })),
            )
                .into_response(),
        }
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Fields of a `/chat` submission. Only the upload's filename is kept.
#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    pub message: Option<String>,
    pub context: Option<String>,
    #[serde(skip)]
    pub file_name: Option<String>,
}

impl ChatForm {
    /// Message with the upload marker appended, or `MissingMessage`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::MissingMessage`] when the message is absent or empty.
    pub fn into_parts(self) -> Result<(String, Option<String>), ChatError> {
        let mut message = self.message.unwrap_or_default();
        if message.is_empty() {
            return Err(ChatError::MissingMessage);
        }
        if let Some(name) = self.file_name.filter(|n| !n.is_empty()) {
            message.push_str(&format!("\n[User uploaded: {name}]"));
        }
        Ok((message, self.context))
    }
}

/// Accepts multipart or urlencoded bodies. Any other content type reads as
/// an empty form.
impl<S> FromRequest<S> for ChatForm
where
    S: Send + Sync,
{
    type Rejection = ChatError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ChatError::Internal(e.body_text()))?;
            return read_multipart(multipart).await;
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|e| ChatError::Internal(e.body_text()))?;
            return Ok(form);
        }
        Ok(Self::default())
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ChatForm, ChatError> {
    let mut form = ChatForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ChatError::Internal(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "message" => form.message = Some(field.text().await.map_err(|e| ChatError::Internal(e.body_text()))?),
            "context" => form.context = Some(field.text().await.map_err(|e| ChatError::Internal(e.body_text()))?),
            // Content is never read; the field is skipped when dropped.
            "file" => form.file_name = field.file_name().map(str::to_owned),
            _ => {}
        }
    }
    Ok(form)
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /chat` — reply to one message.
pub async fn chat(State(state): State<AppState>, form: Result<ChatForm, ChatError>) -> ChatOutcome {
    match handle_chat(&state, form).await {
        Ok(text) => ChatOutcome::Ok(text),
        Err(ChatError::MissingMessage) => {
            info!("chat: rejected request without message");
            ChatError::MissingMessage.into()
        }
        Err(ChatError::Internal(detail)) => {
            error!(error = %detail, "chat: request failed");
            ChatOutcome::InternalError(detail)
        }
    }
}

async fn handle_chat(state: &AppState, form: Result<ChatForm, ChatError>) -> Result<String, ChatError> {
    let (message, context) = form?.into_parts()?;
    info!(message_len = message.len(), has_context = context.is_some(), "chat: message received");

    let responder = Arc::clone(&state.responder);
    tokio::spawn(async move { responder.respond(&message, context.as_deref()).await })
        .await
        .map_err(|e| ChatError::Internal(e.to_string()))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
