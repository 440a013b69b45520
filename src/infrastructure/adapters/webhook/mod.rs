//! Webhook adapter - Serves the command router over HTTP

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::application::errors::{BotError, CommandError};
use crate::application::messaging::CommandRouter;
use crate::domain::entities::{Message, Reply};

/// Webhook request body
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub message: Option<String>,
}

/// Shared state handed to every request
#[derive(Clone)]
pub struct WebhookState {
    router: CommandRouter,
    greeting: Arc<str>,
}

impl WebhookState {
    pub fn new(router: CommandRouter, greeting: impl Into<Arc<str>>) -> Self {
        Self {
            router,
            greeting: greeting.into(),
        }
    }
}

pub fn build_router(state: WebhookState) -> Router {
    Router::new()
        .route("/", get(home).post(handle_message))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(listener: TcpListener, state: WebhookState) -> Result<(), BotError> {
    let addr = listener
        .local_addr()
        .map_err(|e| BotError::Internal(e.to_string()))?;
    tracing::info!("Webhook listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BotError::Internal(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down webhook");
}

async fn home(State(state): State<WebhookState>) -> String {
    state.greeting.to_string()
}

async fn handle_message(
    State(state): State<WebhookState>,
    payload: Result<Json<IncomingMessage>, JsonRejection>,
) -> Result<Json<Reply>, BotError> {
    let Json(body) = payload.map_err(|e| CommandError::InvalidBody(e.body_text()))?;
    let text = body.message.ok_or(CommandError::EmptyMessage)?;

    let message = Message::new(text).with_platform("webhook");
    let reply = state.router.process(&message).await.map_err(|e| {
        tracing::warn!("[{}] {}", message.id, e);
        e
    })?;

    Ok(Json(reply))
}

impl BotError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BotError::Command(_) => StatusCode::BAD_REQUEST,
            BotError::Network(_) | BotError::Parse(_) => StatusCode::BAD_GATEWAY,
            BotError::Config(_) | BotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            BotError::Command(e) => e.to_string(),
            other => other.to_string(),
        };
        (status, Json(Reply::new(message))).into_response()
    }
}
