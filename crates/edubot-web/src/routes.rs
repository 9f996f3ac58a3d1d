//! Router and request handlers

use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::service::QueryService;

const MISSING_MSG_BODY: &str = "Error: No message received.";
const PIPELINE_FAILURE_BODY: &str =
    "An internal server error occurred while processing your request.";

/// Minimal chat page served at `/`
const CHAT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Edubot</title></head>
<body>
  <h1>Edubot</h1>
  <form action="/get" method="post">
    <input type="text" name="msg" placeholder="Ask a question" size="60">
    <button type="submit">Send</button>
  </form>
</body>
</html>
"#;

#[derive(Clone)]
struct AppState {
    service: Arc<dyn QueryService>,
}

#[derive(Deserialize)]
struct ChatParams {
    msg: Option<String>,
}

/// Build the application router over a query service
pub fn router(service: Arc<dyn QueryService>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get", get(chat_get).post(chat_post))
        .with_state(AppState { service })
}

/// Bind and serve the router until the process exits
pub async fn serve(router: Router, port: u16) -> edubot_core::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn chat_get(State(state): State<AppState>, Query(params): Query<ChatParams>) -> Response {
    respond(state, params.msg).await
}

async fn chat_post(State(state): State<AppState>, Form(params): Form<ChatParams>) -> Response {
    respond(state, params.msg).await
}

async fn respond(state: AppState, msg: Option<String>) -> Response {
    let Some(msg) = msg.filter(|m| !m.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, MISSING_MSG_BODY).into_response();
    };

    tracing::info!(msg = %msg, "user input");

    match state.service.answer(&msg).await {
        Ok(answer) => answer.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "query pipeline failed");
            (StatusCode::INTERNAL_SERVER_ERROR, PIPELINE_FAILURE_BODY).into_response()
        }
    }
}
