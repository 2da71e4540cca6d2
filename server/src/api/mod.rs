//! HTTP boundary of the relay
//!
//! Thin handlers binding the command store to the wire contract: a write
//! endpoint that decodes loosely and answers with the appended record, read
//! endpoints that snapshot the store, a bounded history query and a liveness
//! check. Decoding failures become a structured error response and leave the
//! store untouched; nothing here can take the process down.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};

use tankrelay_shared::payload;
use tankrelay_shared::{CommandRecord, CommandState, DEFAULT_HISTORY_LIMIT};

use crate::relay::CommandStore;

/// The operator-facing control pad, served at `/`.
const CONTROL_PAGE: &str = include_str!("control.html");

/// Build the relay router over the given store.
pub fn router(store: CommandStore) -> Router {
    Router::new()
        .route("/", get(control_page))
        .route("/api/tank_commands", get(current_command).post(submit_command))
        .route("/api/commands/latest", get(current_command))
        .route("/api/commands/history", get(command_history))
        .route("/health", get(health))
        .with_state(store)
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SubmitReply {
    Accepted {
        status: &'static str,
        message: &'static str,
        data: CommandRecord,
    },
    Rejected {
        status: &'static str,
        message: String,
    },
}

#[derive(Debug, Serialize)]
struct HistoryReply {
    status: &'static str,
    count: usize,
    commands: Vec<CommandRecord>,
}

#[derive(Debug, Serialize)]
struct HealthReply {
    status: &'static str,
    message: &'static str,
    commands_received: usize,
}

/// POST `/api/tank_commands` — accept a command write.
///
/// The body goes through the shared loose decoder; on failure the store is
/// left unmodified and the caller gets a 500 with the decode error message.
async fn submit_command(
    State(store): State<CommandStore>,
    body: Bytes,
) -> (StatusCode, Json<SubmitReply>) {
    match payload::decode(&body) {
        Ok(cmd) => {
            let record = store.submit(cmd.command, cmd.speedness).await;
            info!(
                command = %record.command,
                speedness = record.speedness,
                "command accepted"
            );
            (
                StatusCode::OK,
                Json(SubmitReply::Accepted {
                    status: "OK",
                    message: "command accepted",
                    data: record,
                }),
            )
        }
        Err(e) => {
            error!("rejected command submission: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitReply::Rejected {
                    status: "error",
                    message: e.to_string(),
                }),
            )
        }
    }
}

/// GET `/api/tank_commands` and `/api/commands/latest` — the actuator poll.
/// Always succeeds with the current state snapshot.
async fn current_command(State(store): State<CommandStore>) -> Json<CommandState> {
    let state = store.current().await;
    info!(command = %state.command, speedness = state.speedness, "command polled");
    Json(state)
}

/// GET `/api/commands/history?limit=N` — the N most recent records, oldest
/// first. An unparseable limit falls back to the default window.
async fn command_history(
    State(store): State<CommandStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<HistoryReply> {
    let limit = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    Json(HistoryReply {
        status: "OK",
        count: store.history_len().await,
        commands: store.recent(limit).await,
    })
}

/// GET `/health` — liveness plus the number of commands on record.
async fn health(State(store): State<CommandStore>) -> Json<HealthReply> {
    Json(HealthReply {
        status: "OK",
        message: "relay server operational",
        commands_received: store.history_len().await,
    })
}

/// GET `/` — the embedded control surface.
async fn control_page() -> Html<&'static str> {
    Html(CONTROL_PAGE)
}
