//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    common::time::timestamp_to_rfc3339, infrastructure::dto::http::RoomSummaryDto,
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List every room the registry has ever created, with current members.
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let mut summaries = Vec::new();
    for room in state.registry.rooms().await {
        let mut members = room.member_names().await;
        members.sort();
        summaries.push(RoomSummaryDto {
            name: room.name().as_str().to_string(),
            members,
            created_at: timestamp_to_rfc3339(room.created_at()),
        });
    }
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    Json(summaries)
}
