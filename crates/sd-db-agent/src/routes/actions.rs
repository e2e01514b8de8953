//! Action dispatch endpoint.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use chrono::Local;

use sd_protocol::payload;
use sd_protocol::{ActionRequest, ActionResponse, ResponseStatus, SupportAction};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::tools::ToolContext;

/// POST /api/v1/actions: run one support tool.
///
/// Business outcomes such as "Order not found" or a process flow error are
/// returned with status 200 and a `failed` response status; only unknown
/// actions, missing parameters and store failures are HTTP errors.
pub async fn run_action(
    State(state): State<AppState>,
    Json(req): Json<ActionRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let start = Instant::now();

    let action = SupportAction::parse(&req.action)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown action '{}'", req.action)))?;
    let tool = state
        .registry
        .get(action)
        .ok_or_else(|| ApiError::BadRequest(format!("no tool registered for '{action}'")))?;

    let ctx = ToolContext {
        store: state.store.as_ref(),
        scenarios: &state.scenarios,
        today: Local::now().date_naive(),
    };
    let result = tool.execute(&req.parameters, &ctx).await?;

    let status = if payload::error_of(&result).is_some() {
        ResponseStatus::Failed
    } else {
        ResponseStatus::Completed
    };
    let latency_ms = start.elapsed().as_millis() as u64;

    tracing::info!(action = %action, status = ?status, latency_ms, "action executed");

    Ok(Json(ActionResponse::new(action, status, result, latency_ms)))
}
