//! Agent card discovery endpoint.

use axum::Json;
use axum::extract::State;

use sd_protocol::AgentCard;

use crate::card::agent_card;
use crate::state::AppState;

/// GET /.well-known/agent.json
pub async fn get_card(State(state): State<AppState>) -> Json<AgentCard> {
    Json(agent_card(&state.registry, &state.public_url))
}
