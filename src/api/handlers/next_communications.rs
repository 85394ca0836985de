use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::errors::{ApiContext, ApiError};
use crate::api::extractors::{IdParam, JsonBody};
use crate::api::state::AppState;
use crate::domain::next_communication::{
    NewNextCommunication, NextCommunication, NextCommunicationUpdate,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Schedule a next communication
///
/// POST /api/next-communications
pub async fn create_next_communication(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewNextCommunication>,
) -> Result<(StatusCode, Json<NextCommunication>), ApiError> {
    const CONTEXT: &str = "Error creating next communication";

    let next = NextCommunication::new(req).context(CONTEXT)?;
    state
        .next_communications
        .insert(&next)
        .await
        .context(CONTEXT)?;

    Ok((StatusCode::CREATED, Json(next)))
}

/// List all active (not completed) next communications
///
/// GET /api/next-communications
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<NextCommunication>>, ApiError> {
    let schedules = state
        .next_communications
        .find_active(None)
        .await
        .context("Error fetching schedules")?;

    Ok(Json(schedules))
}

/// List active next communications for one company
///
/// GET /api/next-communications/:companyId
pub async fn list_active_for_company(
    State(state): State<AppState>,
    IdParam(company_id): IdParam,
) -> Result<Json<Vec<NextCommunication>>, ApiError> {
    let schedules = state
        .next_communications
        .find_active(Some(company_id))
        .await
        .context("Error fetching next communications")?;

    Ok(Json(schedules))
}

/// Patch a next communication; this is the only way to complete one
///
/// PUT /api/next-communications/:id
pub async fn update_next_communication(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(req): JsonBody<NextCommunicationUpdate>,
) -> Result<Json<NextCommunication>, ApiError> {
    const CONTEXT: &str = "Error updating next communication";

    let mut next = state
        .next_communications
        .find_by_id(id)
        .await
        .context(CONTEXT)?
        .ok_or_else(|| ApiError::not_found("Next communication not found"))?;

    next.apply(req).context(CONTEXT)?;
    state
        .next_communications
        .update(&next)
        .await
        .context(CONTEXT)?;

    Ok(Json(next))
}

/// Cancel (hard delete) a next communication
///
/// DELETE /api/next-communications/:id
pub async fn cancel_next_communication(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .next_communications
        .delete(id)
        .await
        .context("Error cancelling next communication")?
        .ok_or_else(|| ApiError::not_found("Next communication not found"))?;

    Ok(Json(MessageResponse {
        message: "Next communication cancelled successfully".to_string(),
    }))
}
