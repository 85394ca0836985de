use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::errors::{ApiContext, ApiError};
use crate::api::extractors::{IdParam, JsonBody};
use crate::api::state::AppState;
use crate::domain::communication::{Communication, NewCommunication};
use crate::domain::services::{
    self, populate_communications, populate_company, PopulatedCommunication, PopulatedCompany,
};

/// Response from logging a communication
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationLoggedResponse {
    pub message: String,
    pub updated_company: PopulatedCompany,
}

/// Response from a communication deletion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationDeletedResponse {
    pub message: String,
    pub deleted_communication: Communication,
}

/// List every communication with its owning company
///
/// GET /api/communications
pub async fn list_communications(
    State(state): State<AppState>,
) -> Result<Json<Vec<PopulatedCommunication>>, ApiError> {
    const CONTEXT: &str = "Error fetching communications";

    let communications = state.communications.find_all().await.context(CONTEXT)?;
    let populated = populate_communications(state.companies.as_ref(), communications)
        .await
        .context(CONTEXT)?;

    Ok(Json(populated))
}

/// Log a communication and update the company's history
///
/// POST /api/communications
pub async fn log_communication(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewCommunication>,
) -> Result<(StatusCode, Json<CommunicationLoggedResponse>), ApiError> {
    const CONTEXT: &str = "Error logging communication";

    let logged = services::log_communication(
        state.companies.as_ref(),
        state.communications.as_ref(),
        req,
    )
    .await
    .context(CONTEXT)?;

    let updated_company = populate_company(state.communications.as_ref(), logged.company)
        .await
        .context(CONTEXT)?;

    Ok((
        StatusCode::CREATED,
        Json(CommunicationLoggedResponse {
            message: "Communication logged successfully".to_string(),
            updated_company,
        }),
    ))
}

/// Delete a communication. Company histories keep the dangling id.
///
/// DELETE /api/communications/:id
pub async fn delete_communication(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<CommunicationDeletedResponse>, ApiError> {
    let deleted_communication = state
        .communications
        .delete(id)
        .await
        .context("Error deleting communication")?
        .ok_or_else(|| ApiError::not_found("Communication not found"))?;

    Ok(Json(CommunicationDeletedResponse {
        message: "Communication deleted successfully".to_string(),
        deleted_communication,
    }))
}
