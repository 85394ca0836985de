use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::errors::{ApiContext, ApiError};
use crate::api::extractors::{IdParam, JsonBody};
use crate::api::state::AppState;
use crate::domain::company::{Company, CompanyUpdate, NewCompany};
use crate::domain::services::{populate_companies, populate_company, PopulatedCompany};

/// Response from company creation
#[derive(Debug, Serialize)]
pub struct CompanyCreatedResponse {
    pub message: String,
    pub company: Company,
}

/// Response from a company update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdatedResponse {
    pub message: String,
    pub updated_company: Company,
}

/// Response from a company deletion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDeletedResponse {
    pub message: String,
    pub deleted_company: Company,
}

/// List every company with its communication history
///
/// GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PopulatedCompany>>, ApiError> {
    const CONTEXT: &str = "Error fetching companies";

    let companies = state.companies.find_all().await.context(CONTEXT)?;
    let populated = populate_companies(state.communications.as_ref(), companies)
        .await
        .context(CONTEXT)?;

    Ok(Json(populated))
}

/// Get a company by ID with its communication history
///
/// GET /api/companies/:id
pub async fn get_company(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<PopulatedCompany>, ApiError> {
    const CONTEXT: &str = "Error fetching company";

    let company = state
        .companies
        .find_by_id(id)
        .await
        .context(CONTEXT)?
        .ok_or_else(|| ApiError::not_found("Company not found"))?;

    let populated = populate_company(state.communications.as_ref(), company)
        .await
        .context(CONTEXT)?;

    Ok(Json(populated))
}

/// Create a new company
///
/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewCompany>,
) -> Result<(StatusCode, Json<CompanyCreatedResponse>), ApiError> {
    const CONTEXT: &str = "Error adding company";

    let company = Company::new(req).context(CONTEXT)?;
    state.companies.insert(&company).await.context(CONTEXT)?;

    tracing::info!(company_id = %company.id, "Company created");

    Ok((
        StatusCode::CREATED,
        Json(CompanyCreatedResponse {
            message: "Company added successfully".to_string(),
            company,
        }),
    ))
}

/// Update a company, re-validating the merged document
///
/// The communication history is never written here; only logging appends to it.
///
/// PUT /api/companies/:id
pub async fn update_company(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(req): JsonBody<CompanyUpdate>,
) -> Result<Json<CompanyUpdatedResponse>, ApiError> {
    const CONTEXT: &str = "Error updating company";

    let mut company = state
        .companies
        .find_by_id(id)
        .await
        .context(CONTEXT)?
        .ok_or_else(|| ApiError::not_found("Company not found"))?;

    let include_next = req.next_communication.is_some();
    company.apply(req).context(CONTEXT)?;
    state
        .companies
        .update_details(&company, include_next)
        .await
        .context(CONTEXT)?;

    // Re-read so history appended since the first read is reported
    let updated_company = state
        .companies
        .find_by_id(id)
        .await
        .context(CONTEXT)?
        .ok_or_else(|| ApiError::not_found("Company not found"))?;

    Ok(Json(CompanyUpdatedResponse {
        message: "Company updated successfully".to_string(),
        updated_company,
    }))
}

/// Delete a company; its communications are left in place
///
/// DELETE /api/companies/:id
pub async fn delete_company(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<CompanyDeletedResponse>, ApiError> {
    let deleted_company = state
        .companies
        .delete(id)
        .await
        .context("Error deleting company")?
        .ok_or_else(|| ApiError::not_found("Company not found"))?;

    Ok(Json(CompanyDeletedResponse {
        message: "Company deleted successfully".to_string(),
        deleted_company,
    }))
}
