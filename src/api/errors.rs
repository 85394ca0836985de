use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::CrmError;

/// API error type with HTTP status code, message and optional raw detail
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches the underlying error detail reported under `error`
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a domain error onto a status, using `context` as the message
    ///
    /// - `NotFound` => 404 naming the missing entity kind
    /// - `Validation` => 400
    /// - `Store` => 500
    pub fn from_crm(context: &str, err: CrmError) -> Self {
        match err {
            CrmError::NotFound(kind) => Self::not_found(format!("{} not found", kind)),
            CrmError::Validation(detail) => Self::bad_request(context).with_detail(detail),
            CrmError::Store(detail) => {
                tracing::error!(error = %detail, "{}", context);
                Self::internal_server_error(context).with_detail(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => json!({ "message": self.message, "error": detail }),
            None => json!({ "message": self.message }),
        };

        (self.status, Json(body)).into_response()
    }
}

/// Attaches an HTTP-facing context message to domain results
pub trait ApiContext<T> {
    fn context(self, message: &str) -> Result<T, ApiError>;
}

impl<T> ApiContext<T> for Result<T, CrmError> {
    fn context(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_crm(message, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_entity_without_detail() {
        let (status, json) =
            body_json(ApiError::from_crm("Error fetching company", CrmError::NotFound("Company")))
                .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Company not found");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request_with_detail() {
        let (status, json) = body_json(ApiError::from_crm(
            "Error adding company",
            CrmError::validation("name is required"),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Error adding company");
        assert_eq!(json["error"], "name is required");
    }

    #[tokio::test]
    async fn store_maps_to_internal_error() {
        let (status, json) = body_json(ApiError::from_crm(
            "Error fetching companies",
            CrmError::store("database not connected"),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "database not connected");
    }

    #[test]
    fn context_passes_ok_through() {
        let ok: Result<u8, CrmError> = Ok(7);
        assert_eq!(ok.context("unused").unwrap(), 7);
    }
}
