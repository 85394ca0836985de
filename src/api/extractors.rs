use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::errors::ApiError;

/// JSON body extractor that reports malformed input as a 400 `ApiError`
///
/// Usage:
/// ```rust,ignore
/// async fn handler(JsonBody(body): JsonBody<NewCompany>) -> Result<..., ApiError> { ... }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request("Invalid request body").with_detail(rejection.body_text())
        })?;

        Ok(JsonBody(value))
    }
}

/// `:id` path segment parsed as a UUID, rejecting malformed ids with 400
pub struct IdParam(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::bad_request("Invalid id").with_detail(rejection.body_text())
            })?;

        Ok(IdParam(id))
    }
}
