use thiserror::Error;

/// Errors surfaced by the domain and persistence layers
#[derive(Debug, Error)]
pub enum CrmError {
    /// An id-based lookup found nothing. Carries the entity kind, e.g. "Company".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A document failed required-field or format validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Connectivity or unexpected persistence failure
    #[error("Store error: {0}")]
    Store(String),
}

impl CrmError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store(detail.into())
    }
}

impl From<sqlx::Error> for CrmError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}

pub type CrmResult<T> = Result<T, CrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(CrmError::NotFound("Company").to_string(), "Company not found");
    }

    #[test]
    fn sqlx_errors_become_store_errors() {
        let err: CrmError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, CrmError::Store(_)));
    }
}
