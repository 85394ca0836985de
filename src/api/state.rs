use std::sync::Arc;

use crate::domain::repositories::{
    CommunicationRepository, CompanyRepository, NextCommunicationRepository,
};
use crate::infrastructure::repositories::{
    PostgresCommunicationRepository, PostgresCompanyRepository,
    PostgresNextCommunicationRepository,
};
use crate::infrastructure::Database;

/// Shared handler state: one repository per collection
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyRepository>,
    pub communications: Arc<dyn CommunicationRepository>,
    pub next_communications: Arc<dyn NextCommunicationRepository>,
}

impl AppState {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        communications: Arc<dyn CommunicationRepository>,
        next_communications: Arc<dyn NextCommunicationRepository>,
    ) -> Self {
        Self {
            companies,
            communications,
            next_communications,
        }
    }

    /// Postgres-backed state over a shared (possibly still connecting) handle
    pub fn postgres(db: Database) -> Self {
        Self::new(
            Arc::new(PostgresCompanyRepository::new(db.clone())),
            Arc::new(PostgresCommunicationRepository::new(db.clone())),
            Arc::new(PostgresNextCommunicationRepository::new(db)),
        )
    }
}
