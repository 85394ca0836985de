use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::CrmResult;
use crate::domain::next_communication::NextCommunication;

/// Repository trait for scheduled next communications
#[async_trait]
pub trait NextCommunicationRepository: Send + Sync {
    /// Insert a new record
    async fn insert(&self, next: &NextCommunication) -> CrmResult<()>;

    /// Find records with `is_completed == false`, optionally for one company
    async fn find_active(&self, company_id: Option<Uuid>) -> CrmResult<Vec<NextCommunication>>;

    /// Find a record by its ID
    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<NextCommunication>>;

    /// Replace a stored record. Fails with `NotFound` if it no longer exists.
    async fn update(&self, next: &NextCommunication) -> CrmResult<()>;

    /// Delete a record by ID, returning the removed document
    async fn delete(&self, id: Uuid) -> CrmResult<Option<NextCommunication>>;
}
