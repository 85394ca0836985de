use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::communication::Communication;
use crate::domain::errors::CrmResult;

/// Repository trait for the communications collection
#[async_trait]
pub trait CommunicationRepository: Send + Sync {
    /// Insert a new communication
    async fn insert(&self, communication: &Communication) -> CrmResult<()>;

    /// Find every communication, oldest first
    async fn find_all(&self) -> CrmResult<Vec<Communication>>;

    /// Find the communications whose IDs are listed; missing IDs are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Communication>>;

    /// Delete a communication by ID, returning the removed document
    async fn delete(&self, id: Uuid) -> CrmResult<Option<Communication>>;
}
