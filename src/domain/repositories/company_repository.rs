use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::company::Company;
use crate::domain::errors::CrmResult;

/// Repository trait for the companies collection
///
/// Implementations own connectivity concerns and report them as
/// `CrmError::Store`.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company
    async fn insert(&self, company: &Company) -> CrmResult<()>;

    /// Find every company, oldest first
    async fn find_all(&self) -> CrmResult<Vec<Company>>;

    /// Find a company by its ID
    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<Company>>;

    /// Find the companies whose IDs are listed; missing IDs are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Company>>;

    /// Replace a stored company. Fails with `NotFound` if it no longer exists.
    async fn update(&self, company: &Company) -> CrmResult<()>;

    /// Write the editable fields of a company, leaving `last_communications`
    /// as stored. `next_communication` is written only when `include_next`
    /// is set, so an untouched value is not clobbered by a stale read.
    /// Fails with `NotFound` if the company no longer exists.
    async fn update_details(&self, company: &Company, include_next: bool) -> CrmResult<()>;

    /// Delete a company by ID, returning the removed document
    async fn delete(&self, id: Uuid) -> CrmResult<Option<Company>>;
}
