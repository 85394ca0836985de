use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::communication::Communication;
use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::repositories::CommunicationRepository;
use crate::infrastructure::Database;

const COLUMNS: &str =
    "id, company_id, communication_type, communication_date, notes, next_communication, created_at";

/// PostgreSQL implementation of CommunicationRepository
#[derive(Clone)]
pub struct PostgresCommunicationRepository {
    db: Database,
}

impl PostgresCommunicationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommunicationRepository for PostgresCommunicationRepository {
    async fn insert(&self, communication: &Communication) -> CrmResult<()> {
        sqlx::query(
            r#"
            INSERT INTO communications (
                id, company_id, communication_type, communication_date,
                notes, next_communication, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(communication.id)
        .bind(communication.company_id)
        .bind(&communication.communication_type)
        .bind(&communication.communication_date)
        .bind(&communication.notes)
        .bind(&communication.next_communication)
        .bind(communication.created_at)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to insert communication: {}", e)))?;

        Ok(())
    }

    async fn find_all(&self) -> CrmResult<Vec<Communication>> {
        let query = format!("SELECT {} FROM communications ORDER BY created_at, id", COLUMNS);
        sqlx::query_as::<_, Communication>(&query)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to list communications: {}", e)))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Communication>> {
        let query = format!(
            "SELECT {} FROM communications WHERE id = ANY($1) ORDER BY created_at, id",
            COLUMNS
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(ids)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to find communications by ids: {}", e)))
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<Communication>> {
        let query = format!("DELETE FROM communications WHERE id = $1 RETURNING {}", COLUMNS);
        sqlx::query_as::<_, Communication>(&query)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to delete communication: {}", e)))
    }
}
