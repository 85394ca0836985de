use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::next_communication::NextCommunication;
use crate::domain::repositories::NextCommunicationRepository;
use crate::infrastructure::Database;

const COLUMNS: &str =
    "id, company_id, communication_type, scheduled_date, is_completed, created_at";

/// PostgreSQL implementation of NextCommunicationRepository
#[derive(Clone)]
pub struct PostgresNextCommunicationRepository {
    db: Database,
}

impl PostgresNextCommunicationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NextCommunicationRepository for PostgresNextCommunicationRepository {
    async fn insert(&self, next: &NextCommunication) -> CrmResult<()> {
        sqlx::query(
            r#"
            INSERT INTO next_communications (
                id, company_id, communication_type, scheduled_date, is_completed, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(next.id)
        .bind(next.company_id)
        .bind(&next.communication_type)
        .bind(&next.scheduled_date)
        .bind(next.is_completed)
        .bind(next.created_at)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to insert next communication: {}", e)))?;

        Ok(())
    }

    async fn find_active(&self, company_id: Option<Uuid>) -> CrmResult<Vec<NextCommunication>> {
        // NULL company filter matches every company
        let query = format!(
            r#"
            SELECT {} FROM next_communications
            WHERE is_completed = FALSE
              AND ($1::uuid IS NULL OR company_id = $1)
            ORDER BY created_at, id
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, NextCommunication>(&query)
            .bind(company_id)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| {
                CrmError::store(format!("Failed to list active next communications: {}", e))
            })
    }

    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<NextCommunication>> {
        let query = format!("SELECT {} FROM next_communications WHERE id = $1", COLUMNS);
        sqlx::query_as::<_, NextCommunication>(&query)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to find next communication: {}", e)))
    }

    async fn update(&self, next: &NextCommunication) -> CrmResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE next_communications SET
                company_id = $2,
                communication_type = $3,
                scheduled_date = $4,
                is_completed = $5
            WHERE id = $1
            "#,
        )
        .bind(next.id)
        .bind(next.company_id)
        .bind(&next.communication_type)
        .bind(&next.scheduled_date)
        .bind(next.is_completed)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to update next communication: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CrmError::NotFound("Next communication"));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<NextCommunication>> {
        let query = format!(
            "DELETE FROM next_communications WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        sqlx::query_as::<_, NextCommunication>(&query)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to delete next communication: {}", e)))
    }
}
