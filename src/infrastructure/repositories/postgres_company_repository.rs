use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::company::Company;
use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::repositories::CompanyRepository;
use crate::infrastructure::Database;

const COLUMNS: &str = "id, name, location, linkedin_profile, emails, phone_numbers, comments, \
     communication_periodicity, last_communications, next_communication, created_at";

/// PostgreSQL implementation of CompanyRepository
///
/// Each company is one row; contact lists and the communication history are
/// array columns so the row reads back as a single document.
#[derive(Clone)]
pub struct PostgresCompanyRepository {
    db: Database,
}

impl PostgresCompanyRepository {
    /// Creates a new PostgresCompanyRepository
    ///
    /// # Arguments
    /// * `db` - Shared store handle, possibly not connected yet
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn insert(&self, company: &Company) -> CrmResult<()> {
        sqlx::query(
            r#"
            INSERT INTO companies (
                id, name, location, linkedin_profile, emails, phone_numbers,
                comments, communication_periodicity, last_communications,
                next_communication, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.location)
        .bind(&company.linkedin_profile)
        .bind(&company.emails)
        .bind(&company.phone_numbers)
        .bind(&company.comments)
        .bind(&company.communication_periodicity)
        .bind(&company.last_communications)
        .bind(&company.next_communication)
        .bind(company.created_at)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to insert company: {}", e)))?;

        Ok(())
    }

    async fn find_all(&self) -> CrmResult<Vec<Company>> {
        let query = format!("SELECT {} FROM companies ORDER BY created_at, id", COLUMNS);
        sqlx::query_as::<_, Company>(&query)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to list companies: {}", e)))
    }

    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<Company>> {
        let query = format!("SELECT {} FROM companies WHERE id = $1", COLUMNS);
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to find company by id: {}", e)))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Company>> {
        let query = format!(
            "SELECT {} FROM companies WHERE id = ANY($1) ORDER BY created_at, id",
            COLUMNS
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(ids)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to find companies by ids: {}", e)))
    }

    async fn update(&self, company: &Company) -> CrmResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE companies SET
                name = $2,
                location = $3,
                linkedin_profile = $4,
                emails = $5,
                phone_numbers = $6,
                comments = $7,
                communication_periodicity = $8,
                last_communications = $9,
                next_communication = $10
            WHERE id = $1
            "#,
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.location)
        .bind(&company.linkedin_profile)
        .bind(&company.emails)
        .bind(&company.phone_numbers)
        .bind(&company.comments)
        .bind(&company.communication_periodicity)
        .bind(&company.last_communications)
        .bind(&company.next_communication)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to update company: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CrmError::NotFound("Company"));
        }

        Ok(())
    }

    async fn update_details(&self, company: &Company, include_next: bool) -> CrmResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE companies SET
                name = $2,
                location = $3,
                linkedin_profile = $4,
                emails = $5,
                phone_numbers = $6,
                comments = $7,
                communication_periodicity = $8,
                next_communication = CASE WHEN $9 THEN $10 ELSE next_communication END
            WHERE id = $1
            "#,
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.location)
        .bind(&company.linkedin_profile)
        .bind(&company.emails)
        .bind(&company.phone_numbers)
        .bind(&company.comments)
        .bind(&company.communication_periodicity)
        .bind(include_next)
        .bind(&company.next_communication)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| CrmError::store(format!("Failed to update company: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CrmError::NotFound("Company"));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<Company>> {
        let query = format!("DELETE FROM companies WHERE id = $1 RETURNING {}", COLUMNS);
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| CrmError::store(format!("Failed to delete company: {}", e)))
    }
}
