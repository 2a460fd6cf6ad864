use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Company, CompanyInput};
use crate::database::store::{CompanyStore, StoreError};

/// Record Store backed by the `companies` table in PostgreSQL.
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using the shared pool from DatabaseManager and run pending
    /// migrations.
    pub async fn connect() -> Result<Self, StoreError> {
        let pool = DatabaseManager::pool().await?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Sqlx(e.into()))?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn list(&self) -> Result<Vec<Company>, StoreError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, description, created_at FROM companies ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    async fn create(&self, input: CompanyInput) -> Result<Company, StoreError> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (id, name, description) VALUES ($1, $2, $3) \
             RETURNING id, name, description, created_at",
        )
        .bind(Company::generate_id())
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    async fn update(&self, id: &str, input: CompanyInput) -> Result<Company, StoreError> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $2, description = $3 WHERE id = $1 \
             RETURNING id, name, description, created_at",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        company.ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
