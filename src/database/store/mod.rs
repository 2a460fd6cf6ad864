pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::database::manager::DatabaseError;
use crate::database::models::{Company, CompanyInput};

pub use memory::MemoryCompanyStore;
pub use postgres::PgCompanyStore;

/// Errors from Record Store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// The Record Store seam: create/read/update/delete-by-id primitives over
/// the companies table. Handlers depend on this trait only, so tests can
/// swap in the in-memory implementation.
///
/// No operation coordinates with another; concurrent updates to the same id
/// are last-write-wins at whatever serialization the backing store provides.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// All companies, newest first.
    async fn list(&self) -> Result<Vec<Company>, StoreError>;

    /// Persist a new company, generating its id and creation timestamp.
    async fn create(&self, input: CompanyInput) -> Result<Company, StoreError>;

    /// Replace name/description of an existing company.
    async fn update(&self, id: &str, input: CompanyInput) -> Result<Company, StoreError>;

    /// Remove a company by id. `NotFound` when the id does not exist.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
