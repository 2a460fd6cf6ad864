use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::models::{Company, CompanyInput};
use crate::database::store::{CompanyStore, StoreError};

/// In-memory Record Store for tests and `--memory` runs.
///
/// Records are held in insertion order; listing reverses it, which matches
/// the created-at-descending contract without depending on timestamp
/// resolution when several records land in the same instant.
#[derive(Default)]
pub struct MemoryCompanyStore {
    companies: RwLock<Vec<Company>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn list(&self) -> Result<Vec<Company>, StoreError> {
        let companies = self.companies.read().await;
        Ok(companies.iter().rev().cloned().collect())
    }

    async fn create(&self, input: CompanyInput) -> Result<Company, StoreError> {
        let company = Company {
            id: Company::generate_id(),
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        };

        let mut companies = self.companies.write().await;
        companies.push(company.clone());
        Ok(company)
    }

    async fn update(&self, id: &str, input: CompanyInput) -> Result<Company, StoreError> {
        let mut companies = self.companies.write().await;
        let company = companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        company.name = input.name;
        company.description = input.description;
        Ok(company.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut companies = self.companies.write().await;
        let before = companies.len();
        companies.retain(|c| c.id != id);

        if companies.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
