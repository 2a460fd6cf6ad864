pub mod manager;
pub mod models;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{Company, CompanyInput};
pub use store::{CompanyStore, MemoryCompanyStore, PgCompanyStore, StoreError};
