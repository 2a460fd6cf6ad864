pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::company_create;
pub use delete::company_delete;
pub use list::company_list;
pub use update::company_update;
