pub mod api;
pub mod view;

pub use api::{ClientError, CompaniesClient, CompanyApi};
pub use view::{CompaniesView, Notice, NoticeKind};
