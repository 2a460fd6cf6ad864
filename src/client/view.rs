use std::sync::Arc;

use crate::client::api::CompanyApi;
use crate::database::models::{Company, CompanyInput};

/// Transient notification posted after each user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Client-side session state for the companies page: a local cache of
/// records keyed by id, the form fields, and the editing/adding flags.
///
/// The cache is reconciled only by the response of the operation that
/// triggered the change; there is no refresh or revalidation after the
/// initial load. Editing and adding are mutually exclusive: entering one
/// clears the other.
pub struct CompaniesView {
    api: Arc<dyn CompanyApi>,
    companies: Vec<Company>,
    name: String,
    description: String,
    editing_company: Option<String>,
    is_adding_new: bool,
    notice: Option<Notice>,
}

impl CompaniesView {
    pub fn new(api: Arc<dyn CompanyApi>) -> Self {
        Self {
            api,
            companies: Vec::new(),
            name: String::new(),
            description: String::new(),
            editing_company: None,
            is_adding_new: false,
            notice: None,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn editing_company(&self) -> Option<&str> {
        self.editing_company.as_deref()
    }

    pub fn is_adding_new(&self) -> bool {
        self.is_adding_new
    }

    /// Consume the notice from the last action, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Initial load. On failure the list stays empty and an error notice is
    /// posted; nothing is retried.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(companies) => {
                self.companies = companies;
            }
            Err(e) => {
                tracing::debug!("company list failed: {}", e);
                self.notice = Some(Notice::error("Failed to fetch companies"));
            }
        }
    }

    /// Expand the create form, dropping any in-progress edit.
    pub fn open_add_form(&mut self) {
        self.clear_form();
        self.is_adding_new = true;
    }

    /// Populate the form from a cached record and mark it as being edited.
    /// Unknown ids are ignored.
    pub fn edit(&mut self, id: &str) {
        let Some(company) = self.companies.iter().find(|c| c.id == id) else {
            return;
        };

        self.name = company.name.clone();
        self.description = company.description.clone().unwrap_or_default();
        self.editing_company = Some(company.id.clone());
        self.is_adding_new = false;
    }

    /// Drop form and editing/adding state without any network call.
    pub fn cancel(&mut self) {
        self.clear_form();
    }

    /// Submit the form: update when a record is being edited, create
    /// otherwise. On failure the form (and editing state) stays as typed.
    pub async fn submit(&mut self) {
        let input = self.form_input();

        match self.editing_company.clone() {
            Some(id) => match self.api.update(&id, &input).await {
                Ok(updated) => {
                    if let Some(existing) = self.companies.iter_mut().find(|c| c.id == updated.id) {
                        *existing = updated;
                    }
                    self.clear_form();
                    self.notice = Some(Notice::success("Company updated successfully"));
                }
                Err(e) => {
                    tracing::debug!("company update failed: {}", e);
                    self.notice = Some(Notice::error("Failed to update company"));
                }
            },
            None => match self.api.create(&input).await {
                Ok(created) => {
                    self.companies.push(created);
                    self.clear_form();
                    self.notice = Some(Notice::success("Company created successfully"));
                }
                Err(e) => {
                    tracing::debug!("company create failed: {}", e);
                    self.notice = Some(Notice::error("Failed to create company"));
                }
            },
        }
    }

    /// Delete a record by id; on success it is removed from the cache, on
    /// failure it stays in place.
    pub async fn delete(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.companies.retain(|c| c.id != id);
                self.notice = Some(Notice::success("Company deleted successfully"));
            }
            Err(e) => {
                tracing::debug!("company delete failed: {}", e);
                self.notice = Some(Notice::error("Failed to delete company"));
            }
        }
    }

    /// An empty description textarea means "no description", sent as null.
    fn form_input(&self) -> CompanyInput {
        CompanyInput {
            name: self.name.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.description.clear();
        self.editing_company = None;
        self.is_adding_new = false;
    }
}
