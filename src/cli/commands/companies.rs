use std::sync::Arc;

use anyhow::{bail, Result};

use crate::cli::OutputFormat;
use crate::client::{CompaniesClient, CompaniesView, NoticeKind};
use crate::database::models::Company;

fn view_for(server: &str) -> CompaniesView {
    CompaniesView::new(Arc::new(CompaniesClient::new(server)))
}

/// Drain the view's notice: print it, fail the command on errors.
fn report(view: &mut CompaniesView) -> Result<()> {
    if let Some(notice) = view.take_notice() {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Error => bail!(notice.message),
        }
    }
    Ok(())
}

fn print_companies(companies: &[Company], output_format: OutputFormat) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(companies)?),
        OutputFormat::Text => {
            if companies.is_empty() {
                println!("No companies.");
            }
            for company in companies {
                match &company.description {
                    Some(description) => {
                        println!("{}  {} - {}", company.id, company.name, description)
                    }
                    None => println!("{}  {}", company.id, company.name),
                }
            }
        }
    }
    Ok(())
}

pub async fn list(server: &str, output_format: OutputFormat) -> Result<()> {
    let mut view = view_for(server);
    view.load().await;
    report(&mut view)?;
    print_companies(view.companies(), output_format)
}

pub async fn create(
    server: &str,
    name: String,
    description: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut view = view_for(server);
    view.open_add_form();
    view.set_name(name);
    if let Some(description) = description {
        view.set_description(description);
    }
    view.submit().await;

    let created = view.companies().last().cloned();
    report(&mut view)?;
    if let (Some(company), OutputFormat::Json) = (&created, output_format) {
        println!("{}", serde_json::to_string_pretty(company)?);
    }
    Ok(())
}

pub async fn update(
    server: &str,
    id: String,
    name: String,
    description: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut view = view_for(server);
    view.load().await;
    report(&mut view)?;

    view.edit(&id);
    if view.editing_company().is_none() {
        bail!("Failed to update company");
    }
    view.set_name(name);
    view.set_description(description.unwrap_or_default());
    view.submit().await;

    let updated = view.companies().iter().find(|c| c.id == id).cloned();
    report(&mut view)?;
    if let (Some(company), OutputFormat::Json) = (&updated, output_format) {
        println!("{}", serde_json::to_string_pretty(company)?);
    }
    Ok(())
}

pub async fn delete(server: &str, id: String, _output_format: OutputFormat) -> Result<()> {
    let mut view = view_for(server);
    view.load().await;
    report(&mut view)?;

    view.delete(&id).await;
    report(&mut view)
}

pub async fn health(server: &str, output_format: OutputFormat) -> Result<()> {
    let client = CompaniesClient::new(server);
    let status = client.health().await?;
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Text => println!(
            "Server {} is {}",
            client.base_url(),
            status.get("status").and_then(|s| s.as_str()).unwrap_or("unknown")
        ),
    }
    Ok(())
}
