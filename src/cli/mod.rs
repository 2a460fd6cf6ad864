pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "companies")]
#[command(about = "Companies CLI - form-driven client for the Companies API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Server base URL (default: COMPANIES_API_URL env or http://127.0.0.1:3000)"
    )]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List all companies, newest first")]
    List,

    #[command(about = "Create a company")]
    Create {
        #[arg(help = "Company name")]
        name: String,
        #[arg(long, short, help = "Optional description")]
        description: Option<String>,
    },

    #[command(about = "Update a company's name and description")]
    Update {
        #[arg(help = "Company id")]
        id: String,
        #[arg(help = "New company name")]
        name: String,
        #[arg(long, short, help = "New description (omit to clear)")]
        description: Option<String>,
    },

    #[command(about = "Delete a company by id")]
    Delete {
        #[arg(help = "Company id")]
        id: String,
    },

    #[command(about = "Probe the server's health endpoint")]
    Health,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn server_url(cli: &Cli) -> String {
    cli.server
        .clone()
        .or_else(|| std::env::var("COMPANIES_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string())
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let server = server_url(&cli);

    match cli.command {
        Commands::List => commands::companies::list(&server, output_format).await,
        Commands::Create { name, description } => {
            commands::companies::create(&server, name, description, output_format).await
        }
        Commands::Update {
            id,
            name,
            description,
        } => commands::companies::update(&server, id, name, description, output_format).await,
        Commands::Delete { id } => commands::companies::delete(&server, id, output_format).await,
        Commands::Health => commands::companies::health(&server, output_format).await,
    }
}
