use clap::Parser;

#[derive(Parser)]
#[command(name = "companies-api")]
#[command(about = "Companies API server")]
#[command(version)]
struct Args {
    /// Serve from an in-memory store instead of PostgreSQL (data is lost on
    /// shutdown; useful for local runs without a database).
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = companies_api::config::config();
    tracing::info!("Starting Companies API in {:?} mode", config.environment);

    let args = Args::parse();
    companies_api::server::serve(args.memory).await
}
