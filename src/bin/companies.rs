use clap::Parser;

use companies_api::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    run(cli).await
}
