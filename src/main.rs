use clap::Parser;
use dotenvy::dotenv;
use studentdesk::cli::{self, Cli};
use studentdesk::config::AppConfig;
use studentdesk::logging::init_tracing;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    if let Err(e) = init_tracing(&config.log) {
        eprintln!("⚠️  Failed to initialize logging: {:#}. Continuing without it...", e);
    }

    if let Err(e) = cli::run(cli, config).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
