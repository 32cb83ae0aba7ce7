use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

use samaysetu::cli::{Cli, ConsoleNavigator, run};
use samaysetu::logging::init_tracing;
use samaysetu::state::init_app_state;
use samaysetu_config::LogConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_tracing(&LogConfig::from_env()) {
        eprintln!("⚠️  Failed to initialize logging: {}. Continuing without log files...", e);
    }

    let state = match init_app_state(Arc::new(ConsoleNavigator)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("\n❌ Error starting client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &state).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}
