pub mod agent;
pub mod auth;
pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;

use agent::TravelAgent;
use auth::TokenService;
use cli::Args;
use config::AppConfig;
use log::info;
use server::api::AppState;
use server::Server;
use std::error::Error;

fn set_or_not(value: &str) -> &'static str {
    if value.trim().is_empty() { "Not set" } else { "Set" }
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Listen Address: {}:{}", args.host, args.port);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("JWT_SECRET: {}", set_or_not(&args.jwt_secret));
    info!("OPENAI_API_KEY: {}", set_or_not(&args.chat_api_key));
    info!("OPENAI_BUDGET_API_KEY: {}", set_or_not(&args.budget_api_key));
    info!("Token TTL: {}s", args.token_ttl_secs);
    info!("Upstream Timeout: {}s", args.upstream_timeout_secs);
    info!("-------------------------");

    let config = AppConfig::from_args(&args)?;
    let agent = TravelAgent::from_config(&config)?;
    let tokens = TokenService::new(&config.token.secret, config.token.ttl);
    let state = AppState::new(agent, tokens, &config.token.demo_subject);

    let server = Server::new(config, state);
    server.run().await?;

    Ok(())
}
