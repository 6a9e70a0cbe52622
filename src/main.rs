use clap::Parser;
use dotenv::dotenv;
use log::error;
use std::process::ExitCode;
use vasco_backend::cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match vasco_backend::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("FATAL ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
