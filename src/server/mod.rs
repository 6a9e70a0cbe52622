pub mod api;
pub mod auth;
pub mod error;

use crate::config::AppConfig;
use api::AppState;
use std::error::Error;

pub struct Server {
    config: AppConfig,
    state: AppState,
}

impl Server {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(
            self.config.listen_addr,
            self.config.tls.clone(),
            self.state.clone(),
        ).await
    }
}
