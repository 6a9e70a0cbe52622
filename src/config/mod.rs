pub mod prompt;

use crate::cli::Args;
use crate::llm::{ CompletionOptions, LlmConfig };
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),
    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{0}")]
    Tls(String),
}

#[derive(Debug, Clone)]
pub struct TlsPaths {
    pub cert_path: String,
    pub key_path: String,
}

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl: chrono::Duration,
    pub demo_subject: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub llm: LlmConfig,
    pub options: CompletionOptions,
}

/// Everything the process needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub tls: Option<TlsPaths>,
    pub token: TokenConfig,
    pub chat: UpstreamConfig,
    pub budget: UpstreamConfig,
}

fn required(value: &str, name: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::MissingCredential(name))
    } else {
        Ok(value.to_string())
    }
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let secret = required(&args.jwt_secret, "JWT_SECRET")?;
        let chat_api_key = required(&args.chat_api_key, "OPENAI_API_KEY")?;
        let budget_api_key = required(&args.budget_api_key, "OPENAI_BUDGET_API_KEY")?;

        let addr = format!("{}:{}", args.host, args.port);
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddress { addr: addr.clone(), source })?;

        let tls = if args.enable_tls {
            match (&args.tls_cert_path, &args.tls_key_path) {
                (Some(cert_path), Some(key_path)) => Some(TlsPaths {
                    cert_path: cert_path.clone(),
                    key_path: key_path.clone(),
                }),
                _ => {
                    return Err(ConfigError::Tls(
                        "Both --tls-cert-path and --tls-key-path must be provided to enable TLS."
                            .to_string(),
                    ));
                }
            }
        } else {
            None
        };

        let timeout = Duration::from_secs(args.upstream_timeout_secs);
        let connect_timeout = Duration::from_secs(args.upstream_connect_timeout_secs);

        let chat = UpstreamConfig {
            llm: LlmConfig {
                api_key: chat_api_key,
                base_url: args.chat_base_url.clone(),
                timeout,
                connect_timeout,
            },
            options: CompletionOptions {
                model: args.chat_model.clone(),
                max_tokens: args.chat_max_tokens,
                temperature: args.chat_temperature,
            },
        };

        let budget = UpstreamConfig {
            llm: LlmConfig {
                api_key: budget_api_key,
                base_url: args.budget_base_url.clone().unwrap_or_else(|| args.chat_base_url.clone()),
                timeout,
                connect_timeout,
            },
            options: CompletionOptions {
                model: args.budget_model.clone(),
                max_tokens: args.budget_max_tokens,
                temperature: Some(args.budget_temperature),
            },
        };

        Ok(Self {
            listen_addr,
            tls,
            token: TokenConfig {
                secret,
                ttl: chrono::Duration::seconds(args.token_ttl_secs),
                demo_subject: args.demo_subject.clone(),
            },
            chat,
            budget,
        })
    }
}
