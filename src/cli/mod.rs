use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Interface the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value = "3001")]
    pub port: u16,

    /// Serve HTTPS instead of plain HTTP (requires cert and key paths).
    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Path to the PEM certificate chain.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the PEM private key.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    // --- Token Args ---
    /// Secret used to sign and verify bearer tokens.
    #[arg(long, env = "JWT_SECRET", default_value = "")]
    pub jwt_secret: String,

    /// Lifetime of issued tokens, in seconds.
    #[arg(long, env = "TOKEN_TTL_SECS", default_value = "3600")]
    pub token_ttl_secs: i64,

    /// Subject embedded in every token issued by /api/login.
    #[arg(long, env = "DEMO_SUBJECT", default_value = "user123")]
    pub demo_subject: String,

    // --- Chat LLM Provider Args ---
    /// API key for the conversational assistant.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Base URL of the OpenAI-compatible API used for chat.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub chat_base_url: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-3.5-turbo")]
    pub chat_model: String,

    /// Maximum tokens generated per chat reply.
    #[arg(long, env = "CHAT_MAX_TOKENS", default_value = "300")]
    pub chat_max_tokens: u32,

    /// Sampling temperature for chat. Provider default when unset.
    #[arg(long, env = "CHAT_TEMPERATURE")]
    pub chat_temperature: Option<f32>,

    // --- Budget LLM Provider Args ---
    /// API key for budget estimation, billed separately from chat.
    #[arg(long, env = "OPENAI_BUDGET_API_KEY", default_value = "")]
    pub budget_api_key: String,

    /// Base URL for budget estimation (defaults to the chat base URL).
    #[arg(long, env = "OPENAI_BUDGET_BASE_URL")]
    pub budget_base_url: Option<String>,

    /// Model name for budget estimation.
    #[arg(long, env = "BUDGET_MODEL", default_value = "gpt-3.5-turbo")]
    pub budget_model: String,

    /// Maximum tokens generated per budget estimate.
    #[arg(long, env = "BUDGET_MAX_TOKENS", default_value = "2000")]
    pub budget_max_tokens: u32,

    /// Sampling temperature for budget estimation.
    #[arg(long, env = "BUDGET_TEMPERATURE", default_value = "0.1")]
    pub budget_temperature: f32,

    // --- Upstream Transport Args ---
    /// Whole-request timeout for upstream calls, in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "30")]
    pub upstream_timeout_secs: u64,

    /// Connection timeout for upstream calls, in seconds.
    #[arg(long, env = "UPSTREAM_CONNECT_TIMEOUT_SECS", default_value = "10")]
    pub upstream_connect_timeout_secs: u64,
}
