pub mod budget;
pub mod chat;

use crate::config::AppConfig;
use crate::llm::LlmError;
use crate::llm::chat::{ new_client as new_chat_client, UpstreamProfile };
use log::info;

pub use budget::{ strip_code_fences, BudgetError };
pub use chat::{ build_messages, ChatError, HISTORY_FOR_PROMPT_LEN };

/// Owns the two upstream profiles. Chat and budget calls never share credentials.
#[derive(Clone)]
pub struct TravelAgent {
    chat_upstream: UpstreamProfile,
    budget_upstream: UpstreamProfile,
}

impl TravelAgent {
    pub fn new(chat_upstream: UpstreamProfile, budget_upstream: UpstreamProfile) -> Self {
        Self { chat_upstream, budget_upstream }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let chat_client = new_chat_client(&config.chat.llm)?;
        info!(
            "Chat client configured: Model={}, MaxTokens={}, Temperature={:?}, BaseURL={}",
            config.chat.options.model,
            config.chat.options.max_tokens,
            config.chat.options.temperature,
            chat_client.get_base_url()
        );

        let budget_client = new_chat_client(&config.budget.llm)?;
        info!(
            "Budget client configured: Model={}, MaxTokens={}, Temperature={:?}, BaseURL={}",
            config.budget.options.model,
            config.budget.options.max_tokens,
            config.budget.options.temperature,
            budget_client.get_base_url()
        );

        Ok(Self::new(
            UpstreamProfile::new(chat_client, config.chat.options.clone()),
            UpstreamProfile::new(budget_client, config.budget.options.clone()),
        ))
    }
}
