pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use super::{ CompletionOptions, LlmConfig, LlmError, Message };
use self::openai::OpenAIChatClient;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the ordered message list upstream and returns the generated text.
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions
    ) -> Result<String, LlmError>;

    fn get_base_url(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client = OpenAIChatClient::from_config(config)?;
    Ok(Arc::new(client))
}

/// A client paired with the settings every call through it uses.
#[derive(Clone)]
pub struct UpstreamProfile {
    pub client: Arc<dyn ChatClient>,
    pub options: CompletionOptions,
}

impl UpstreamProfile {
    pub fn new(client: Arc<dyn ChatClient>, options: CompletionOptions) -> Self {
        Self { client, options }
    }

    pub async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        self.client.complete(messages, &self.options).await
    }
}
