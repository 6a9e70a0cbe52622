use super::TravelAgent;
use crate::config::prompt::CHAT_SYSTEM_PROMPT;
use crate::llm::{ LlmError, Message };
use log::{ debug, info };

/// Three user/assistant exchanges.
pub const HISTORY_FOR_PROMPT_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat completion failed: {0}")]
    Upstream(#[from] LlmError),
}

/// System persona, then the most recent history entries in their original
/// order, then the new user message.
pub fn build_messages(history: &[Message], message: &str) -> Vec<Message> {
    let recent = &history[history.len().saturating_sub(HISTORY_FOR_PROMPT_LEN)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(Message::system(CHAT_SYSTEM_PROMPT));
    messages.extend_from_slice(recent);
    messages.push(Message::user(message));
    messages
}

impl TravelAgent {
    pub async fn chat_reply(
        &self,
        message: &str,
        history: &[Message]
    ) -> Result<String, ChatError> {
        info!("User message: {}", message);
        info!("Conversation history length: {}", history.len());

        let messages = build_messages(history, message);
        debug!("Messages sent upstream: {:?}", messages);

        let reply = self.chat_upstream.complete(&messages).await?;
        debug!("AI response: {}", reply);
        Ok(reply)
    }
}
