use super::TravelAgent;
use crate::config::prompt::{ get_budget_prompt, BUDGET_SYSTEM_PROMPT };
use crate::llm::{ LlmError, Message };
use crate::models::budget::{ BudgetBreakdown, BudgetRequest };
use log::{ debug, info, warn };
use serde_json::Value as JsonValue;

#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("city, country and profile are required")]
    MissingFields,
    #[error("budget completion failed: {0}")]
    Upstream(#[from] LlmError),
    #[error("budget completion is not valid JSON: {source}")]
    InvalidFormat {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

/// Removes Markdown code fences the model sometimes wraps around JSON.
/// Applying it to its own output is a no-op.
pub fn strip_code_fences(text: &str) -> String {
    text.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl TravelAgent {
    pub async fn estimate_budget(&self, request: &BudgetRequest) -> Result<JsonValue, BudgetError> {
        let (city, country, profile) = match (
            present(&request.city),
            present(&request.country),
            present(&request.profile),
        ) {
            (Some(city), Some(country), Some(profile)) => (city, country, profile),
            _ => return Err(BudgetError::MissingFields),
        };

        info!("Budget request: city={}, country={}, profile={}", city, country, profile);

        let messages = vec![
            Message::system(BUDGET_SYSTEM_PROMPT),
            Message::user(get_budget_prompt(city, country, profile)),
        ];

        let raw = self.budget_upstream.complete(&messages).await?;
        debug!("Raw budget response: {}", raw);

        let cleaned = strip_code_fences(&raw);
        let budget: JsonValue = serde_json::from_str(&cleaned)
            .map_err(|source| BudgetError::InvalidFormat { source, raw })?;

        if let Err(e) = serde_json::from_value::<BudgetBreakdown>(budget.clone()) {
            warn!("Budget response for {}, {} does not match the expected schema: {}", city, country, e);
        }

        Ok(budget)
    }
}
