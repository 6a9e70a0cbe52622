use crate::agent::{ BudgetError, ChatError };
use crate::auth::AuthError;
use crate::models::chat::ErrorBody;
use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use log::{ error, warn };

/// Errors as the caller sees them. Details stay in the server log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthenticated,
    #[error("Forbidden")]
    Forbidden,
    #[error("{0}")]
    BadRequest(String),
    #[error("OpenAI error")]
    ChatUpstream,
    #[error("Budget calculation failed")]
    BudgetUpstream,
    #[error("Invalid JSON response from OpenAI")]
    InvalidUpstreamFormat,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ChatUpstream
            | ApiError::BudgetUpstream
            | ApiError::InvalidUpstreamFormat
            | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => ApiError::Unauthenticated,
            AuthError::Forbidden(e) => {
                warn!("Rejected bearer token: {}", e);
                ApiError::Forbidden
            }
            AuthError::Signing(e) => {
                error!("Token signing failed: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        error!("OpenAI error: {}", err);
        ApiError::ChatUpstream
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::MissingFields => {
                ApiError::BadRequest("City, country, and profile are required".to_string())
            }
            BudgetError::Upstream(e) => {
                error!("Budget calculation error: {}", e);
                ApiError::BudgetUpstream
            }
            BudgetError::InvalidFormat { source, raw } => {
                error!("Failed to parse budget JSON: {}. Raw response: {}", source, raw);
                ApiError::InvalidUpstreamFormat
            }
        }
    }
}
