use super::api::AppState;
use super::error::ApiError;
use crate::auth::bearer_token;
use axum::{
    extract::{ Request, State },
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Verifies the bearer token and attaches the `AuthenticatedSubject` to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let subject = state.tokens.verify(bearer_token(header))?;
    req.extensions_mut().insert(subject);
    Ok(next.run(req).await)
}
