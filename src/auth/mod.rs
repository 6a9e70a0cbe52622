use chrono::{ Duration, Utc };
use jsonwebtoken::{ decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation };
use serde::{ Deserialize, Serialize };

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no bearer token supplied")]
    Unauthenticated,
    #[error("token rejected: {0}")]
    Forbidden(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Subject of a verified token, attached to the request by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    /// Checks signature and expiry. A missing token is `Unauthenticated`; anything
    /// else that fails is `Forbidden`.
    pub fn verify(&self, token: Option<&str>) -> Result<AuthenticatedSubject, AuthError> {
        let token = token.ok_or(AuthError::Unauthenticated)?;
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::Forbidden)?;
        Ok(AuthenticatedSubject(data.claims.sub))
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }
}

/// Second space-separated part of an `Authorization` header value.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value
        .and_then(|v| v.split(' ').nth(1))
        .filter(|t| !t.is_empty())
}
