//! Access-token payload decoding (no signature check).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("token is not a JWT")]
    Malformed,
    #[error("token payload is not base64url")]
    Encoding,
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
}

/// Claims the backend puts in access tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub id: u32,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number_verified: Option<bool>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Provisional profile until `/users/me` answers.
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            phone_number: String::new(),
            email: self.email.clone().unwrap_or_default(),
            name: self.name.clone(),
            profile_image_url: None,
            role: self.role,
            is_active: true,
            is_banned: false,
            oauth_provider: None,
            phone_number_verified: self.phone_number_verified.unwrap_or(false),
            associated_restaurant_id: None,
            created_at: None,
        }
    }
}

pub fn decode_claims(token: &str) -> Result<Claims, JwtError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(JwtError::Malformed);
    };
    // Some encoders keep the padding
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| JwtError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_backend_claims() {
        let token = token_with(r#"{"id":42,"role":"restaurant_manager","session_id":"9","exp":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, Role::RestaurantManager);

        let user = claims.to_user();
        assert!(!user.phone_number_verified);
        assert_eq!(user.role, Role::RestaurantManager);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims("abc"), Err(JwtError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(JwtError::Malformed));
        assert_eq!(decode_claims("a.!!!.c"), Err(JwtError::Encoding));
        assert!(matches!(
            decode_claims(&token_with("not json")),
            Err(JwtError::Payload(_))
        ));
    }
}
