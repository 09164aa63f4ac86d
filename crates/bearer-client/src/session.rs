//! Token storage seam.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair as issued by `POST /auth/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Where the client reads and writes the current session tokens.
///
/// The application backs this with its session store; `expire` must log the
/// user out and send them to the login screen.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store_tokens(&self, tokens: TokenPair);
    fn expire(&self);
}
