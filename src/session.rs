//! Authentication Session
//!
//! Tokens and the signed-in user, persisted under `auth-storage`.

use bearer_client::{ClientError, TokenPair};
use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn login(&mut self, tokens: TokenPair, user: User) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = Some(tokens.refresh_token);
        self.user = Some(user);
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn set_tokens(&mut self, tokens: TokenPair) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = Some(tokens.refresh_token);
    }

    /// Replaces the profile; ignored when signed out.
    pub fn update_user(&mut self, user: User) {
        if self.is_authenticated {
            self.user = Some(user);
        }
    }

    pub fn needs_phone_verification(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.phone_number_verified)
    }
}

/// Login response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

impl LoginResponse {
    pub fn into_parts(self) -> (TokenPair, User) {
        (
            TokenPair {
                access_token: self.access_token,
                refresh_token: self.refresh_token,
            },
            self.user,
        )
    }
}

/// Login was refused because the e-mail address is not verified yet.
pub fn is_inactive_account(err: &ClientError) -> bool {
    match err {
        ClientError::Api { status: 403, message } => {
            let lower = message.to_lowercase();
            lower.contains("inactive") || lower.contains("not active") || message.contains("غير نشط")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn make_user(verified: bool) -> User {
        User {
            id: 7,
            phone_number: "0933000000".into(),
            email: "rama@example.com".into(),
            name: Some("Rama".into()),
            profile_image_url: None,
            role: Role::Customer,
            is_active: true,
            is_banned: false,
            oauth_provider: None,
            phone_number_verified: verified,
            associated_restaurant_id: None,
            created_at: None,
        }
    }

    fn tokens(access: &str) -> TokenPair {
        TokenPair {
            access_token: access.into(),
            refresh_token: format!("{access}-refresh"),
        }
    }

    #[test]
    fn test_login_logout() {
        let mut session = Session::default();
        session.login(tokens("a1"), make_user(false));
        assert!(session.is_authenticated);
        assert!(session.needs_phone_verification());

        session.set_tokens(tokens("a2"));
        assert_eq!(session.access_token.as_deref(), Some("a2"));
        assert_eq!(session.refresh_token.as_deref(), Some("a2-refresh"));

        session.logout();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_update_user_requires_session() {
        let mut session = Session::default();
        session.update_user(make_user(true));
        assert!(session.user.is_none());

        session.login(tokens("a"), make_user(false));
        session.update_user(make_user(true));
        assert!(!session.needs_phone_verification());
    }

    #[test]
    fn test_inactive_account_detection() {
        let err = ClientError::Api {
            status: 403,
            message: "Account inactive. Please verify your e-mail.".into(),
        };
        assert!(is_inactive_account(&err));

        let banned = ClientError::Api { status: 403, message: "This account is banned".into() };
        assert!(!is_inactive_account(&banned));
        assert!(!is_inactive_account(&ClientError::SessionExpired));
    }
}
