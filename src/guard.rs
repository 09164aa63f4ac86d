//! Route guard decisions.

use crate::models::Role;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const VERIFY_PHONE_PATH: &str = "/verify-phone";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Checks, in order: signed in, phone verified, role allowed.
///
/// `allowed` of `None` admits any signed-in, verified user.
pub fn check(session: &Session, path: &str, allowed: Option<&[Role]>) -> Access {
    if !session.is_authenticated {
        return Access::Redirect(LOGIN_PATH);
    }
    // Tokens without a profile cannot pass the role gate; sign in again.
    let Some(user) = session.user.as_ref() else {
        return Access::Redirect(LOGIN_PATH);
    };
    if session.needs_phone_verification() && path.trim_end_matches('/') != VERIFY_PHONE_PATH {
        return Access::Redirect(VERIFY_PHONE_PATH);
    }
    match allowed {
        Some(roles) if !roles.contains(&user.role) => Access::Redirect(UNAUTHORIZED_PATH),
        _ => Access::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use bearer_client::TokenPair;

    fn signed_in(role: Role, verified: bool) -> Session {
        let mut session = Session::default();
        session.login(
            TokenPair {
                access_token: "a".into(),
                refresh_token: "r".into(),
            },
            User {
                id: 1,
                phone_number: "0944".into(),
                email: "u@example.com".into(),
                name: None,
                profile_image_url: None,
                role,
                is_active: true,
                is_banned: false,
                oauth_provider: None,
                phone_number_verified: verified,
                associated_restaurant_id: None,
                created_at: None,
            },
        );
        session
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(
            check(&Session::default(), "/orders", None),
            Access::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            check(&Session::default(), "/verify-phone", None),
            Access::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_tokens_without_profile_go_to_login() {
        let mut session = signed_in(Role::Admin, true);
        session.user = None;
        assert!(session.is_authenticated);
        assert_eq!(check(&session, "/", None), Access::Redirect(LOGIN_PATH));
        assert_eq!(
            check(&session, "/admin", Some(Role::ADMIN)),
            Access::Redirect(LOGIN_PATH)
        );
        assert_eq!(check(&session, "/verify-phone", None), Access::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_unverified_phone_is_held_at_verification() {
        let session = signed_in(Role::Admin, false);
        for path in ["/", "/orders", "/portal", "/admin/users", "/profile"] {
            assert_eq!(
                check(&session, path, Some(Role::ADMIN)),
                Access::Redirect(VERIFY_PHONE_PATH),
                "{path}"
            );
        }
        assert_eq!(check(&session, "/verify-phone", None), Access::Allow);
    }

    #[test]
    fn test_role_sets() {
        let customer = signed_in(Role::Customer, true);
        assert_eq!(check(&customer, "/", None), Access::Allow);
        assert_eq!(
            check(&customer, "/portal", Some(Role::PORTAL)),
            Access::Redirect(UNAUTHORIZED_PATH)
        );

        let staff = signed_in(Role::RestaurantAdmin, true);
        assert_eq!(check(&staff, "/portal/orders", Some(Role::PORTAL)), Access::Allow);
        assert_eq!(
            check(&staff, "/admin", Some(Role::ADMIN)),
            Access::Redirect(UNAUTHORIZED_PATH)
        );

        let manager = signed_in(Role::Manager, true);
        assert_eq!(check(&manager, "/admin/users", Some(Role::ADMIN)), Access::Allow);
    }
}
