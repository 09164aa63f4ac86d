//! Sign-in, registration and account verification screens.

mod forgot_password;
mod login;
mod oauth_callback;
mod register;
mod reset_password;
mod verify_email;
mod verify_phone;

pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use oauth_callback::OAuthCallbackPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use verify_email::VerifyEmailPage;
pub use verify_phone::VerifyPhonePage;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Seconds before another verification e-mail may be requested.
pub const EMAIL_RESEND_COOLDOWN: u32 = 300;
/// Seconds before another SMS code may be requested.
pub const PHONE_RESEND_COOLDOWN: u32 = 60;

/// Counts `remaining` down to zero, one step per second.
pub fn start_cooldown(remaining: RwSignal<u32>, seconds: u32) {
    remaining.set(seconds);
    tick(remaining);
}

fn tick(remaining: RwSignal<u32>) {
    Timeout::new(1_000, move || {
        let left = remaining.try_update(|r| {
            *r = r.saturating_sub(1);
            *r
        });
        // Stops on zero or once the page is gone
        if left.is_some_and(|n| n > 0) {
            tick(remaining);
        }
    })
    .forget();
}

/// `m:ss` countdown text.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(EMAIL_RESEND_COOLDOWN), "5:00");
        assert_eq!(format_countdown(59), "0:59");
        assert_eq!(format_countdown(61), "1:01");
        assert_eq!(format_countdown(0), "0:00");
    }
}
