//! Auth Endpoints
//!
//! Login, registration, verification and password recovery. Everything but
//! logout and the phone endpoints is public.

use bearer_client::{ApiRequest, ClientError};
use serde::Serialize;
use serde_json::json;

use super::{Ack, ApiClient};
use crate::session::LoginResponse;
use crate::validation::{
    ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm, VerifyEmailForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
    Github,
}

impl OAuthProvider {
    pub const ALL: &'static [OAuthProvider] =
        &[OAuthProvider::Google, OAuthProvider::Facebook, OAuthProvider::Github];

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Github => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Facebook => "Facebook",
            OAuthProvider::Github => "GitHub",
        }
    }

    /// Backend path the browser navigates to.
    pub fn login_path(&self) -> String {
        format!("/auth/oauth/login/{}", self.as_str())
    }
}

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

pub async fn login(api: &ApiClient, form: &LoginForm) -> Result<LoginResponse, ClientError> {
    api.fetch(ApiRequest::post("/auth/login").public().json(form)?).await
}

pub async fn register(api: &ApiClient, form: &RegisterForm) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/auth/register").public().json(form)?).await
}

/// Revokes the server session. Callers sign out locally regardless.
pub async fn logout(api: &ApiClient) -> Result<(), ClientError> {
    api.execute(ApiRequest::post("/auth/logout")).await
}

pub async fn verify_email(api: &ApiClient, form: &VerifyEmailForm) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/auth/verify-email").public().json(form)?).await
}

pub async fn resend_verification(api: &ApiClient, email: &str) -> Result<Ack, ClientError> {
    let request = ApiRequest::post("/auth/resend-verification")
        .public()
        .json(&EmailArgs { email })?;
    api.fetch(request).await
}

pub async fn request_password_reset(
    api: &ApiClient,
    form: &ForgotPasswordForm,
) -> Result<Ack, ClientError> {
    let request = ApiRequest::post("/auth/request-password-reset")
        .public()
        .json(form)?;
    api.fetch(request).await
}

pub async fn reset_password(api: &ApiClient, form: &ResetPasswordForm) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/auth/reset-password").public().json(form)?).await
}

pub async fn request_phone_code(api: &ApiClient) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/auth/request-phone-verification-code")).await
}

pub async fn verify_phone(api: &ApiClient, code: &str) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/auth/verify-phone").json(&json!({ "code": code }))?)
        .await
}
