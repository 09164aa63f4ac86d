//! Application Context
//!
//! Shared services provided via Leptos Context API: configuration, the REST
//! client, toasts and the global confirmation dialog.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use bearer_client::ClientError;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::toast::{ToastKind, Toasts};

/// A pending "are you sure?" question.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    api: StoredValue<Rc<ApiClient>, LocalStorage>,
    /// Visible toasts
    pub toasts: RwSignal<Toasts>,
    /// Open confirmation dialog, if any
    pub confirm: RwSignal<Option<ConfirmRequest>>,
}

impl AppContext {
    pub fn new(config: AppConfig, api: ApiClient) -> Self {
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new_local(Rc::new(api)),
            toasts: RwSignal::new(Toasts::default()),
            confirm: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Rc<ApiClient> {
        self.api.get_value()
    }

    pub fn image_url(&self, path: &str) -> String {
        self.config.with_value(|c| c.image_url(path))
    }

    // ========================
    // Toasts
    // ========================

    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };
        let lifetime = self.config.with_value(|c| c.toast_lifetime.as_millis());
        let toasts = self.toasts;
        Timeout::new(u32::try_from(lifetime).unwrap_or(u32::MAX), move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.toast(ToastKind::Success, message);
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.toast(ToastKind::Error, message);
    }

    pub fn toast_info(&self, message: impl Into<String>) {
        self.toast(ToastKind::Info, message);
    }

    /// Error toast with the server's message, or `fallback`.
    pub fn toast_api_error(&self, err: &ClientError, fallback: &str) {
        log::warn!("[API] {fallback}: {err}");
        match err {
            // Already signed out and redirected
            ClientError::SessionExpired => {}
            _ => self.toast_error(err.user_message(fallback)),
        }
    }

    // ========================
    // Confirmation dialog
    // ========================

    /// Asks for a second action before running `on_confirm`.
    pub fn confirm(&self, message: impl Into<String>, on_confirm: impl Fn() + Send + Sync + 'static) {
        self.confirm.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm: Callback::new(move |_| on_confirm()),
        }));
    }

    pub fn close_confirm(&self) {
        self.confirm.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
