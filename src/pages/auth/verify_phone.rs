//! Phone Verification Page
//!
//! Every guarded route sends unverified users here. The code arrives by SMS
//! after an explicit request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use super::{format_countdown, start_cooldown, PHONE_RESEND_COOLDOWN};
use crate::api;
use crate::components::{field_error, Field};
use crate::context::use_app_context;
use crate::store::{store_update_user, use_app_store, AppStateStoreFields};
use crate::validation::{FieldErrors, OtpForm, Validate, OTP_LEN};

#[component]
pub fn VerifyPhonePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, Default::default()));

    let otp = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let cooldown = RwSignal::new(0_u32);
    let (requested, set_requested) = signal(false);
    let (requesting, set_requesting) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let phone = move || {
        store
            .session()
            .read()
            .user
            .as_ref()
            .map(|u| u.phone_number.clone())
            .unwrap_or_default()
    };

    let request_code = move |_| {
        set_requesting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::request_phone_code(&api).await {
                Ok(_) => {
                    ctx.toast_success("Code sent by SMS.");
                    set_requested.try_set(true);
                    if cooldown.try_get_untracked().is_some() {
                        start_cooldown(cooldown, PHONE_RESEND_COOLDOWN);
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not send the code."),
            }
            set_requesting.try_set(false);
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = OtpForm {
            otp: otp.get_untracked().trim().to_string(),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::verify_phone(&api, &form.otp).await {
                Ok(_) => {
                    log::info!("[AUTH] phone verified");
                    match api::get_me(&api).await {
                        Ok(user) => store_update_user(&store, user),
                        Err(e) => log::warn!("[AUTH] profile refresh failed: {e}"),
                    }
                    ctx.toast_success("Phone number verified.");
                    go.run("/".to_string());
                }
                Err(e) => ctx.toast_api_error(&e, "Invalid or expired code."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="page narrow">
            <form class="panel" on:submit=on_submit>
                <h1>"Verify your phone"</h1>
                <p class="muted">{move || format!("We will text a {OTP_LEN}-digit code to {}.", phone())}</p>
                <button
                    type="button"
                    class="btn secondary"
                    disabled={move || requesting.get() || cooldown.get() > 0}
                    on:click=request_code
                >
                    {move || match (cooldown.get(), requested.get()) {
                        (0, false) => "Send code".to_string(),
                        (0, true) => "Send a new code".to_string(),
                        (left, _) => format!("Send again in {}", format_countdown(left)),
                    }}
                </button>
                <Field
                    label="Verification code"
                    value=otp
                    placeholder="123456"
                    error=field_error(errors, "otp")
                />
                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
        </div>
    }
}
