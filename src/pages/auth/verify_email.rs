use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use super::{format_countdown, start_cooldown, EMAIL_RESEND_COOLDOWN};
use crate::api;
use crate::components::{field_error, Field};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::{is_valid_email, FieldErrors, Validate, VerifyEmailForm};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let handed_off = store.email_for_verification().get_untracked();
    let email = RwSignal::new(handed_off.clone().unwrap_or_default());
    let code = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let cooldown = RwSignal::new(0_u32);
    let (submitting, set_submitting) = signal(false);
    let (resending, set_resending) = signal(false);

    // A code was just sent by registration or the login attempt
    if handed_off.is_some() {
        start_cooldown(cooldown, EMAIL_RESEND_COOLDOWN);
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = VerifyEmailForm {
            email: email.get_untracked().trim().to_string(),
            code: code.get_untracked().trim().to_string(),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        set_submitting.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::verify_email(&api, &form).await {
                Ok(_) => {
                    *store.email_for_verification().write() = None;
                    ctx.toast_success("E-mail verified. You can sign in now.");
                    navigate("/login", Default::default());
                }
                Err(e) => ctx.toast_api_error(&e, "Verification failed."),
            }
            set_submitting.try_set(false);
        });
    };

    let resend = move |_| {
        let address = email.get_untracked().trim().to_string();
        if !is_valid_email(&address) {
            errors.update(|e| e.add("email", "Enter a valid e-mail address"));
            return;
        }
        set_resending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::resend_verification(&api, &address).await {
                Ok(_) => {
                    ctx.toast_success("A new code has been sent.");
                    if cooldown.try_get_untracked().is_some() {
                        start_cooldown(cooldown, EMAIL_RESEND_COOLDOWN);
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not resend the code."),
            }
            set_resending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Verify your e-mail"</h1>
                <p class="muted">"Enter the code we sent to your inbox."</p>
                <Field label="E-mail" value=email kind="email" error=field_error(errors, "email") />
                <Field label="Verification code" value=code error=field_error(errors, "code") />
                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                </button>
                <button
                    type="button"
                    class="btn link"
                    disabled={move || resending.get() || cooldown.get() > 0}
                    on:click=resend
                >
                    {move || match cooldown.get() {
                        0 => "Resend code".to_string(),
                        left => format!("Resend code in {}", format_countdown(left)),
                    }}
                </button>
                <p class="centered"><A href="/login">"Back to sign in"</A></p>
            </form>
        </div>
    }
}
