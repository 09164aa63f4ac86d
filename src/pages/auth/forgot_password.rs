use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, Field};
use crate::context::use_app_context;
use crate::validation::{FieldErrors, ForgotPasswordForm, Validate};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm {
            email: email.get_untracked().trim().to_string(),
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
            match api::request_password_reset(&api, &form).await {
                Ok(_) => {
                    ctx.toast_success("If the address is registered, a reset code is on its way.");
                    navigate(
                        &format!("/reset-password?email={}", urlencode(&form.email)),
                        Default::default(),
                    );
                }
                Err(e) => ctx.toast_api_error(&e, "Could not request a reset code."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Forgot password"</h1>
                <p class="muted">"Enter your e-mail and we will send you a reset code."</p>
                <Field label="E-mail" value=email kind="email" error=field_error(errors, "email") />
                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send reset code" }}
                </button>
                <p class="centered"><A href="/login">"Back to sign in"</A></p>
            </form>
        </div>
    }
}

fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
