use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, Field};
use crate::context::use_app_context;
use crate::validation::{FieldErrors, ResetPasswordForm, Validate};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(query.with_untracked(|q| q.get("email")).unwrap_or_default());
    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ResetPasswordForm {
            email: email.get_untracked().trim().to_string(),
            code: code.get_untracked().trim().to_string(),
            new_password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
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
            match api::reset_password(&api, &form).await {
                Ok(_) => {
                    ctx.toast_success("Password updated. Sign in with your new password.");
                    navigate("/login", Default::default());
                }
                Err(e) => ctx.toast_api_error(&e, "Could not reset the password."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Reset password"</h1>
                <Field label="E-mail" value=email kind="email" error=field_error(errors, "email") />
                <Field label="Reset code" value=code error=field_error(errors, "code") />
                <Field
                    label="New password"
                    value=password
                    kind="password"
                    error=field_error(errors, "new_password")
                />
                <Field
                    label="Confirm password"
                    value=confirm
                    kind="password"
                    error=field_error(errors, "confirm_password")
                />
                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Reset password" }}
                </button>
                <p class="centered"><A href="/forgot-password">"Request a new code"</A></p>
            </form>
        </div>
    }
}
