use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, Field, SocialLogins};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::{FieldErrors, RegisterForm, Validate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone_number: phone.get_untracked().trim().to_string(),
            password: password.get_untracked(),
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
            match api::register(&api, &form).await {
                Ok(ack) => {
                    log::info!("[AUTH] registered {}", form.email);
                    *store.email_for_verification().write() = Some(form.email.clone());
                    ctx.toast_success(if ack.message.is_empty() {
                        "Account created. Check your inbox for the verification code.".to_string()
                    } else {
                        ack.message
                    });
                    navigate("/verify-email", Default::default());
                }
                Err(e) => ctx.toast_api_error(&e, "Registration failed."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <Field label="Full name" value=name error=field_error(errors, "name") />
                <Field label="E-mail" value=email kind="email" error=field_error(errors, "email") />
                <Field
                    label="Phone number"
                    value=phone
                    kind="tel"
                    placeholder="09xxxxxxxx"
                    error=field_error(errors, "phone_number")
                />
                <Field label="Password" value=password kind="password" error=field_error(errors, "password") />
                <Field
                    label="Confirm password"
                    value=confirm
                    kind="password"
                    error=field_error(errors, "confirm_password")
                />
                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <SocialLogins />
                <p class="centered">"Already registered? " <A href="/login">"Sign in"</A></p>
            </form>
        </div>
    }
}
