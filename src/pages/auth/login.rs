use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, Field, SocialLogins};
use crate::context::use_app_context;
use crate::session::is_inactive_account;
use crate::store::{store_login, use_app_store, AppStateStoreFields};
use crate::validation::{is_valid_email, FieldErrors, LoginForm, Validate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, Default::default()));

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            identifier: identifier.get_untracked().trim().to_string(),
            password: password.get_untracked(),
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
            match api::login(&api, &form).await {
                Ok(response) => {
                    let (tokens, user) = response.into_parts();
                    log::info!("[AUTH] signed in as user #{}", user.id);
                    store_login(&store, tokens, user);
                    ctx.toast_success("Welcome back!");
                    go.run("/".to_string());
                }
                Err(e) if is_inactive_account(&e) => {
                    if is_valid_email(&form.identifier) {
                        *store.email_for_verification().write() = Some(form.identifier.clone());
                    }
                    ctx.toast_info("Please verify your e-mail address first.");
                    go.run("/verify-email".to_string());
                }
                Err(e) => ctx.toast_api_error(&e, "Sign-in failed."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <Show when=move || !store.session().read().is_authenticated fallback=|| view! { <Redirect path="/" /> }>
            <div class="auth-page">
                <form class="auth-card" on:submit=on_submit>
                    <h1>"Sign in"</h1>
                    <Field
                        label="E-mail or phone"
                        value=identifier
                        error=field_error(errors, "identifier")
                    />
                    <Field
                        label="Password"
                        value=password
                        kind="password"
                        error=field_error(errors, "password")
                    />
                    <A href="/forgot-password" attr:class="small-link">"Forgot your password?"</A>
                    <button type="submit" class="btn primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <SocialLogins />
                    <p class="centered">"New here? " <A href="/register">"Create an account"</A></p>
                </form>
            </div>
        </Show>
    }
}
