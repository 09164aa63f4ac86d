use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, Field};
use crate::context::use_app_context;
use crate::validation::{ChangePasswordForm, FieldErrors, Validate};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ChangePasswordForm {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        set_saving.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::change_password(&api, &form.old_password, &form.new_password).await {
                Ok(_) => {
                    ctx.toast_success("Password changed.");
                    navigate("/profile", Default::default());
                }
                Err(e) => ctx.toast_api_error(&e, "Could not change the password."),
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <div class="page narrow">
            <form class="panel" on:submit=on_submit>
                <h1>"Change password"</h1>
                <Field
                    label="Current password"
                    value=old_password
                    kind="password"
                    error=field_error(errors, "old_password")
                />
                <Field
                    label="New password"
                    value=new_password
                    kind="password"
                    error=field_error(errors, "new_password")
                />
                <Field
                    label="Confirm new password"
                    value=confirm
                    kind="password"
                    error=field_error(errors, "confirm_password")
                />
                <button type="submit" class="btn primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
