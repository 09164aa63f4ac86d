//! Profile Page
//!
//! Only changed fields are sent. A new e-mail address must be verified
//! again, so the session ends a few seconds after such an update.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api::{self, Upload};
use crate::components::{data_url, field_error, Field, FilePicker};
use crate::context::use_app_context;
use crate::store::{store_logout, store_update_user, use_app_store, AppStateStoreFields};
use crate::validation::{FieldErrors, ProfileForm, Validate};

const FORCED_LOGOUT_DELAY_MS: u32 = 5_000;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let initial = store
        .session()
        .read_untracked()
        .user
        .as_ref()
        .map(ProfileForm::from_user)
        .unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone_number);
    let avatar = RwSignal::new(None::<Upload>);
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let is_oauth = move || {
        store
            .session()
            .read()
            .user
            .as_ref()
            .is_some_and(|u| u.oauth_provider.is_some())
    };
    let avatar_src = move || match avatar.get() {
        Some(upload) => Some(data_url(&upload)),
        None => store
            .session()
            .read()
            .user
            .as_ref()
            .and_then(|u| u.profile_image_url.clone())
            .map(|src| ctx.image_url(&src)),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = store.session().read_untracked().user.clone() else {
            return;
        };
        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone.get_untracked(),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        let changes = form.changes(&user);
        let new_avatar = avatar.get_untracked();
        if changes.is_empty() && new_avatar.is_none() {
            ctx.toast_info("Nothing to update.");
            return;
        }

        set_saving.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_me(&api, &changes, new_avatar.as_ref()).await {
                Ok(update) => {
                    let new_email = update.user.email.clone();
                    store_update_user(&store, update.user);
                    avatar.try_set(None);
                    ctx.toast_success(if update.message.is_empty() {
                        "Profile updated.".to_string()
                    } else {
                        update.message
                    });

                    if update.re_verification_needed.phone {
                        ctx.toast_info("Please verify your new phone number.");
                    }
                    if update.re_verification_needed.email {
                        ctx.toast_info("Verify your new e-mail address. You will be signed out in 5 seconds.");
                        log::info!("[PROFILE] e-mail changed, ending session");
                        Timeout::new(FORCED_LOGOUT_DELAY_MS, move || {
                            *store.email_for_verification().write() = Some(new_email);
                            store_logout(&store);
                            navigate("/verify-email", Default::default());
                        })
                        .forget();
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not update the profile."),
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <div class="page narrow">
            <form class="panel" on:submit=on_submit>
                <h1>"Profile"</h1>
                <div class="avatar-row">
                    {move || {
                        avatar_src()
                            .map(|src| view! { <img class="avatar large" src=src alt="" /> })
                    }}
                    <FilePicker
                        label="Profile picture"
                        on_files={move |files: Vec<Upload>| avatar.set(files.into_iter().next())}
                    />
                </div>
                <Field label="Full name" value=name error=field_error(errors, "name") />
                <Field
                    label="E-mail"
                    value=email
                    kind="email"
                    error=field_error(errors, "email")
                    disabled=is_oauth()
                />
                <Field label="Phone number" value=phone kind="tel" error=field_error(errors, "phone_number") />
                <button type="submit" class="btn primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
                <A href="/change-password" attr:class="small-link">"Change password"</A>
            </form>
        </div>
    }
}
