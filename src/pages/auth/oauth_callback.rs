//! OAuth Callback Page
//!
//! The backend redirects here with `token` and `refresh_token` in the
//! query. The access token's claims stand in for the profile until
//! `/users/me` answers.

use bearer_client::TokenPair;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::context::use_app_context;
use crate::jwt::decode_claims;
use crate::store::{store_login, store_update_user, use_app_store};

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let query = use_query_map();

    let (failed, set_failed) = signal(false);

    let (token, refresh) = query.with_untracked(|q| (q.get("token"), q.get("refresh_token")));
    let claims = token.as_deref().map(decode_claims);

    match (token, refresh, claims) {
        (Some(access_token), Some(refresh_token), Some(Ok(claims))) => {
            log::info!("[AUTH] OAuth sign-in for user #{}", claims.id);
            store_login(
                &store,
                TokenPair {
                    access_token,
                    refresh_token,
                },
                claims.to_user(),
            );
            let api = ctx.api();
            spawn_local(async move {
                match api::get_me(&api).await {
                    Ok(user) => store_update_user(&store, user),
                    Err(e) => log::warn!("[AUTH] profile fetch after OAuth failed: {e}"),
                }
                navigate("/", Default::default());
            });
        }
        (_, _, Some(Err(e))) => {
            log::error!("[AUTH] OAuth token rejected: {e}");
            set_failed.set(true);
        }
        _ => {
            log::error!("[AUTH] OAuth callback without tokens");
            set_failed.set(true);
        }
    }

    view! {
        <div class="auth-page">
            <div class="auth-card centered">
                <Show
                    when=move || failed.get()
                    fallback=|| view! { <p class="muted">"Signing you in..."</p> }
                >
                    <h1>"Sign-in failed"</h1>
                    <p class="muted">"The provider did not return a valid session."</p>
                    <a href="/login" class="btn primary">"Back to sign in"</a>
                </Show>
            </div>
        </div>
    }
}
