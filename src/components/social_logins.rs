//! OAuth sign-in buttons. The backend handles the provider dance and sends
//! the browser back to `/oauth/callback`.

use leptos::prelude::*;

use crate::api::OAuthProvider;
use crate::context::use_app_context;

#[component]
pub fn SocialLogins() -> impl IntoView {
    let ctx = use_app_context();

    let start = move |provider: OAuthProvider| {
        let url = ctx.config().endpoint(&provider.login_path());
        log::info!("[AUTH] starting {} sign-in", provider.as_str());
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&url) {
                log::error!("[AUTH] navigation failed: {e:?}");
            }
        }
    };

    view! {
        <div class="social-logins">
            <p class="muted centered">"or continue with"</p>
            {OAuthProvider::ALL
                .iter()
                .map(|&provider| {
                    view! {
                        <button type="button" class="btn social" on:click=move |_| start(provider)>
                            {provider.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
