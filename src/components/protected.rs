//! Route Guard Component
//!
//! Wraps a page and redirects when `guard::check` refuses the visit.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::guard::{self, Access};
use crate::models::Role;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Protected(#[prop(optional)] roles: Option<&'static [Role]>, children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let location = use_location();

    // Memoized so token rotation does not remount the page
    let access = Memo::new(move |_| {
        let path = location.pathname.get();
        guard::check(&store.session().read(), &path, roles)
    });

    move || match access.get() {
        Access::Allow => children().into_any(),
        Access::Redirect(to) => {
            log::debug!("[GUARD] redirecting to {to}");
            view! { <Redirect path=to /> }.into_any()
        }
    }
}
