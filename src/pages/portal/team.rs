//! Team Page
//!
//! Restaurant admins working under the manager. New members are found by
//! e-mail or phone number.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use super::staff_restaurant_id;
use crate::api;
use crate::context::use_app_context;
use crate::models::User;
use crate::store::use_app_store;

#[component]
pub fn TeamPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let restaurant_id = staff_restaurant_id(store);

    let (members, set_members) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let query = RwSignal::new(String::new());
    let (results, set_results) = signal(Vec::<User>::new());
    let (searching, set_searching) = signal(false);

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api::team_members(&api).await {
                Ok(list) => {
                    set_members.try_set(list);
                }
                Err(e) => ctx.toast_api_error(&e, "Could not load the team."),
            }
            set_loading.try_set(false);
        });
    };
    load();

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        set_searching.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::search_users(&api, &q).await {
                Ok(found) => {
                    if found.is_empty() {
                        ctx.toast_info("No user matches that e-mail or phone number.");
                    }
                    set_results.try_set(found);
                }
                Err(e) => ctx.toast_api_error(&e, "Search failed."),
            }
            set_searching.try_set(false);
        });
    };

    let add = move |user_id: u32| {
        let Some(rid) = restaurant_id else {
            ctx.toast_error("Your account is not linked to a restaurant.");
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api::add_team_member(&api, rid, user_id).await {
                Ok(_) => {
                    ctx.toast_success("Team member added.");
                    set_results.try_set(Vec::new());
                    load();
                }
                Err(e) => ctx.toast_api_error(&e, "Could not add the team member."),
            }
        });
    };

    let remove = move |user: User| {
        let user_id = user.id;
        ctx.confirm(format!("Remove {} from the team?", user.display_name()), move || {
            let api = ctx.api();
            spawn_local(async move {
                match api::remove_team_member(&api, user_id).await {
                    Ok(()) => {
                        ctx.toast_success("Team member removed.");
                        set_members.try_update(|list| list.retain(|m| m.id != user_id));
                    }
                    Err(e) => ctx.toast_api_error(&e, "Could not remove the team member."),
                }
            });
        });
    };

    view! {
        <div class="page">
            <h1>"Team"</h1>
            <section class="panel">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="muted">"Loading team..."</p> }
                >
                    <Show
                        when=move || !members.with(Vec::is_empty)
                        fallback=|| view! { <p class="muted">"No team members yet."</p> }
                    >
                        <ul class="member-list">
                            {move || {
                                members
                                    .get()
                                    .into_iter()
                                    .map(|member| {
                                        let label = member.display_name();
                                        let contact = member.email.clone();
                                        let role = member.role.label();
                                        view! {
                                            <li class="row">
                                                <span class="strong">{label}</span>
                                                <span class="muted">{contact}</span>
                                                <span class="badge">{role}</span>
                                                <button
                                                    type="button"
                                                    class="btn link danger"
                                                    on:click=move |_| remove(member.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </Show>
            </section>

            <section class="panel">
                <h2>"Add a member"</h2>
                <form class="row" on:submit=on_search>
                    <input
                        class="input"
                        placeholder="E-mail or phone number"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn secondary" disabled=move || searching.get()>
                        "Search"
                    </button>
                </form>
                <ul class="member-list">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|user| {
                                let id = user.id;
                                view! {
                                    <li class="row">
                                        <span class="strong">{user.display_name()}</span>
                                        <span class="muted">{user.email.clone()}</span>
                                        <button type="button" class="btn primary" on:click=move |_| add(id)>
                                            "Add"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
