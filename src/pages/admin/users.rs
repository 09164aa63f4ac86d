use leptos::prelude::*;
use leptos::task::spawn_local;

use super::PagedList;
use crate::api;
use crate::components::{Modal, Pager};
use crate::context::use_app_context;
use crate::models::{Role, User};

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_app_context();

    let list = PagedList::new(|api, query| async move { api::admin_users(&api, &query).await });
    let on_search = list.search_handler();
    let search_text = RwSignal::new(String::new());

    // Role dialog
    let role_target = RwSignal::new(None::<User>);
    let new_role = RwSignal::new(Role::Customer);

    let open_role_dialog = move |user: User| {
        new_role.set(user.role);
        role_target.set(Some(user));
    };

    let save_role = move |_| {
        let Some(user) = role_target.get_untracked() else {
            return;
        };
        let role = new_role.get_untracked();
        if role == user.role {
            role_target.set(None);
            return;
        }
        ctx.confirm(
            format!("Make {} a {}?", user.display_name(), role.label().to_lowercase()),
            move || {
                let api = ctx.api();
                let user_id = user.id;
                spawn_local(async move {
                    match api::change_role(&api, user_id, role).await {
                        Ok(_) => {
                            ctx.toast_success("Role updated.");
                            role_target.try_set(None);
                            list.reload();
                        }
                        Err(e) => ctx.toast_api_error(&e, "Could not change the role."),
                    }
                });
            },
        );
    };

    let toggle_ban = move |user: User| {
        let ban = !user.is_banned;
        let verb = if ban { "Ban" } else { "Unban" };
        ctx.confirm(format!("{verb} {}?", user.display_name()), move || {
            let api = ctx.api();
            let user_id = user.id;
            spawn_local(async move {
                match api::set_banned(&api, user_id, ban).await {
                    Ok(_) => {
                        ctx.toast_success(if ban { "User banned." } else { "User unbanned." });
                        list.reload();
                    }
                    Err(e) => ctx.toast_api_error(&e, "Could not update the user."),
                }
            });
        });
    };

    let role_title = Signal::derive(move || {
        role_target.with(|u| u.as_ref().map(|u| format!("Role of {}", u.display_name())).unwrap_or_default())
    });

    view! {
        <div class="page">
            <h1>"Users"</h1>
            <div class="row filters">
                <input
                    class="input"
                    placeholder="Search by name, e-mail or phone"
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        search_text.set(term.clone());
                        on_search(term);
                    }
                />
                <select on:change=move |ev| list.set_filter(event_target_value(&ev))>
                    <option value="">"All roles"</option>
                    {Role::ASSIGNABLE
                        .iter()
                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <p class="muted centered">"Loading users..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"E-mail"</th>
                            <th>"Phone"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let banned = user.is_banned;
                                    let for_role = user.clone();
                                    let for_ban = user.clone();
                                    view! {
                                        <tr class=if banned { "banned" } else { "" }>
                                            <td>{user.display_name()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.phone_number.clone()}</td>
                                            <td>{user.role.label()}</td>
                                            <td>{if banned { "Banned" } else { "Active" }}</td>
                                            <td class="row">
                                                <button
                                                    type="button"
                                                    class="btn link"
                                                    on:click=move |_| open_role_dialog(for_role.clone())
                                                >
                                                    "Change role"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="btn link danger"
                                                    on:click=move |_| toggle_ban(for_ban.clone())
                                                >
                                                    {if banned { "Unban" } else { "Ban" }}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
            <Pager
                page=Signal::derive(move || list.query.with(|q| q.page))
                total_pages=list.total_pages
                on_change=move |page| list.go_to(page)
            />

            <Modal
                open=Signal::derive(move || role_target.with(Option::is_some))
                on_close=move |_| role_target.set(None)
                title=role_title
            >
                <select on:change=move |ev| {
                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                        new_role.set(role);
                    }
                }>
                    {Role::ASSIGNABLE
                        .iter()
                        .map(|&r| {
                            view! {
                                <option value=r.as_str() selected=move || new_role.get() == r>
                                    {r.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="modal-actions">
                    <button type="button" class="btn secondary" on:click=move |_| role_target.set(None)>
                        "Cancel"
                    </button>
                    <button type="button" class="btn primary" on:click=save_role>
                        "Save"
                    </button>
                </div>
            </Modal>
        </div>
    }
}
