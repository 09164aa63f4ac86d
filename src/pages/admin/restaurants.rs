use leptos::prelude::*;
use leptos::task::spawn_local;

use super::PagedList;
use crate::api::{self, Ack};
use crate::components::Pager;
use crate::context::use_app_context;
use crate::models::{Restaurant, RestaurantStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Suspend,
    Unsuspend,
    ForceDelete,
}

impl Action {
    fn question(&self, name: &str) -> String {
        match self {
            Action::Suspend => format!("Suspend {name}? It disappears from customers' searches."),
            Action::Unsuspend => format!("Reinstate {name}?"),
            Action::ForceDelete => format!("Permanently delete {name} and all its data? This cannot be undone."),
        }
    }

    fn done(&self) -> &'static str {
        match self {
            Action::Suspend => "Restaurant suspended.",
            Action::Unsuspend => "Restaurant reinstated.",
            Action::ForceDelete => "Restaurant deleted.",
        }
    }
}

#[component]
pub fn AdminRestaurantsPage() -> impl IntoView {
    let ctx = use_app_context();

    let list = PagedList::new(|api, query| async move { api::admin_restaurants(&api, &query).await });
    let on_search = list.search_handler();
    let search_text = RwSignal::new(String::new());

    let run = move |action: Action, restaurant: Restaurant| {
        let id = restaurant.id;
        ctx.confirm(action.question(&restaurant.name), move || {
            let api = ctx.api();
            spawn_local(async move {
                let result: Result<Ack, _> = match action {
                    Action::Suspend => api::suspend_restaurant(&api, id).await,
                    Action::Unsuspend => api::unsuspend_restaurant(&api, id).await,
                    Action::ForceDelete => api::force_delete_restaurant(&api, id).await,
                };
                match result {
                    Ok(_) => {
                        log::info!("[ADMIN] {action:?} restaurant #{id}");
                        ctx.toast_success(action.done());
                        list.reload();
                    }
                    Err(e) => ctx.toast_api_error(&e, "The action failed."),
                }
            });
        });
    };

    view! {
        <div class="page">
            <h1>"Restaurants"</h1>
            <div class="row filters">
                <input
                    class="input"
                    placeholder="Search by name"
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        search_text.set(term.clone());
                        on_search(term);
                    }
                />
                <select on:change=move |ev| list.set_filter(event_target_value(&ev))>
                    <option value="">"All"</option>
                    <option value="active">"Active"</option>
                    <option value="suspended">"Suspended"</option>
                </select>
            </div>

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <p class="muted centered">"Loading restaurants..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Address"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|restaurant| {
                                    let suspended = restaurant.status == RestaurantStatus::Suspended;
                                    let toggle = if suspended { Action::Unsuspend } else { Action::Suspend };
                                    let for_toggle = restaurant.clone();
                                    let for_delete = restaurant.clone();
                                    view! {
                                        <tr>
                                            <td>{restaurant.name.clone()}</td>
                                            <td>{restaurant.address.clone()}</td>
                                            <td>{if suspended { "Suspended" } else { "Active" }}</td>
                                            <td class="row">
                                                <button
                                                    type="button"
                                                    class="btn link"
                                                    on:click=move |_| run(toggle, for_toggle.clone())
                                                >
                                                    {if suspended { "Reinstate" } else { "Suspend" }}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="btn link danger"
                                                    on:click=move |_| run(Action::ForceDelete, for_delete.clone())
                                                >
                                                    "Delete"
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
        </div>
    }
}
