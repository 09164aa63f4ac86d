//! Applications Page
//!
//! Partner applications, newest first as the server pages them. Details
//! open in a dialog where the admin approves or rejects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::PagedList;
use crate::api;
use crate::components::{Modal, Pager};
use crate::context::use_app_context;
use crate::geo;
use crate::models::{format_timestamp, RestaurantApplication};

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let ctx = use_app_context();

    let list = PagedList::new(|api, query| async move { api::applications(&api, &query).await });
    let selected = RwSignal::new(None::<RestaurantApplication>);

    let review = move |approve: bool| {
        let Some(application) = selected.get_untracked() else {
            return;
        };
        let id = application.id;
        let question = if approve {
            format!("Approve {}? The applicant becomes its manager.", application.restaurant_name)
        } else {
            format!("Reject {}?", application.restaurant_name)
        };
        ctx.confirm(question, move || {
            let api = ctx.api();
            spawn_local(async move {
                match api::review_application(&api, id, approve).await {
                    Ok(_) => {
                        ctx.toast_success(if approve { "Application approved." } else { "Application rejected." });
                        selected.try_set(None);
                        list.reload();
                    }
                    Err(e) => ctx.toast_api_error(&e, "Could not review the application."),
                }
            });
        });
    };

    let title = Signal::derive(move || {
        selected.with(|a| a.as_ref().map(|a| a.restaurant_name.clone()).unwrap_or_default())
    });
    let is_pending = move || selected.with(|a| a.as_ref().is_some_and(|a| a.status == "pending"));

    view! {
        <div class="page">
            <h1>"Restaurant applications"</h1>
            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <p class="muted centered">"Loading applications..."</p> }
            >
                <Show
                    when=move || !list.items.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted centered">"No applications."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Restaurant"</th>
                                <th>"Applicant"</th>
                                <th>"Submitted"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                list.items
                                    .get()
                                    .into_iter()
                                    .map(|application| {
                                        let applicant = application
                                            .user_name
                                            .clone()
                                            .unwrap_or_else(|| format!("User #{}", application.user_id));
                                        let submitted = format_timestamp(application.created_at.as_deref());
                                        let name = application.restaurant_name.clone();
                                        let status = application.status.clone();
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{applicant}</td>
                                                <td>{submitted}</td>
                                                <td><span class=format!("status {status}")>{status.clone()}</span></td>
                                                <td>
                                                    <button
                                                        type="button"
                                                        class="btn link"
                                                        on:click=move |_| selected.set(Some(application.clone()))
                                                    >
                                                        "Details"
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
            </Show>
            <Pager
                page=Signal::derive(move || list.query.with(|q| q.page))
                total_pages=list.total_pages
                on_change=move |page| list.go_to(page)
            />

            <Modal
                open=Signal::derive(move || selected.with(Option::is_some))
                on_close=move |_| selected.set(None)
                title=title
            >
                {move || {
                    selected
                        .get()
                        .map(|a| {
                            let logo = a.logo_url.as_deref().map(|src| ctx.image_url(src));
                            let area_points = a
                                .delivery_area_geojson
                                .as_ref()
                                .map(|area| geo::from_geojson_polygon(area).len())
                                .unwrap_or(0);
                            view! {
                                <div class="application-details">
                                    {logo.map(|src| view! { <img class="logo" src=src alt="" /> })}
                                    <p>{a.description.clone().unwrap_or_default()}</p>
                                    <p>"Address: " {a.address.clone()}</p>
                                    <p class="muted">
                                        "Location: "
                                        {format!("{:.5}, {:.5}", a.location_lat, a.location_lon)}
                                    </p>
                                    <p class="muted">
                                        {if area_points > 0 {
                                            format!("Delivery area with {area_points} points")
                                        } else {
                                            "No delivery area".to_string()
                                        }}
                                    </p>
                                    <p class="muted">"Status: " {a.status.clone()}</p>
                                </div>
                            }
                        })
                }}
                <Show when=is_pending>
                    <div class="modal-actions">
                        <button type="button" class="btn danger" on:click=move |_| review(false)>
                            "Reject"
                        </button>
                        <button type="button" class="btn primary" on:click=move |_| review(true)>
                            "Approve"
                        </button>
                    </div>
                </Show>
            </Modal>
        </div>
    }
}
