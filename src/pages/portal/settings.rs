use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use super::staff_restaurant_id;
use crate::api::{self, SettingsArgs};
use crate::components::{field_error, Field, LocationPicker, TextArea};
use crate::context::use_app_context;
use crate::geo::{self, MIN_POLYGON_VERTICES};
use crate::models::{Location, Restaurant};
use crate::store::use_app_store;
use crate::validation::{FieldErrors, SettingsForm, Validate};

#[component]
pub fn RestaurantSettingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let restaurant_id = staff_restaurant_id(store);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let location = RwSignal::new(None::<Location>);
    let area = RwSignal::new(Vec::<Location>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let fill = move |r: Restaurant| {
        name.set(r.name);
        description.set(r.description.unwrap_or_default());
        address.set(r.address);
        location.set(r.location);
        area.set(r.delivery_area.as_ref().map(geo::from_geojson_polygon).unwrap_or_default());
    };

    if let Some(rid) = restaurant_id {
        let api = ctx.api();
        spawn_local(async move {
            match api::get_restaurant(&api, rid).await {
                Ok(r) => {
                    if loading.try_get_untracked().is_some() {
                        fill(r);
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not load the restaurant."),
            }
            set_loading.try_set(false);
        });
    } else {
        set_loading.set(false);
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SettingsForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
        };
        let mut problems = form.validate();
        let vertices = area.get_untracked();
        if !vertices.is_empty() && vertices.len() < MIN_POLYGON_VERTICES {
            problems.add("delivery_area", "A delivery area needs at least 3 points");
        }
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        let args = SettingsArgs {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            address: form.address.trim().to_string(),
            location: location.get_untracked(),
            delivery_area: (!vertices.is_empty()).then_some(vertices),
        };
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::update_settings(&api, &args).await {
                Ok(saved) => {
                    ctx.toast_success("Settings saved.");
                    if saving.try_get_untracked().is_some() {
                        fill(saved);
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not save the settings."),
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <div class="page narrow">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading settings..."</p> }
            >
                <form class="panel" on:submit=on_submit>
                    <h1>"Restaurant settings"</h1>
                    <Field label="Name" value=name error=field_error(errors, "name") />
                    <TextArea label="Description" value=description />
                    <Field label="Address" value=address error=field_error(errors, "address") />
                    <LocationPicker location=location area=area />
                    {move || {
                        field_error(errors, "delivery_area")
                            .get()
                            .map(|msg| view! { <span class="field-error">{msg}</span> })
                    }}
                    <button type="submit" class="btn primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save settings" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
