//! Apply Restaurant Page
//!
//! Customers apply to list their restaurant. The request goes out as
//! multipart with an optional logo and delivery-area polygon.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api::{self, ApplicationArgs, Upload};
use crate::components::{data_url, field_error, Field, FilePicker, LocationPicker, TextArea};
use crate::context::use_app_context;
use crate::geo::{self, MIN_POLYGON_VERTICES};
use crate::models::Location;
use crate::validation::{ApplyRestaurantForm, FieldErrors, Validate};

#[component]
pub fn ApplyRestaurantPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let restaurant_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let location = RwSignal::new(None::<Location>);
    let area = RwSignal::new(Vec::<Location>::new());
    let logo = RwSignal::new(None::<Upload>);
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ApplyRestaurantForm {
            restaurant_name: restaurant_name.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
        };
        let mut problems = form.validate();
        let picked = location.get_untracked();
        if picked.is_none() {
            problems.add("location", "Pick the restaurant location");
        }
        let vertices = area.get_untracked();
        if !vertices.is_empty() && vertices.len() < MIN_POLYGON_VERTICES {
            problems.add("delivery_area", "A delivery area needs at least 3 points");
        }
        let invalid = !problems.is_empty();
        errors.set(problems);
        let (false, Some(location)) = (invalid, picked) else {
            return;
        };

        let args = ApplicationArgs {
            restaurant_name: form.restaurant_name,
            description: form.description,
            address: form.address,
            location,
            delivery_area: geo::to_geojson_polygon(&vertices),
            logo: logo.get_untracked(),
        };
        set_submitting.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::apply_restaurant(&api, &args).await {
                Ok(ack) => {
                    log::info!("[APPLY] application sent for {}", args.restaurant_name.trim());
                    ctx.toast_success(if ack.message.is_empty() {
                        "Application sent. We will review it soon.".to_string()
                    } else {
                        ack.message
                    });
                    navigate("/", Default::default());
                }
                Err(e) => ctx.toast_api_error(&e, "Could not send the application."),
            }
            set_submitting.try_set(false);
        });
    };

    let message = move |field: &'static str| {
        move || field_error(errors, field).get().map(|msg| view! { <span class="field-error">{msg}</span> })
    };

    view! {
        <div class="page narrow">
            <form class="panel" on:submit=on_submit>
                <h1>"Partner with Khsa"</h1>
                <p class="muted">"Tell us about your restaurant. An administrator reviews every application."</p>
                <Field
                    label="Restaurant name"
                    value=restaurant_name
                    error=field_error(errors, "restaurant_name")
                />
                <TextArea label="Description" value=description error=field_error(errors, "description") />
                <Field label="Address" value=address error=field_error(errors, "address") />

                <div class="avatar-row">
                    {move || logo.get().map(|l| view! { <img class="logo" src=data_url(&l) alt="" /> })}
                    <FilePicker label="Logo" on_files={move |files: Vec<Upload>| logo.set(files.into_iter().next())} />
                </div>

                <LocationPicker location=location area=area />
                {message("location")}
                {message("delivery_area")}

                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send application" }}
                </button>
            </form>
        </div>
    }
}
