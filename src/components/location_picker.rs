//! Location Picker Component
//!
//! Point selection from the device position or typed coordinates. With an
//! `area` signal it also collects delivery-area polygon vertices.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::geo::{self, MIN_POLYGON_VERTICES};
use crate::models::Location;

#[component]
pub fn LocationPicker(
    location: RwSignal<Option<Location>>,
    /// Delivery-area vertices; polygon tools are hidden without it.
    #[prop(optional)]
    area: Option<RwSignal<Vec<Location>>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let lat = RwSignal::new(String::new());
    let lon = RwSignal::new(String::new());
    let (locating, set_locating) = signal(false);
    let (input_error, set_input_error) = signal(None::<String>);

    // Keep the inputs in step with the chosen point
    Effect::new(move |_| {
        if let Some(loc) = location.get() {
            lat.set(format!("{:.6}", loc.latitude));
            lon.set(format!("{:.6}", loc.longitude));
        }
    });

    let use_my_location = move |_| {
        set_locating.set(true);
        spawn_local(async move {
            match geo::current_position().await {
                Ok(loc) => {
                    location.try_set(Some(loc));
                }
                Err(e) => {
                    log::warn!("[GEO] {e}");
                    ctx.toast_info("Could not get your location. Pick the point manually.");
                    if location.try_get_untracked().flatten().is_none() {
                        location.try_set(Some(ctx.config().fallback_center));
                    }
                }
            }
            set_locating.try_set(false);
        });
    };

    let typed = move || geo::parse_location(&lat.get_untracked(), &lon.get_untracked());

    let apply_typed = move |_| match typed() {
        Some(loc) => {
            set_input_error.set(None);
            location.set(Some(loc));
        }
        None => set_input_error.set(Some("Latitude must be -90..90 and longitude -180..180".into())),
    };

    view! {
        <div class="location-picker">
            <div class="location-current">
                <span class="field-label">"Location"</span>
                <span>
                    {move || {
                        location
                            .get()
                            .map(|l| geo::format_location(&l))
                            .unwrap_or_else(|| "Not set".to_string())
                    }}
                </span>
                <button type="button" class="btn secondary" disabled=move || locating.get() on:click=use_my_location>
                    {move || if locating.get() { "Locating..." } else { "Use my location" }}
                </button>
            </div>

            <div class="location-inputs">
                <input
                    class="input"
                    placeholder="Latitude"
                    prop:value=move || lat.get()
                    on:input=move |ev| lat.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    placeholder="Longitude"
                    prop:value=move || lon.get()
                    on:input=move |ev| lon.set(event_target_value(&ev))
                />
                <button type="button" class="btn secondary" on:click=apply_typed>
                    "Set point"
                </button>
            </div>
            {move || input_error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}

            {area
                .map(|area| {
                    let add_vertex = move |_| match typed() {
                        Some(loc) => {
                            set_input_error.set(None);
                            area.update(|v| v.push(loc));
                        }
                        None => set_input_error.set(Some("Enter valid coordinates for the vertex".into())),
                    };
                    view! {
                        <div class="polygon-tools">
                            <h4>"Delivery area"</h4>
                            <p class="muted">
                                {move || {
                                    let count = area.with(Vec::len);
                                    if count < MIN_POLYGON_VERTICES {
                                        format!("{count} points, at least {MIN_POLYGON_VERTICES} needed")
                                    } else {
                                        format!("{count} points")
                                    }
                                }}
                            </p>
                            <ol class="vertex-list">
                                {move || {
                                    area.get()
                                        .iter()
                                        .map(|v| view! { <li>{geo::format_location(v)}</li> })
                                        .collect_view()
                                }}
                            </ol>
                            <div class="row">
                                <button type="button" class="btn secondary" on:click=add_vertex>
                                    "Add typed point"
                                </button>
                                <button
                                    type="button"
                                    class="btn secondary"
                                    disabled=move || area.with(Vec::is_empty)
                                    on:click=move |_| area.update(|v| { v.pop(); })
                                >
                                    "Undo"
                                </button>
                                <button
                                    type="button"
                                    class="btn danger"
                                    disabled=move || area.with(Vec::is_empty)
                                    on:click=move |_| area.set(Vec::new())
                                >
                                    "Clear"
                                </button>
                            </div>
                        </div>
                    }
                })}
        </div>
    }
}
