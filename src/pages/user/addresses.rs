//! Addresses Page
//!
//! Saved delivery addresses: add, edit, delete and pick the default.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::{self, AddressArgs};
use crate::components::{
    field_error, reload_addresses, select_address, DeleteConfirmButton, Field, LocationPicker,
};
use crate::context::use_app_context;
use crate::models::{Location, UserAddress};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::{AddressForm, FieldErrors, Validate};

#[component]
pub fn AddressesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing = RwSignal::new(None::<u32>);
    let name = RwSignal::new(String::new());
    let address_line = RwSignal::new(String::new());
    let location = RwSignal::new(None::<Location>);
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        address_line.set(String::new());
        location.set(None);
        errors.set(FieldErrors::new());
    };

    let start_edit = move |address: &UserAddress| {
        editing.set(Some(address.id));
        name.set(address.name.clone());
        address_line.set(address.address_line.clone().unwrap_or_default());
        location.set(Some(address.location));
        errors.set(FieldErrors::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = AddressForm {
            name: name.get_untracked(),
            address_line: address_line.get_untracked(),
        };
        let mut problems = form.validate();
        let picked = location.get_untracked();
        if picked.is_none() {
            problems.add("location", "Pick the location on the map");
        }
        let invalid = !problems.is_empty();
        errors.set(problems);
        let (false, Some(location)) = (invalid, picked) else {
            return;
        };

        let args = AddressArgs {
            name: form.name.trim().to_string(),
            address_line: Some(form.address_line.trim().to_string()).filter(|l| !l.is_empty()),
            location,
        };
        let target = editing.get_untracked();
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let saved = match target {
                Some(id) => api::update_address(&api, id, &args).await,
                None => api::create_address(&api, &args).await,
            };
            match saved {
                Ok(_) => {
                    ctx.toast_success(if target.is_some() { "Address updated." } else { "Address added." });
                    reload_addresses(&api, store).await;
                    if saving.try_get_untracked().is_some() {
                        reset_form();
                    }
                }
                Err(e) => ctx.toast_api_error(&e, "Could not save the address."),
            }
            set_saving.try_set(false);
        });
    };

    let delete = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            match api::delete_address(&api, id).await {
                Ok(()) => {
                    ctx.toast_success("Address deleted.");
                    {
                        let field = store.addresses();
                        let mut book = field.write();
                        if book.selected.as_ref().is_some_and(|a| a.id == id) {
                            book.selected = None;
                        }
                    }
                    reload_addresses(&api, store).await;
                }
                Err(e) => ctx.toast_api_error(&e, "Could not delete the address."),
            }
        });
    };

    view! {
        <div class="page">
            <h1>"My addresses"</h1>
            <div class="two-columns">
                <section class="panel">
                    <Show
                        when=move || !store.addresses().read().addresses.is_empty()
                        fallback=|| view! { <p class="muted">"No saved addresses yet."</p> }
                    >
                        <ul class="address-list">
                            {move || {
                                let selected = store.addresses().read().selected.as_ref().map(|a| a.id);
                                store
                                    .addresses()
                                    .read()
                                    .addresses
                                    .clone()
                                    .into_iter()
                                    .map(|address| {
                                        let id = address.id;
                                        let is_selected = selected == Some(id);
                                        let text = address.delivery_text();
                                        let label = address.name.clone();
                                        let is_default = address.is_default;
                                        view! {
                                            <li class=if is_selected { "address selected" } else { "address" }>
                                                <div>
                                                    <p class="strong">{label}</p>
                                                    <p class="muted">{text}</p>
                                                    {is_default
                                                        .then(|| view! { <span class="badge">"Default"</span> })}
                                                </div>
                                                <div class="row">
                                                    {(!is_default)
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    type="button"
                                                                    class="btn link"
                                                                    on:click=move |_| select_address(ctx, store, id)
                                                                >
                                                                    "Make default"
                                                                </button>
                                                            }
                                                        })}
                                                    <button
                                                        type="button"
                                                        class="btn link"
                                                        on:click=move |_| start_edit(&address)
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="btn link danger"
                                                        prompt="Delete this address?"
                                                        on_confirm=move |_| delete(id)
                                                    />
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </section>

                <form class="panel" on:submit=on_submit>
                    <h2>{move || if editing.get().is_some() { "Edit address" } else { "New address" }}</h2>
                    <Field label="Name" value=name placeholder="Home, Work..." error=field_error(errors, "name") />
                    <Field label="Street, building, floor" value=address_line />
                    <LocationPicker location=location />
                    {move || {
                        field_error(errors, "location")
                            .get()
                            .map(|msg| view! { <span class="field-error">{msg}</span> })
                    }}
                    <div class="row">
                        <button type="submit" class="btn primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save address" }}
                        </button>
                        <Show when=move || editing.get().is_some()>
                            <button type="button" class="btn secondary" on:click=move |_| reset_form()>
                                "Cancel"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
