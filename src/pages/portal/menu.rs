//! Manage Menu Page
//!
//! Menu items of the staff member's restaurant. Create and edit share one
//! dialog; existing images can be dropped and new ones uploaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use super::staff_restaurant_id;
use crate::api::{self, MenuItemUpload, Upload};
use crate::components::{
    data_url, field_error, DeleteConfirmButton, Field, FilePicker, Modal, TextArea,
};
use crate::context::use_app_context;
use crate::models::{format_price, MenuItem};
use crate::store::use_app_store;
use crate::validation::{FieldErrors, MenuItemForm, Validate};

#[component]
pub fn ManageMenuPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let restaurant_id = staff_restaurant_id(store);

    let (items, set_items) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);

    // Dialog state
    let open = RwSignal::new(false);
    let editing = RwSignal::new(None::<MenuItem>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let ingredients = RwSignal::new(String::new());
    let available = RwSignal::new(true);
    let new_images = RwSignal::new(Vec::<Upload>::new());
    let delete_images = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let load = move || {
        let Some(rid) = restaurant_id else {
            set_loading.set(false);
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api::get_menu(&api, rid).await {
                Ok(list) => {
                    set_items.try_set(list);
                }
                Err(e) => ctx.toast_api_error(&e, "Could not load the menu."),
            }
            set_loading.try_set(false);
        });
    };
    load();

    let open_dialog = move |item: Option<MenuItem>| {
        let form = item
            .as_ref()
            .map(|i| MenuItemForm {
                name: i.name.clone(),
                description: i.description.clone().unwrap_or_default(),
                price: i.price.to_string(),
                is_available: i.is_available,
                removable_ingredients: i.removable_ingredients.join(", "),
            })
            .unwrap_or_default();
        name.set(form.name);
        description.set(form.description);
        price.set(form.price);
        ingredients.set(form.removable_ingredients);
        available.set(form.is_available);
        new_images.set(Vec::new());
        delete_images.set(Vec::new());
        errors.set(FieldErrors::new());
        editing.set(item);
        open.set(true);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = MenuItemForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            is_available: available.get_untracked(),
            removable_ingredients: ingredients.get_untracked(),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        let upload = MenuItemUpload {
            form,
            new_images: new_images.get_untracked(),
            delete_images: delete_images.get_untracked(),
        };
        let target = editing.get_untracked().map(|i| i.id);
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let saved = match target {
                Some(id) => api::update_menu_item(&api, id, &upload).await,
                None => api::create_menu_item(&api, &upload).await,
            };
            match saved {
                Ok(_) => {
                    ctx.toast_success(if target.is_some() { "Item updated." } else { "Item added." });
                    open.try_set(false);
                    load();
                }
                Err(e) => ctx.toast_api_error(&e, "Could not save the item."),
            }
            set_saving.try_set(false);
        });
    };

    let delete = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            match api::delete_menu_item(&api, id).await {
                Ok(()) => {
                    ctx.toast_success("Item deleted.");
                    set_items.try_update(|list| list.retain(|i| i.id != id));
                }
                Err(e) => ctx.toast_api_error(&e, "Could not delete the item."),
            }
        });
    };

    let toggle_existing = move |url: String| {
        delete_images.update(|list| {
            if let Some(pos) = list.iter().position(|u| *u == url) {
                list.remove(pos);
            } else {
                list.push(url);
            }
        });
    };

    let title = Signal::derive(move || {
        if editing.with(Option::is_some) { "Edit item".to_string() } else { "New item".to_string() }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Menu"</h1>
                <button
                    type="button"
                    class="btn primary"
                    disabled=restaurant_id.is_none()
                    on:click=move |_| open_dialog(None)
                >
                    "Add item"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading menu..."</p> }
            >
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted centered">"No items yet."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Available"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        let label = item.name.clone();
                                        let cost = format_price(item.price);
                                        let is_available = item.is_available;
                                        view! {
                                            <tr>
                                                <td>{label}</td>
                                                <td>{cost}</td>
                                                <td>{if is_available { "Yes" } else { "No" }}</td>
                                                <td class="row">
                                                    <button
                                                        type="button"
                                                        class="btn link"
                                                        on:click=move |_| open_dialog(Some(item.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="btn link danger"
                                                        prompt="Remove from the menu?"
                                                        on_confirm=move |_| delete(id)
                                                    />
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

            <Modal open=open on_close=move |_| open.set(false) title=title>
                <form on:submit=on_submit>
                    <Field label="Name" value=name error=field_error(errors, "name") />
                    <TextArea label="Description" value=description />
                    <Field label="Price (SYP)" value=price kind="number" error=field_error(errors, "price") />
                    <Field
                        label="Removable ingredients"
                        value=ingredients
                        placeholder="onion, garlic, pickles"
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || available.get()
                            on:change=move |ev| available.set(event_target_checked(&ev))
                        />
                        "Available"
                    </label>

                    <div class="image-grid">
                        {move || {
                            editing
                                .get()
                                .map(|item| item.images)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|url| {
                                    let src = ctx.image_url(&url);
                                    let key = url.clone();
                                    let marked = move || delete_images.with(|d| d.contains(&key));
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if marked() { "thumb removed" } else { "thumb" }
                                            title="Toggle removal"
                                            on:click=move |_| toggle_existing(url.clone())
                                        >
                                            <img src=src alt="" />
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                        {move || {
                            new_images
                                .get()
                                .iter()
                                .enumerate()
                                .map(|(index, upload)| {
                                    view! {
                                        <button
                                            type="button"
                                            class="thumb new"
                                            title="Remove"
                                            on:click=move |_| new_images.update(|list| { list.remove(index); })
                                        >
                                            <img src=data_url(upload) alt="" />
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <FilePicker
                        label="Add images"
                        multiple=true
                        on_files={move |files: Vec<Upload>| new_images.update(|list| list.extend(files))}
                    />

                    <button type="submit" class="btn primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </Modal>
        </div>
    }
}
