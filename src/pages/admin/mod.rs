//! Site Administration
//!
//! Paged users, restaurants and partner applications. Every list refetches
//! when its query changes and drops responses it no longer waits for.

mod applications;
mod dashboard;
mod restaurants;
mod users;

pub use applications::ApplicationsPage;
pub use dashboard::AdminDashboardPage;
pub use restaurants::AdminRestaurantsPage;
pub use users::UsersPage;

use std::future::Future;
use std::rc::Rc;

use bearer_client::ClientError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::debounce::Debouncer;
use crate::models::Page;
use crate::pagination::{ListQuery, RequestSeq};

/// Reactive state of one paged admin list.
struct PagedList<T: Send + Sync + 'static> {
    query: RwSignal<ListQuery>,
    items: RwSignal<Vec<T>>,
    total_pages: RwSignal<u32>,
    loading: RwSignal<bool>,
    generation: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedList<T> {}

impl<T: Send + Sync + 'static> PagedList<T> {
    fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(Rc<ApiClient>, ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<Page<T>, ClientError>> + 'static,
    {
        let ctx = use_app_context();
        let list = Self {
            query: RwSignal::new(ListQuery::new(ctx.config().page_size)),
            items: RwSignal::new(Vec::new()),
            total_pages: RwSignal::new(1),
            loading: RwSignal::new(true),
            generation: RwSignal::new(0),
        };
        let seq = StoredValue::new_local(RequestSeq::new());

        Effect::new(move |_| {
            let query = list.query.get();
            list.generation.track();
            let ticket = seq.with_value(RequestSeq::next);
            list.loading.set(true);
            let request = fetch(ctx.api(), query);
            spawn_local(async move {
                let result = request.await;
                if seq.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                    log::debug!("[ADMIN] dropped stale list response");
                    return;
                }
                match result {
                    Ok(page) => {
                        list.items.set(page.items);
                        list.total_pages.set(page.total_pages.max(1));
                    }
                    Err(e) => ctx.toast_api_error(&e, "Could not load the list."),
                }
                list.loading.set(false);
            });
        });

        list
    }

    /// Refetches the current page.
    fn reload(&self) {
        self.generation.try_update(|g| *g = g.wrapping_add(1));
    }

    fn go_to(&self, page: u32) {
        let total = self.total_pages.get_untracked();
        self.query.update(|q| q.go_to(page, total));
    }

    fn set_filter(&self, filter: String) {
        self.query.update(|q| q.set_filter(filter));
    }

    /// Input handler that applies the search term once typing pauses.
    fn search_handler(&self) -> impl Fn(String) + Copy + 'static {
        let ctx = use_app_context();
        let debouncer = StoredValue::new_local(Debouncer::new(ctx.config().search_debounce));
        let query = self.query;
        move |term: String| {
            debouncer.with_value(|d| {
                d.schedule(move || {
                    query.try_update(|q| q.set_search(term));
                })
            });
        }
    }
}
