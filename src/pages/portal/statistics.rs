use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, StatsPeriod};
use crate::components::SalesChart;
use crate::context::use_app_context;
use crate::models::RestaurantStats;
use crate::pagination::RequestSeq;

const PRESETS: &[(&str, StatsPeriod)] = &[
    ("Today", StatsPeriod::Daily),
    ("This week", StatsPeriod::Weekly),
    ("This month", StatsPeriod::Monthly),
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Custom period from the two date inputs, if both parse and are ordered.
fn custom_period(start: &str, end: &str) -> Option<StatsPeriod> {
    let (start, end) = (parse_date(start)?, parse_date(end)?);
    (start <= end).then_some(StatsPeriod::Custom { start, end })
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let ctx = use_app_context();

    let period = RwSignal::new(StatsPeriod::Weekly);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let (stats, set_stats) = signal(None::<RestaurantStats>);
    let (loading, set_loading) = signal(true);
    let seq = StoredValue::new_local(RequestSeq::new());

    Effect::new(move |_| {
        let selected = period.get();
        let ticket = seq.with_value(RequestSeq::next);
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::statistics(&api, selected).await;
            if seq.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => ctx.toast_api_error(&e, "Could not load statistics."),
            }
            set_loading.set(false);
        });
    });

    let apply_custom = move |_| match custom_period(&start.get_untracked(), &end.get_untracked()) {
        Some(custom) => period.set(custom),
        None => ctx.toast_error("Pick a start date on or before the end date."),
    };

    let points = Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.sales_over_time.clone()).unwrap_or_default()));

    view! {
        <div class="page">
            <h1>"Statistics"</h1>
            <div class="row period-picker">
                {PRESETS
                    .iter()
                    .map(|&(label, preset)| {
                        view! {
                            <button
                                type="button"
                                class=move || if period.get() == preset { "btn primary" } else { "btn secondary" }
                                on:click=move |_| period.set(preset)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                <input
                    type="date"
                    class="input"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    class="input"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
                <button type="button" class="btn secondary" on:click=apply_custom>
                    "Apply range"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading statistics..."</p> }
            >
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <div class="stat-grid">
                                    <div class="stat">
                                        <span class="muted">"Total sales"</span>
                                        <span class="stat-value">{format!("{:.2} SYP", s.total_sales)}</span>
                                    </div>
                                    <div class="stat">
                                        <span class="muted">"Orders"</span>
                                        <span class="stat-value">{s.total_orders}</span>
                                    </div>
                                    <div class="stat">
                                        <span class="muted">"Average order"</span>
                                        <span class="stat-value">{format!("{:.2} SYP", s.average_order_value)}</span>
                                    </div>
                                </div>
                                <p class="muted">
                                    {format!("{} to {}", s.period_info.start_date, s.period_info.end_date)}
                                </p>
                            }
                        })
                }}
                <SalesChart points=points />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_period_requires_ordered_dates() {
        assert_eq!(
            custom_period("2024-03-01", "2024-03-31"),
            Some(StatsPeriod::Custom {
                start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            })
        );
        assert_eq!(custom_period("2024-03-31", "2024-03-01"), None);
        assert_eq!(custom_period("", "2024-03-01"), None);
    }
}
