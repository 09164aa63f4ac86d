//! Sales bar chart drawn as inline SVG.

use leptos::prelude::*;

use crate::models::SalesPoint;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 220.0;
const GAP: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Bars scaled so the largest value fills the chart height.
pub fn layout_bars(points: &[SalesPoint], width: f64, height: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = points.iter().map(|p| p.sales).fold(0.0_f64, f64::max);
    let slot = width / points.len() as f64;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let h = if max > 0.0 { p.sales.max(0.0) / max * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + GAP / 2.0,
                y: height - h,
                width: (slot - GAP).max(1.0),
                height: h,
                label: p.date.clone(),
                value: p.sales,
            }
        })
        .collect()
}

#[component]
pub fn SalesChart(#[prop(into)] points: Signal<Vec<SalesPoint>>) -> impl IntoView {
    let bars = move || points.with(|p| layout_bars(p, WIDTH, HEIGHT));

    view! {
        <Show
            when=move || points.with(|p| !p.is_empty())
            fallback=|| view! { <p class="muted centered">"No sales in this period."</p> }
        >
            <svg class="sales-chart" viewBox=format!("0 0 {WIDTH} {HEIGHT}") preserveAspectRatio="none">
                {move || {
                    bars()
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect x=bar.x y=bar.y width=bar.width height=bar.height class="bar">
                                    <title>{format!("{}: {:.2} SYP", bar.label, bar.value)}</title>
                                </rect>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, sales: f64) -> SalesPoint {
        SalesPoint { date: date.into(), sales }
    }

    #[test]
    fn test_tallest_bar_fills_height() {
        let bars = layout_bars(&[point("2024-05-01", 50.0), point("2024-05-02", 100.0)], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[1].x, 102.0);
    }

    #[test]
    fn test_all_zero_sales() {
        let bars = layout_bars(&[point("a", 0.0), point("b", 0.0)], 200.0, 100.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 100.0));
        assert!(layout_bars(&[], 200.0, 100.0).is_empty());
    }
}
