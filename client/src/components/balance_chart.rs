//! Per-currency bar chart rendered as inline SVG.
//!
//! Layout is pure (`layout_bars`) so the geometry is testable without a DOM;
//! the component only maps bars onto `<rect>` elements.

#[cfg(test)]
#[path = "balance_chart_test.rs"]
mod balance_chart_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ChartData, DashboardScope};
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::format::format_amount;
use crate::util::lifetime::spawn_bound;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 180.0;
const BAR_GAP: f64 = 6.0;

/// One bar in SVG user units, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay `values` out as equal-width bars scaled to the series maximum.
///
/// Zero, negative and non-finite values get a zero-height bar so labels stay
/// aligned with their slot.
pub fn layout_bars(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let count = values.len() as f64;
    let slot = width / count;
    let bar_width = (slot - gap).max(1.0);
    let peak = values.iter().filter(|v| v.is_finite()).fold(0.0_f64, |acc, v| acc.max(*v));

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let visible = if v.is_finite() { v.max(0.0) } else { 0.0 };
            let bar_height = if peak > 0.0 { visible / peak * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
pub fn BalanceChart(scope: DashboardScope, refresh: RwSignal<u64>) -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(RemoteData::<ChartData>::default());

    Effect::new(move || {
        refresh.track();
        data.update(RemoteData::begin);
        let token = session.token();
        spawn_bound(async move { api::fetch_chart(scope, token.as_deref()).await }, move |result| {
            data.update(|d| d.finish(result));
        });
    });

    view! {
        <section class="balance-chart">
            <h3 class="balance-chart__title">"Balance history"</h3>
            {move || {
                let state = data.get();
                if let Some(error) = state.error.filter(|_| state.value.is_none()) {
                    return view! { <p class="balance-chart__error">{error}</p> }.into_any();
                }
                let Some(chart) = state.value else {
                    return view! { <p class="balance-chart__empty">"Loading..."</p> }.into_any();
                };
                if chart.series.is_empty() || chart.labels.is_empty() {
                    return view! { <p class="balance-chart__empty">"No data yet."</p> }.into_any();
                }
                render_chart(chart).into_any()
            }}
        </section>
    }
}

fn render_chart(chart: ChartData) -> impl IntoView {
    let ChartData { labels, series } = chart;
    series
        .into_iter()
        .map(|s| {
            let bars = layout_bars(&s.values, CHART_WIDTH, CHART_HEIGHT, BAR_GAP);
            let rects = bars
                .into_iter()
                .zip(s.values.iter().copied())
                .zip(labels.iter().cloned())
                .map(|((bar, value), label)| {
                    let tooltip = format!("{label}: {}", format_amount(value, &s.currency));
                    let class = if value < 0.0 { "chart-bar chart-bar--negative" } else { "chart-bar" };
                    view! {
                        <rect
                            class=class
                            x=bar.x.to_string()
                            y=bar.y.to_string()
                            width=bar.width.to_string()
                            height=bar.height.to_string()
                        >
                            <title>{tooltip}</title>
                        </rect>
                    }
                })
                .collect_view();
            let first = labels.first().cloned().unwrap_or_default();
            let last = labels.last().cloned().unwrap_or_default();
            view! {
                <figure class="balance-chart__series">
                    <figcaption>{s.currency.clone()}</figcaption>
                    <svg
                        class="balance-chart__svg"
                        viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                        preserveAspectRatio="none"
                        role="img"
                    >
                        {rects}
                    </svg>
                    <div class="balance-chart__axis">
                        <span>{first}</span>
                        <span>{last}</span>
                    </div>
                </figure>
            }
        })
        .collect_view()
}
