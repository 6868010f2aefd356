//! Balance / profit / payout / expense cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches its own summary for the page's scope and refetches whenever the
//! page's `refresh` counter changes (after a record is created).

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{CurrencyAmounts, DashboardScope, DashboardSummary};
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::format::format_amount;
use crate::util::lifetime::spawn_bound;

#[component]
pub fn SummaryCards(scope: DashboardScope, refresh: RwSignal<u64>) -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(RemoteData::<DashboardSummary>::default());

    Effect::new(move || {
        refresh.track();
        data.update(RemoteData::begin);
        let token = session.token();
        spawn_bound(async move { api::fetch_summary(scope, token.as_deref()).await }, move |result| {
            data.update(|d| d.finish(result));
        });
    });

    let bucket = move |pick: fn(&DashboardSummary) -> &CurrencyAmounts| {
        data.with(|d| d.value.as_ref().map(|s| pick(s).clone()).unwrap_or_default())
    };

    view! {
        <section class="summary-cards">
            <Show when=move || data.with(|d| d.error.is_some())>
                <p class="summary-cards__error">{move || data.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <StatCard title="BALANCE" loading=Signal::derive(move || data.with(|d| d.loading && d.value.is_none()))
                amounts=Signal::derive(move || bucket(|s| &s.balances)) />
            <StatCard title="PROFIT" loading=Signal::derive(move || data.with(|d| d.loading && d.value.is_none()))
                amounts=Signal::derive(move || bucket(|s| &s.profits)) />
            <StatCard title="PAYOUTS" loading=Signal::derive(move || data.with(|d| d.loading && d.value.is_none()))
                amounts=Signal::derive(move || bucket(|s| &s.payouts)) />
            <StatCard title="EXPENSES" loading=Signal::derive(move || data.with(|d| d.loading && d.value.is_none()))
                amounts=Signal::derive(move || bucket(|s| &s.expenses)) />
        </section>
    }
}

/// One card: a title and one formatted line per currency.
#[component]
fn StatCard(title: &'static str, loading: Signal<bool>, amounts: Signal<CurrencyAmounts>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            {move || {
                if loading.get() {
                    return view! { <p class="stat-card__value stat-card__value--muted">"Loading..."</p> }.into_any();
                }
                let amounts = amounts.get();
                if amounts.is_empty() {
                    return view! { <p class="stat-card__value stat-card__value--muted">"—"</p> }.into_any();
                }
                amounts
                    .into_iter()
                    .map(|(currency, amount)| {
                        view! { <p class="stat-card__value">{format_amount(amount, &currency)}</p> }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
