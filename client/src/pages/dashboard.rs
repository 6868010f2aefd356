//! Investor dashboard.

use leptos::prelude::*;

use crate::components::balance_chart::BalanceChart;
use crate::components::header::DashboardHeader;
use crate::components::summary_cards::SummaryCards;
use crate::components::transactions_table::TransactionsTable;
use crate::net::types::DashboardScope;
use crate::state::session::use_session;
use crate::util::format::format_number;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    // Never bumped here; investors cannot create records.
    let refresh = RwSignal::new(0_u64);

    let invested = move || {
        session
            .get()
            .user
            .and_then(|u| u.invested_amount)
            .map(format_number)
    };

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Investor Dashboard">
                <Show when=move || invested().is_some()>
                    <span class="toolbar__meta">"Invested: " {move || invested().unwrap_or_default()}</span>
                </Show>
            </DashboardHeader>
            <main class="dashboard-page__body">
                <SummaryCards scope=DashboardScope::Investor refresh=refresh />
                <BalanceChart scope=DashboardScope::Investor refresh=refresh />
                <TransactionsTable refresh=refresh />
            </main>
        </div>
    }
}
