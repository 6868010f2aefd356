//! Broker dashboard.

use leptos::prelude::*;

use crate::components::balance_chart::BalanceChart;
use crate::components::header::DashboardHeader;
use crate::components::summary_cards::SummaryCards;
use crate::components::transactions_table::TransactionsTable;
use crate::net::types::DashboardScope;

#[component]
pub fn BrokerDashboardPage() -> impl IntoView {
    let refresh = RwSignal::new(0_u64);

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Broker Dashboard">
                <button class="btn" on:click=move |_| refresh.update(|n| *n += 1) title="Reload">
                    "Refresh"
                </button>
            </DashboardHeader>
            <main class="dashboard-page__body">
                <SummaryCards scope=DashboardScope::Broker refresh=refresh />
                <BalanceChart scope=DashboardScope::Broker refresh=refresh />
                <TransactionsTable refresh=refresh show_investor=true />
            </main>
        </div>
    }
}
