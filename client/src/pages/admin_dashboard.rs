//! Admin dashboard with record creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creating a record bumps `refresh`, which every data component on the page
//! tracks, so cards, chart and tables refetch together.

use leptos::prelude::*;

use crate::components::balance_chart::BalanceChart;
use crate::components::header::DashboardHeader;
use crate::components::investors_table::InvestorsTable;
use crate::components::record_forms::{ExpenseForm, PayoutForm, TransactionForm};
use crate::components::summary_cards::SummaryCards;
use crate::components::transactions_table::TransactionsTable;
use crate::net::api;
use crate::net::types::{DashboardScope, Investor};
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::lifetime::spawn_bound;

/// Which create dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    Transaction,
    Payout,
    Expense,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let refresh = RwSignal::new(0_u64);
    let dialog = RwSignal::new(None::<Dialog>);
    let investors = RwSignal::new(RemoteData::<Vec<Investor>>::default());

    // Picker source for the transaction and payout dialogs.
    Effect::new(move || {
        refresh.track();
        investors.update(RemoteData::begin);
        let token = session.token();
        spawn_bound(async move { api::fetch_investors(token.as_deref()).await }, move |result| {
            investors.update(|d| d.finish(result));
        });
    });

    let on_close = Callback::new(move |()| dialog.set(None));
    let on_saved = Callback::new(move |()| {
        dialog.set(None);
        refresh.update(|n| *n += 1);
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Admin Dashboard">
                <button class="btn" on:click=move |_| dialog.set(Some(Dialog::Transaction))>
                    "New transaction"
                </button>
                <button class="btn" on:click=move |_| dialog.set(Some(Dialog::Payout))>
                    "New payout"
                </button>
                <button class="btn" on:click=move |_| dialog.set(Some(Dialog::Expense))>
                    "New expense"
                </button>
                <a class="btn" href="/admin/register">"Register investor"</a>
            </DashboardHeader>
            <main class="dashboard-page__body">
                <SummaryCards scope=DashboardScope::Admin refresh=refresh />
                <BalanceChart scope=DashboardScope::Admin refresh=refresh />
                <TransactionsTable refresh=refresh show_investor=true />
                <InvestorsTable refresh=refresh />
            </main>
            {move || match dialog.get() {
                Some(Dialog::Transaction) => {
                    view! { <TransactionForm investors=investors on_close=on_close on_saved=on_saved /> }
                        .into_any()
                }
                Some(Dialog::Payout) => {
                    view! { <PayoutForm investors=investors on_close=on_close on_saved=on_saved /> }.into_any()
                }
                Some(Dialog::Expense) => view! { <ExpenseForm on_close=on_close on_saved=on_saved /> }.into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
