//! Recent transactions table.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Transaction, TransactionKind};
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::format::format_amount;
use crate::util::lifetime::spawn_bound;

fn kind_label(kind: Option<TransactionKind>) -> &'static str {
    match kind {
        Some(TransactionKind::Deposit) => "Deposit",
        Some(TransactionKind::Withdrawal) => "Withdrawal",
        None => "—",
    }
}

/// `show_investor` adds the investor column on the admin view.
#[component]
pub fn TransactionsTable(
    refresh: RwSignal<u64>,
    #[prop(optional)] show_investor: bool,
) -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(RemoteData::<Vec<Transaction>>::default());

    Effect::new(move || {
        refresh.track();
        data.update(RemoteData::begin);
        let token = session.token();
        spawn_bound(async move { api::fetch_transactions(token.as_deref()).await }, move |result| {
            data.update(|d| d.finish(result));
        });
    });

    let rows = move || {
        data.with(|d| d.value.clone().unwrap_or_default())
            .into_iter()
            .map(|tx| {
                let amount = format_amount(tx.amount, &tx.currency);
                let investor = tx.investor_name.unwrap_or_default();
                view! {
                    <tr>
                        <td>{tx.date}</td>
                        {show_investor.then(|| view! { <td>{investor}</td> })}
                        <td>{kind_label(tx.kind)}</td>
                        <td>{tx.description}</td>
                        <td class="num">{amount}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="data-table">
            <h3 class="data-table__title">"Transactions"</h3>
            <Show when=move || data.with(|d| d.error.is_some())>
                <p class="data-table__error">{move || data.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || data.with(|d| d.value.as_ref().is_some_and(|v| !v.is_empty()))
                fallback=move || {
                    let text = if data.with(|d| d.loading) { "Loading..." } else { "No transactions yet." };
                    view! { <p class="data-table__empty">{text}</p> }
                }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            {show_investor.then(|| view! { <th>"Investor"</th> })}
                            <th>"Type"</th>
                            <th>"Description"</th>
                            <th class="num">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </section>
    }
}
