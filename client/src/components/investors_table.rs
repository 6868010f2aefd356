//! Admin investor roster.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Investor;
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::format::format_number;
use crate::util::lifetime::spawn_bound;

#[component]
pub fn InvestorsTable(refresh: RwSignal<u64>) -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(RemoteData::<Vec<Investor>>::default());

    Effect::new(move || {
        refresh.track();
        data.update(RemoteData::begin);
        let token = session.token();
        spawn_bound(async move { api::fetch_investors(token.as_deref()).await }, move |result| {
            data.update(|d| d.finish(result));
        });
    });

    let rows = move || {
        data.with(|d| d.value.clone().unwrap_or_default())
            .into_iter()
            .map(|investor| {
                view! {
                    <tr>
                        <td>{investor.name}</td>
                        <td>{investor.email}</td>
                        <td class="num">{format_number(investor.invested_amount)}</td>
                        <td class="num">{format_number(investor.total_profit)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="data-table">
            <h3 class="data-table__title">"Investors"</h3>
            <Show when=move || data.with(|d| d.error.is_some())>
                <p class="data-table__error">{move || data.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || data.with(|d| d.value.as_ref().is_some_and(|v| !v.is_empty()))
                fallback=move || {
                    let text = if data.with(|d| d.loading) { "Loading..." } else { "No investors yet." };
                    view! { <p class="data-table__empty">{text}</p> }
                }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th class="num">"Invested"</th>
                            <th class="num">"Profit"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </section>
    }
}

/// `<option>` list of investors for the record forms' pickers.
#[component]
pub fn InvestorOptions(investors: RwSignal<RemoteData<Vec<Investor>>>) -> impl IntoView {
    view! {
        <option value="">"Select investor"</option>
        {move || {
            investors
                .with(|d| d.value.clone().unwrap_or_default())
                .into_iter()
                .map(|inv| view! { <option value=inv.id.to_string()>{inv.name}</option> })
                .collect_view()
        }}
    }
}
