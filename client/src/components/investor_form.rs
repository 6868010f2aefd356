//! Create-investor form used by the admin register page.

use leptos::prelude::*;

use crate::net::api;
use crate::state::forms::{InvestorDraft, MIN_PASSWORD_LEN};
use crate::state::session::use_session;
use crate::util::lifetime::{ScopeAlive, spawn_while};

/// Inline form. On success the draft resets and `on_saved` receives the
/// created account's email for the confirmation line.
#[component]
pub fn InvestorForm(on_saved: Callback<String>) -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(InvestorDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let alive = ScopeAlive::bound_to_owner();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(InvestorDraft::validate) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let token = session.token();
        let email = body.email.clone();
        spawn_while(
            &alive,
            async move { api::create_investor(token.as_deref(), &body).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        draft.set(InvestorDraft::default());
                        on_saved.run(email);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <label class="dialog__field">
                "Name"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Email"
                <input
                    type="email"
                    autocomplete="off"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Password"
                <input
                    type="password"
                    autocomplete="new-password"
                    minlength=MIN_PASSWORD_LEN.to_string()
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Role"
                <select
                    prop:value=move || draft.with(|d| d.role.clone())
                    on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                >
                    <option value="investor">"Investor"</option>
                    <option value="broker">"Broker"</option>
                </select>
            </label>
            <label class="dialog__field">
                "Invested amount"
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || draft.with(|d| d.invested_amount.clone())
                    on:input=move |ev| draft.update(|d| d.invested_amount = event_target_value(&ev))
                />
            </label>
            <Show when=move || error.with(Option::is_some)>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Create account" }}
            </button>
        </form>
    }
}
