//! Admin create-record dialogs: transaction, payout, expense.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dialog edits a draft from `state::forms`, validates locally, posts the
//! typed body and calls `on_saved` on success so the page can bump its
//! refresh counter and close the dialog. Backend errors stay in the dialog.

use leptos::prelude::*;

use crate::components::investors_table::InvestorOptions;
use crate::components::modal::{DialogActions, Modal};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Investor;
use crate::state::forms::{ExpenseDraft, PayoutDraft, TransactionDraft};
use crate::state::remote::RemoteData;
use crate::state::session::use_session;
use crate::util::lifetime::{ScopeAlive, spawn_while};

/// Submit plumbing shared by the dialogs.
#[derive(Clone)]
struct Submitter {
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    alive: ScopeAlive,
    on_saved: Callback<()>,
}

impl Submitter {
    fn new(on_saved: Callback<()>) -> Self {
        Self {
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            alive: ScopeAlive::bound_to_owner(),
            on_saved,
        }
    }

    fn submit<B, Fut>(&self, validated: Result<B, &'static str>, send: impl FnOnce(B) -> Fut)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }
        let body = match validated {
            Ok(body) => body,
            Err(message) => {
                self.error.set(Some(message.to_owned()));
                return;
            }
        };
        self.error.set(None);
        self.busy.set(true);
        let busy = self.busy;
        let error = self.error;
        let on_saved = self.on_saved;
        spawn_while(&self.alive, send(body), move |result| {
            busy.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

#[component]
fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn TransactionForm(
    investors: RwSignal<RemoteData<Vec<Investor>>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(TransactionDraft::default());
    let submitter = Submitter::new(on_saved);
    let busy = submitter.busy;
    let error = submitter.error;

    let on_submit = Callback::new(move |()| {
        let token = session.token();
        submitter.submit(draft.with_untracked(TransactionDraft::validate), move |body| async move {
            api::create_transaction(token.as_deref(), &body).await
        });
    });

    view! {
        <Modal title="New transaction" on_close=on_close>
            <label class="dialog__field">
                "Investor"
                <select on:change=move |ev| draft.update(|d| d.investor_id = event_target_value(&ev))>
                    <InvestorOptions investors=investors />
                </select>
            </label>
            <label class="dialog__field">
                "Type"
                <select on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))>
                    <option value="deposit" selected=true>"Deposit"</option>
                    <option value="withdrawal">"Withdrawal"</option>
                </select>
            </label>
            <label class="dialog__field">
                "Currency"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.currency.clone())
                    on:input=move |ev| draft.update(|d| d.currency = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Amount"
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Date"
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Description"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </label>
            <FormError error=error />
            <DialogActions submit_label="Create" busy=busy on_cancel=on_close on_submit=on_submit />
        </Modal>
    }
}

#[component]
pub fn PayoutForm(
    investors: RwSignal<RemoteData<Vec<Investor>>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(PayoutDraft::default());
    let submitter = Submitter::new(on_saved);
    let busy = submitter.busy;
    let error = submitter.error;

    let on_submit = Callback::new(move |()| {
        let token = session.token();
        submitter.submit(draft.with_untracked(PayoutDraft::validate), move |body| async move {
            api::create_payout(token.as_deref(), &body).await
        });
    });

    view! {
        <Modal title="New payout" on_close=on_close>
            <label class="dialog__field">
                "Investor"
                <select on:change=move |ev| draft.update(|d| d.investor_id = event_target_value(&ev))>
                    <InvestorOptions investors=investors />
                </select>
            </label>
            <label class="dialog__field">
                "Currency"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.currency.clone())
                    on:input=move |ev| draft.update(|d| d.currency = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Amount"
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Date"
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Note"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.note.clone())
                    on:input=move |ev| draft.update(|d| d.note = event_target_value(&ev))
                />
            </label>
            <FormError error=error />
            <DialogActions submit_label="Create" busy=busy on_cancel=on_close on_submit=on_submit />
        </Modal>
    }
}

#[component]
pub fn ExpenseForm(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(ExpenseDraft::default());
    let submitter = Submitter::new(on_saved);
    let busy = submitter.busy;
    let error = submitter.error;

    let on_submit = Callback::new(move |()| {
        let token = session.token();
        submitter.submit(draft.with_untracked(ExpenseDraft::validate), move |body| async move {
            api::create_expense(token.as_deref(), &body).await
        });
    });

    view! {
        <Modal title="New expense" on_close=on_close>
            <label class="dialog__field">
                "Category"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Currency"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.currency.clone())
                    on:input=move |ev| draft.update(|d| d.currency = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Amount"
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Date"
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                />
            </label>
            <label class="dialog__field">
                "Description"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </label>
            <FormError error=error />
            <DialogActions submit_label="Create" busy=busy on_cancel=on_close on_submit=on_submit />
        </Modal>
    }
}
