//! Dialog shell shared by the create-record forms.

use leptos::prelude::*;

/// Backdrop + dialog. Clicking the backdrop or pressing Escape closes it.
#[component]
pub fn Modal(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-label=title
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}

/// Cancel / submit row at the bottom of a form dialog.
#[component]
pub fn DialogActions(
    submit_label: &'static str,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog__actions">
            <button class="btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| on_submit.run(())>
                {move || if busy.get() { "Saving..." } else { submit_label }}
            </button>
        </div>
    }
}
