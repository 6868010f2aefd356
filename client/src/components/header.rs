//! Dashboard top bar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

#[component]
pub fn DashboardHeader(title: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let identity = move || {
        session
            .get()
            .user
            .map(|u| (u.display_name(), u.role.label().to_owned()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.logout(navigate).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <header class="dashboard-header toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            {children.map(|c| c())}
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">
                {move || identity().0}
                " ("
                <span class="toolbar__self-role">{move || identity().1}</span>
                ")"
            </span>
            <button class="btn toolbar__logout" on:click=on_logout disabled=move || busy.get() title="Logout">
                "Logout"
            </button>
        </header>
    }
}
