//! Admin page for creating investor and broker accounts.

use leptos::prelude::*;

use crate::components::header::DashboardHeader;
use crate::components::investor_form::InvestorForm;

#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    let created = RwSignal::new(None::<String>);
    let on_saved = Callback::new(move |email: String| created.set(Some(email)));

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Register Investor">
                <a class="btn" href="/admin/dashboard">"Back to dashboard"</a>
            </DashboardHeader>
            <main class="dashboard-page__body register-page">
                <Show when=move || created.with(Option::is_some)>
                    <p class="register-page__notice">
                        "Account created for " {move || created.get().unwrap_or_default()} "."
                    </p>
                </Show>
                <InvestorForm on_saved=on_saved />
            </main>
        </div>
    }
}
