//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__bar">
                <span class="landing-page__brand">"Fundboard"</span>
                <a href="/auth/login" class="btn btn--primary">"Sign In"</a>
            </header>
            <main class="landing-page__hero">
                <h1>"Your portfolio, one dashboard."</h1>
                <p>
                    "Balances, profits and payouts per currency, with a full transaction history for investors, brokers and administrators."
                </p>
                <a href="/auth/login" class="login-button">"Get started"</a>
            </main>
        </div>
    }
}
