//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::Role;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_register::AdminRegisterPage,
    broker_dashboard::BrokerDashboardPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
};
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::guard::{Access, RouteGuard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, rehydrates it once mounted in the browser and
/// wraps every route in a `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::open_or_inert();
    provide_context(session);

    // Effects only run in the browser, so the server always renders the
    // loading frame and hydration matches it.
    Effect::new(move |_| {
        session.rehydrate();
        session.watch();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fundboard.css"/>
        <Title text="Fundboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard access=Access::GuestOnly><LandingPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"))
                    view=|| view! { <RouteGuard access=Access::GuestOnly><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard access=Access::HomeOf(AppRoute::Dashboard)>
                                <DashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("broker"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RouteGuard access=Access::Roles(vec![Role::Broker])>
                                <BrokerDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RouteGuard access=Access::Roles(vec![Role::Admin])>
                                <AdminDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("register"))
                    view=|| {
                        view! {
                            <RouteGuard access=Access::Roles(vec![Role::Admin])>
                                <AdminRegisterPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
