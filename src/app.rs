//! CivicTracker Frontend App
//!
//! Landing page while signed out; sidebar, header and the current page once
//! signed in. The current page is mirrored into the location hash.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use civic_core::{AppConfig, Page};

use crate::components::{Header, Landing, LoginModal, Sidebar};
use crate::context::{use_app_context, AppContext};
use crate::location;
use crate::pages::{
    AiReportPage, CategoriesPage, DashboardPage, DataIssuesPage, HistoryPage, LightingPage, MapPage, RoadsPage,
    SettingsPage, UsersPage, WaterPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_json_or_default(include_str!("../config/app.json"));
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Keep #/page in step with the session
    Effect::new(move |_| {
        let session = ctx.session();
        if session.is_authenticated() {
            location::set_hash(&session.current_page().hash());
        }
    });

    // Back/forward and edited links
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let page = Page::from_hash(&location::current_hash());
        log::debug!("hash changed to {}", page.id());
        ctx.navigate(page);
    });
    on_cleanup(move || hash_listener.remove());

    let authenticated = Memo::new(move |_| ctx.session().is_authenticated());

    view! {
        <Show
            when=move || authenticated.get()
            fallback=move || view! {
                <Landing />
                <Show when=move || ctx.session().login_overlay_visible()>
                    <LoginModal />
                </Show>
            }
        >
            <Shell />
        </Show>
    }
}

/// Signed-in layout
#[component]
fn Shell() -> impl IntoView {
    let ctx = use_app_context();
    let page = Memo::new(move |_| ctx.session().current_page());

    view! {
        <div class="app-layout">
            <Sidebar current=page />
            <div class="main-column">
                <Header current=page />
                <main class="main-content">
                    {move || match page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Map => view! { <MapPage /> }.into_any(),
                        Page::AiReport => view! { <AiReportPage /> }.into_any(),
                        Page::Lighting => view! { <LightingPage /> }.into_any(),
                        Page::Roads => view! { <RoadsPage /> }.into_any(),
                        Page::Water => view! { <WaterPage /> }.into_any(),
                        Page::Users => view! { <UsersPage /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                        Page::History => view! { <HistoryPage /> }.into_any(),
                        Page::Categories => view! { <CategoriesPage /> }.into_any(),
                        Page::DataIssues => view! { <DataIssuesPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
