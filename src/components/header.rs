//! Header Component
//!
//! Page title plus the signed-in user's menu.

use leptos::prelude::*;

use civic_core::{Page, SessionEvent};

use crate::context::use_app_context;

#[component]
pub fn Header(current: Memo<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.with_config(|c| c.current_user.clone());
    let (menu_open, set_menu_open) = signal(false);

    let go = move |id: &'static str| {
        set_menu_open.set(false);
        ctx.navigate(Page::resolve(id));
    };

    view! {
        <header class="top-bar">
            <h2 class="top-bar-title">{move || current.get().title()}</h2>
            <div class="user-menu">
                <button class="user-menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    <span class="avatar">{user.initial().to_string()}</span>
                    <span class="user-text">
                        <span class="user-name">{user.name.clone()}</span>
                        <span class="user-role">{user.role.clone()}</span>
                    </span>
                    <span class=move || if menu_open.get() { "chevron open" } else { "chevron" }>"▾"</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="user-dropdown">
                        <button on:click=move |_| go("profile")>"My Profile"</button>
                        <button on:click=move |_| go(Page::History.id())>"Complaint History"</button>
                        <hr />
                        <button class="danger" on:click=move |_| ctx.dispatch(SessionEvent::Logout)>"Sign Out"</button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
