//! Sidebar Component
//!
//! Sectioned navigation; the current page's entry is highlighted.

use leptos::prelude::*;

use civic_core::page::NavEntry;
use civic_core::Page;

use crate::context::use_app_context;

#[component]
pub fn Sidebar(current: Memo<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let brand = ctx.with_config(|c| c.brand_name.clone());

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-logo">"◆"</span>
                <span class="brand-name">{brand}</span>
            </div>
            <nav class="sidebar-nav">
                {Page::NAVIGATION.iter().map(|section| view! {
                    <div class="nav-section">
                        <p class="nav-section-title">{section.title}</p>
                        {section.entries.iter().map(|entry| view! { <NavButton entry=*entry current=current /> }).collect_view()}
                    </div>
                }).collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn NavButton(entry: NavEntry, current: Memo<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let page = entry.page;
    let is_active = move || current.get() == page;

    view! {
        <button
            class=move || if is_active() { "nav-item active" } else { "nav-item" }
            on:click=move |_| ctx.navigate(page)
        >
            <span class="nav-label">{entry.label}</span>
            {entry.badge.map(|count| view! { <span class="nav-badge">{count}</span> })}
        </button>
    }
}
