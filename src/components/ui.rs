//! Building Blocks
//!
//! Cards, badges, stat tiles and the modal frame shared by every page.

use leptos::prelude::*;

use civic_core::domain::{BadgeTone, StatTile};

/// Titled panel
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("card {}", class)>
            <header class="card-header">
                <h3 class="card-title">{title}</h3>
                {subtitle.map(|s| view! { <p class="card-subtitle">{s}</p> })}
            </header>
            <div class="card-body">{children()}</div>
        </section>
    }
}

#[component]
pub fn Badge(tone: BadgeTone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

/// Row of headline figures at the top of a page
#[component]
pub fn StatGrid(tiles: Vec<StatTile>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {tiles.into_iter().map(|tile| view! { <StatCard tile=tile /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatCard(tile: StatTile) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", tile.tone.as_str())>
            <p class="stat-label">{tile.label}</p>
            <p class="stat-value">{tile.value}</p>
            <p class="stat-note">{tile.trend.arrow()}{tile.note}</p>
        </div>
    }
}

/// Page heading with its one-line description
#[component]
pub fn PageHeading(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="page-heading">
            <h1>{title}</h1>
            <p>{description}</p>
        </div>
    }
}

/// Overlay dialog. Clicking the backdrop or the × closes it.
#[component]
pub fn Modal(#[prop(into)] title: String, #[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Horizontal progress bar, `percent` in 0..=100
#[component]
pub fn ProgressBar(percent: f64, #[prop(optional, into)] fill: String) -> impl IntoView {
    let fill = if fill.is_empty() { "fill-blue".to_string() } else { fill };
    view! {
        <div class="progress-track">
            <div class=format!("progress-fill {}", fill) style=format!("width: {}%;", percent.clamp(0.0, 100.0))></div>
        </div>
    }
}

/// Label/value rows
#[component]
pub fn DetailList(rows: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <dl class="detail-list">
            {rows.into_iter().map(|(label, value)| view! {
                <div class="detail-row">
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </div>
            }).collect_view()}
        </dl>
    }
}

/// Centered figure with a caption
#[component]
pub fn Metric(#[prop(into)] value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="metric">
            <div class="metric-value">{value}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}
