//! Dashboard Page
//!
//! Status counts, category and priority charts, and the most recent
//! complaints. New complaints are filed through `ComplaintForm`.

use leptos::prelude::*;

use civic_core::display::count_by_status;
use civic_core::domain::{Complaint, Entity, StatTile, Tone, Trend};
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, ComplaintForm, PieChart, StatGrid};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (form_open, set_form_open) = signal(false);
    let limit = ctx.with_config(|c| c.recent_reports_limit);

    let tiles = move || {
        let complaints = store.complaints().read();
        let counts = count_by_status(&complaints);
        vec![
            StatTile::new("Total Reports", counts.total().to_string(), "+5.2%", Trend::Up, Tone::Orange),
            StatTile::new("Active Issues", counts.open.to_string(), "Past 7 days", Trend::None, Tone::Red),
            StatTile::new("In Progress", counts.in_progress.to_string(), "5 More to resolve", Trend::Down, Tone::Blue),
            StatTile::new("Resolved", counts.resolved.to_string(), "15% Resolved rate", Trend::Up, Tone::Green),
        ]
    };
    let recent = move || store.complaints().read().iter().take(limit).cloned().collect::<Vec<_>>();

    view! {
        <div class="page">
            <div class="page-heading with-action">
                <div>
                    <h1>"Dashboard Overview"</h1>
                    <p>"Track, drive insights and solve issue reporting and resolution"</p>
                </div>
                <button class="btn btn-success" on:click=move |_| set_form_open.set(true)>"+ Add Complaint"</button>
            </div>

            {move || view! { <StatGrid tiles=tiles() /> }}

            <div class="grid grid-3">
                <Card title="Issue Categories Distribution" class="span-2">
                    <BarChart data=sample::category_distribution() />
                </Card>
                <Card title="Priority Distribution">
                    <PieChart data=sample::priority_distribution() />
                </Card>
            </div>

            <Card title="Recent Reports">
                <div class="report-list">
                    <For
                        each=recent
                        key=|complaint| complaint.id()
                        children=move |complaint| view! { <ReportRow complaint=complaint /> }
                    />
                </div>
            </Card>

            <Show when=move || form_open.get()>
                <ComplaintForm on_close=move |_: ()| set_form_open.set(false) />
            </Show>
        </div>
    }
}

#[component]
fn ReportRow(complaint: Complaint) -> impl IntoView {
    view! {
        <div class="report-row">
            <div class="report-main">
                <div class="report-head">
                    <h4>{complaint.id}</h4>
                    <Badge tone=complaint.priority.badge() label=complaint.priority.label() />
                </div>
                <p class="report-title">{complaint.title}</p>
                <p class="muted">{complaint.location}</p>
                <p class="muted">{complaint.description}</p>
                <p class="report-date">{complaint.date.to_string()}</p>
            </div>
            <Badge tone=complaint.status.badge() label=complaint.status.label() />
        </div>
    }
}
