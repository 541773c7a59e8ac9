//! Complaint History Page

use leptos::prelude::*;

use civic_core::display::count_by_status;
use civic_core::domain::{Complaint, StatTile, Tone, Trend};
use civic_core::sample;

use crate::components::{Badge, Card, PageHeading, StatGrid};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let complaints = sample::complaint_history();
    let counts = count_by_status(&complaints);
    let tiles = vec![
        StatTile::new("Total Complaints", counts.total().to_string(), "", Trend::None, Tone::Gray),
        StatTile::new("Resolved", counts.resolved.to_string(), "", Trend::None, Tone::Green),
        StatTile::new("In Progress", counts.in_progress.to_string(), "", Trend::None, Tone::Blue),
        StatTile::new("Open", counts.open.to_string(), "", Trend::None, Tone::Red),
    ];

    view! {
        <div class="page">
            <PageHeading title="Complaint History" description="Track all your submitted complaints and their status" />
            <StatGrid tiles=tiles />
            <Card title="Your Complaints">
                <div class="row-list">
                    {complaints.into_iter().map(|complaint| view! { <HistoryRow complaint=complaint /> }).collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn HistoryRow(complaint: Complaint) -> impl IntoView {
    view! {
        <div class="row-item">
            <div>
                <div class="report-head">
                    <h4>{complaint.id}</h4>
                    <Badge tone=complaint.priority.badge() label=complaint.priority.label() />
                </div>
                <p class="report-title">{complaint.title}</p>
                <p class="muted">{format!("{} • {}", complaint.category.label(), complaint.location)}</p>
                <p class="muted">
                    <span>{format!("Submitted: {}", complaint.date)}</span>
                    {complaint.resolved_date.map(|d| view! { <span class="resolved-on">{format!("Resolved: {}", d)}</span> })}
                </p>
            </div>
            <Badge tone=complaint.status.badge() label=complaint.status.label() />
        </div>
    }
}
