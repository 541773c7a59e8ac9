//! Road Management Page

use leptos::prelude::*;

use civic_core::domain::{BadgeTone, Road};
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, PageHeading, PieChart, ProgressBar, StatGrid};

#[component]
pub fn RoadsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading
                title="Road Management"
                description="Monitor and manage road infrastructure and maintenance projects"
            />
            <StatGrid tiles=sample::road_stats() />

            <div class="grid grid-2">
                <Card title="Road Condition Distribution">
                    <PieChart data=sample::road_conditions() />
                </Card>
                <Card title="Quarterly Maintenance Budget">
                    <BarChart data=sample::maintenance_budget() />
                </Card>
            </div>

            <div class="grid grid-2">
                <Card title="Road Inventory">
                    <div class="row-list">
                        {sample::roads().into_iter().map(|road| view! { <RoadRow road=road /> }).collect_view()}
                    </div>
                </Card>
                <Card title="Active Maintenance Projects">
                    {sample::maintenance_projects().into_iter().map(|project| view! {
                        <div class="project">
                            <div class="project-head">
                                <h4>{project.name}</h4>
                                <span class="muted">{project.budget}</span>
                            </div>
                            <ProgressBar percent=f64::from(project.progress) />
                            <div class="project-foot muted">
                                <span>{format!("{}% Complete", project.progress)}</span>
                                <span>{format!("Due: {}", project.deadline)}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </Card>
            </div>

            <Card title="Recent Road Reports">
                <div class="row-list">
                    {sample::road_reports().into_iter().map(|report| view! {
                        <div class="row-item">
                            <div>
                                <h4>{report.id}</h4>
                                <p class="muted">{report.location}</p>
                                <p>{report.issue}</p>
                            </div>
                            <div class="row-end button-row">
                                <Badge tone=report.priority.badge() label=report.priority.label() />
                                <Badge tone=BadgeTone::Outline label=report.status.label() />
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn RoadRow(road: Road) -> impl IntoView {
    let overdue = road.next_maintenance.is_overdue();
    view! {
        <div class="row-item">
            <div>
                <h4>{road.name}</h4>
                <p class="muted">{format!("{} • {} km", road.id, road.length_km)}</p>
                <div class="button-row">
                    <Badge tone=road.condition.badge() label=road.condition.label() />
                    <Badge tone=BadgeTone::Outline label=format!("{} Traffic", road.traffic.label()) />
                </div>
                {(!road.issues.is_empty()).then(|| view! {
                    <div class="issue-tags">
                        <span class="muted">"Issues:"</span>
                        {road.issues.into_iter().map(|issue| view! { <Badge tone=BadgeTone::Destructive label=issue /> }).collect_view()}
                    </div>
                })}
            </div>
            <div class="row-end">
                <p class="muted">"Last Inspection:"</p>
                <p>{road.last_inspection.to_string()}</p>
                <p class="muted">"Next Maintenance:"</p>
                <p class={if overdue { "overdue" } else { "" }}>{road.next_maintenance.label()}</p>
            </div>
        </div>
    }
}
