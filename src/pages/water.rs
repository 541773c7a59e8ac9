//! Water Issues Page

use leptos::prelude::*;

use civic_core::domain::{BadgeTone, QualityReading};
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, Metric, PageHeading, PieChart, StatGrid};

#[component]
pub fn WaterPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading
                title="Water System Management"
                description="Monitor water infrastructure, quality, and emergency response"
            />
            <StatGrid tiles=sample::water_stats() />

            <div class="grid grid-2">
                <Card title="System Status Distribution">
                    <PieChart data=sample::water_system_status() />
                </Card>
                <Card title="Water Quality Metrics">
                    <BarChart data=sample::water_quality() />
                </Card>
            </div>

            <div class="grid grid-3">
                <Card title="Water Infrastructure Status" class="span-2">
                    <div class="row-list">
                        {sample::water_assets().into_iter().map(|asset| view! {
                            <div class="row-item">
                                <div>
                                    <div class="button-row">
                                        <h4>{asset.id}</h4>
                                        <Badge tone=BadgeTone::Outline label=asset.kind />
                                    </div>
                                    <p class="muted">{asset.location}</p>
                                    <div class="button-row">
                                        <Metric value=format!("{} PSI", asset.pressure) label="Pressure" />
                                        <Metric value=format!("{} L/min", asset.flow_rate) label="Flow Rate" />
                                    </div>
                                    <p class="muted">{format!("Last Inspection: {}", asset.last_inspection)}</p>
                                </div>
                                <Badge tone=asset.status.badge() label=asset.status.label() />
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
                <Card title="Emergency Alerts">
                    <div class="row-list">
                        {sample::emergency_alerts().into_iter().map(|alert| view! {
                            <div class="row-item alert">
                                <div>
                                    <h4>{alert.kind}</h4>
                                    <p class="muted">{alert.location}</p>
                                    <p class="muted">{alert.time}</p>
                                </div>
                                <Badge tone=alert.severity.badge() label=alert.severity.label() />
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </div>

            <div class="grid grid-2">
                <Card title="Detailed Quality Metrics">
                    <div class="row-list">
                        {sample::quality_readings().into_iter().map(|reading| view! { <ReadingRow reading=reading /> }).collect_view()}
                    </div>
                </Card>
                <Card title="Maintenance Schedule">
                    <div class="row-list">
                        {sample::water_schedule().into_iter().map(|task| view! {
                            <div class="row-item">
                                <div>
                                    <h4>{task.task}</h4>
                                    <p class="muted">{format!("Scheduled: {}", task.date)}</p>
                                </div>
                                <Badge tone=task.priority.badge() label=task.priority.label() />
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn ReadingRow(reading: QualityReading) -> impl IntoView {
    let (tone, status) = if reading.within_range {
        (BadgeTone::Success, "Normal")
    } else {
        (BadgeTone::Destructive, "Out of Range")
    };
    view! {
        <div class="row-item">
            <div>
                <h4>{reading.parameter}</h4>
                <p class="muted">{format!("Range: {}", reading.range)}</p>
            </div>
            <div class="row-end">
                <p>{reading.value}</p>
                <Badge tone=tone label=status />
            </div>
        </div>
    }
}
