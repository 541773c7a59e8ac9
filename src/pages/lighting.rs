//! Street Lighting Page

use leptos::prelude::*;

use civic_core::domain::StreetLight;
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, DetailList, Metric, Modal, PageHeading, PieChart, StatGrid};

#[component]
pub fn LightingPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<StreetLight>);

    view! {
        <div class="page">
            <PageHeading
                title="Street Lighting Management"
                description="Monitor and manage street lighting infrastructure across the city"
            />
            <StatGrid tiles=sample::lighting_stats() />

            <div class="grid grid-3">
                <Card title="Performance Distribution">
                    <PieChart data=sample::lighting_performance() />
                </Card>
                <Card title="Monthly Energy Usage">
                    <BarChart data=sample::lighting_energy() />
                </Card>
                <Card title="Quick Stats">
                    <DetailList rows=sample::lighting_quick_stats().into_iter().map(|(k, v)| (k, v.to_string())).collect() />
                </Card>
            </div>

            <Card title="Street Light Status">
                <div class="row-list">
                    {sample::street_lights().into_iter().map(|light| {
                        let clicked = light.clone();
                        view! {
                            <div class="row-item clickable" on:click=move |_| set_selected.set(Some(clicked.clone()))>
                                <div>
                                    <h4>{light.id.clone()}</h4>
                                    <p class="muted">{light.location.clone()}</p>
                                </div>
                                <Badge tone=light.status.badge() label=light.status.label() />
                                <Metric value=format!("{}%", light.brightness) label="Brightness" />
                                <Metric value=format!("{}W", light.energy_usage) label="Usage" />
                                <Metric value=light.monthly_cost() label="Monthly" />
                                <div class="row-end">
                                    <p class="muted">"Next Maintenance:"</p>
                                    <p class={if light.next_maintenance.is_overdue() { "overdue" } else { "" }}>
                                        {light.next_maintenance.label()}
                                    </p>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Card>

            {move || selected.get().map(|light| view! {
                <Modal title="Light Details" on_close=move |_: ()| set_selected.set(None)>
                    <DetailList rows=vec![
                        ("ID", light.id.clone()),
                        ("Location", light.location.clone()),
                        ("Status", light.status.label().to_string()),
                        ("Brightness", format!("{}%", light.brightness)),
                        ("Last Maintenance", light.last_maintenance.to_string()),
                        ("Next Maintenance", light.next_maintenance.label()),
                        ("Energy Usage", format!("{}W", light.energy_usage)),
                        ("Monthly Cost", light.monthly_cost()),
                    ] />
                    <div class="form-actions">
                        <button class="btn btn-primary">"Schedule Maintenance"</button>
                        <button class="btn btn-outline">"Toggle Light"</button>
                    </div>
                </Modal>
            })}
        </div>
    }
}
