//! AI Report Page
//!
//! Report request form with a simulated generation run. The run ends after
//! `report_generation_ms`; leaving the page cancels it.

use leptos::prelude::*;

use civic_core::domain::{BadgeTone, Priority};
use civic_core::report::{Department, GenerationState, ReportPeriod, ReportRequest, ReportType};
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, PageHeading, StatGrid};
use crate::context::use_app_context;
use crate::timer::DelayedTask;

#[component]
pub fn AiReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let (request, set_request) = signal(ReportRequest::default());
    let (generation, set_generation) = signal(GenerationState::default());
    let run = DelayedTask::new();
    on_cleanup(move || {
        set_generation.try_update(|state| state.cancel());
    });

    let generate = move |_| {
        let mut ticket = None;
        set_generation.update(|state| ticket = state.begin());
        let Some(ticket) = ticket else {
            return;
        };
        let report = request.get_untracked();
        log::info!(
            "generating {} report for {} across {} departments",
            report.report_type.label(),
            report.period.label(),
            report.departments.len()
        );
        run.schedule(ctx.with_config(|c| c.report_generation_ms), move || {
            set_generation.update(|state| {
                state.finish(ticket);
            });
        });
    };

    view! {
        <div class="page">
            <PageHeading
                title="AI-Powered Reports"
                description="Generate intelligent insights and predictive analytics for city infrastructure"
            />
            <StatGrid tiles=sample::ai_stats() />

            <div class="grid grid-3">
                <Card title="Generate New Report" class="span-2">
                    <div class="form">
                        <label class="field">
                            <span>"Report Type"</span>
                            <select
                                prop:value=move || request.get().report_type.id()
                                on:change=move |ev| {
                                    if let Ok(kind) = event_target_value(&ev).parse::<ReportType>() {
                                        set_request.update(|r| r.report_type = kind);
                                    }
                                }
                            >
                                {ReportType::ALL.iter().map(|t| view! { <option value=t.id()>{t.label()}</option> }).collect_view()}
                            </select>
                        </label>
                        <label class="field">
                            <span>"Time Period"</span>
                            <select
                                prop:value=move || request.get().period.id()
                                on:change=move |ev| {
                                    if let Ok(period) = event_target_value(&ev).parse::<ReportPeriod>() {
                                        set_request.update(|r| r.period = period);
                                    }
                                }
                            >
                                {ReportPeriod::ALL.iter().map(|p| view! { <option value=p.id()>{p.label()}</option> }).collect_view()}
                            </select>
                        </label>
                        <div class="field">
                            <span>"Include Departments"</span>
                            {Department::ALL.into_iter().map(|dept| view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || request.get().includes(dept)
                                        on:change=move |_| set_request.update(|r| r.toggle_department(dept))
                                    />
                                    <span>{dept.label()}</span>
                                </label>
                            }).collect_view()}
                        </div>
                        <button
                            class="btn btn-primary btn-block"
                            prop:disabled=move || generation.get().is_generating()
                            on:click=generate
                        >
                            {move || generation.get().button_label()}
                        </button>
                    </div>
                </Card>

                <Card title="Recent AI Insights">
                    <div class="row-list">
                        {sample::ai_insights().into_iter().map(|insight| {
                            let tone = if insight.priority >= Priority::High { BadgeTone::Destructive } else { BadgeTone::Warning };
                            view! {
                                <div class="insight">
                                    <h4>{insight.title}</h4>
                                    <p class="muted">{insight.description}</p>
                                    <div class="insight-meta">
                                        <Badge tone=tone label=insight.priority.label() />
                                        <span class="muted">{format!("{}% confidence", insight.confidence)}</span>
                                    </div>
                                    <p class="insight-action">{insight.action}</p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Card>
            </div>

            <div class="grid grid-2">
                <Card title="AI Model Accuracy">
                    <BarChart data=sample::model_accuracy() />
                </Card>
                <Card title="Monthly Report Generation">
                    <BarChart data=sample::monthly_reports() />
                </Card>
            </div>

            <Card title="Generated Reports">
                <div class="row-list">
                    {sample::generated_reports().into_iter().map(|report| view! {
                        <div class="row-item">
                            <div>
                                <h4>{report.name.clone()}</h4>
                                <p class="muted">{report.date.to_string()}</p>
                            </div>
                            <div class="row-end button-row">
                                <Badge tone=BadgeTone::Default label=report.report_type.short_label() />
                                <Badge tone=report.status.badge() label=report.status.label() />
                                {report.downloadable().then(|| view! { <button class="btn btn-sm btn-outline">"Download"</button> })}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}
