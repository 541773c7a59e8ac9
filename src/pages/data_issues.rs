//! Data Issues Page

use leptos::prelude::*;

use civic_core::domain::DataIssue;
use civic_core::sample;

use crate::components::{Badge, Card, DetailList, PageHeading};

#[component]
pub fn DataIssuesPage() -> impl IntoView {
    let overview = sample::data_quality_overview()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <PageHeading title="Data Issues" description="Review data quality problems found in submitted reports" />
            <Card title="Data Quality Overview">
                <DetailList rows=overview />
            </Card>
            <div class="row-list">
                {sample::data_issues().into_iter().map(|issue| view! { <IssueCard issue=issue /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn IssueCard(issue: DataIssue) -> impl IntoView {
    let icon = issue.icon_class();
    view! {
        <div class="card data-issue">
            <span class=icon>"!"</span>
            <div class="data-issue-body">
                <h4>{issue.title}</h4>
                <p class="muted">{issue.description}</p>
                <p class="muted">{format!("{} affected records", issue.count)}</p>
            </div>
            <div class="row-end button-row">
                <Badge tone=issue.severity.badge() label=issue.severity.label() />
                <Badge tone=issue.status.badge() label=issue.status.label() />
            </div>
        </div>
    }
}
