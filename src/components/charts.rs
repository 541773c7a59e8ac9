//! Charts
//!
//! Bar and pie renderings of `ChartDatum` lists. Geometry comes from
//! `civic_core::display`, so an empty or all-zero dataset draws nothing.

use leptos::prelude::*;

use civic_core::display::{bar_widths, percentages};
use civic_core::domain::ChartDatum;

/// Horizontal bars scaled to the largest value
#[component]
pub fn BarChart(data: Vec<ChartDatum>) -> impl IntoView {
    let widths = bar_widths(&data);
    view! {
        <div class="bar-chart">
            {data.into_iter().zip(widths).map(|(datum, width)| view! {
                <div class="bar-row">
                    <span class="bar-label">{datum.name.clone()}</span>
                    <div class="bar-track">
                        <div class=format!("bar-fill {}", datum.tone.fill_class()) style=format!("width: {:.1}%;", width)></div>
                    </div>
                    <span class="bar-value">{datum.display_value()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Matches the `r` of the circles below
const RADIUS: f64 = 60.0;

/// Donut of shares with a percentage legend
#[component]
pub fn PieChart(data: Vec<ChartDatum>) -> impl IntoView {
    let shares = percentages(&data);
    let total: f64 = data.iter().map(|d| d.value).sum();
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;

    // Each segment is a dashed circle rotated to where the previous one ended
    let mut offset = 0.0;
    let segments = data
        .iter()
        .filter(|_| total > 0.0)
        .map(|datum| {
            let length = datum.value.max(0.0) / total * circumference;
            let dash = format!("{:.2} {:.2}", length, circumference - length);
            let dash_offset = format!("{:.2}", -offset);
            offset += length;
            view! {
                <circle
                    class=format!("pie-segment {}", datum.tone.fill_class())
                    cx="80" cy="80" r="60"
                    fill="none"
                    stroke-width="24"
                    stroke-dasharray=dash
                    stroke-dashoffset=dash_offset
                />
            }
        })
        .collect_view();

    view! {
        <div class="pie-chart">
            <svg class="pie-svg" viewBox="0 0 160 160">
                <circle class="pie-bg" cx="80" cy="80" r="60" fill="none" stroke-width="24" />
                <g transform="rotate(-90 80 80)">{segments}</g>
            </svg>
            <ul class="pie-legend">
                {data.into_iter().zip(shares).map(|(datum, share)| view! {
                    <li class="legend-row">
                        <span class=format!("legend-dot {}", datum.tone.fill_class())></span>
                        <span class="legend-label">{datum.name}</span>
                        <span class="legend-value">{format!("{}%", share)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
