//! Landing Page Component
//!
//! Public marketing page shown while signed out.

use leptos::prelude::*;

use civic_core::SessionEvent;

use crate::context::use_app_context;

const FEATURES: &[(&str, &str)] = &[
    ("Interactive Maps", "Real-time visualization of city issues with advanced filtering and geographic insights."),
    ("AI-Powered Analytics", "Intelligent reporting and predictive maintenance recommendations powered by machine learning."),
    ("Infrastructure Monitoring", "Track street lighting, road conditions, and public utilities with automated alerts."),
    ("Water Management", "Comprehensive water system monitoring with leak detection and quality tracking."),
    ("Citizen Engagement", "Easy reporting system for citizens to submit issues and track resolution progress."),
    ("Advanced Reporting", "Detailed analytics and reports for data-driven decision making and resource allocation."),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("50+", "Cities Using Platform"),
    ("10M+", "Issues Resolved"),
    ("95%", "Resolution Rate"),
];

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_app_context();
    let brand = ctx.with_config(|c| c.brand_name.clone());
    let show_login = move |_| ctx.dispatch(SessionEvent::ShowLogin);

    view! {
        <div class="landing">
            <header class="landing-header">
                <div class="brand">
                    <span class="brand-logo">"◆"</span>
                    <span class="brand-name">{brand.clone()}</span>
                </div>
                <button class="btn btn-primary" on:click=show_login>"Admin Login"</button>
            </header>

            <section class="hero">
                <h1>"Smart City Reporting Platform"</h1>
                <p>
                    "Revolutionizing civic infrastructure management with AI-powered insights, "
                    "real-time reporting, and intelligent issue resolution for modern cities."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg">"Report an Issue"</button>
                    <button class="btn btn-outline btn-lg">"Learn More"</button>
                </div>
            </section>

            <section class="features">
                <h2>"Comprehensive City Management"</h2>
                <div class="feature-grid">
                    {FEATURES.iter().map(|(title, description)| view! {
                        <div class="card feature-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="highlights">
                <h2>"Trusted by Cities Worldwide"</h2>
                <div class="highlight-grid">
                    {HIGHLIGHTS.iter().map(|(value, label)| view! {
                        <div>
                            <div class="highlight-value">{*value}</div>
                            <div class="highlight-label">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-brand">
                    <span class="brand-name">{brand.clone()}</span>
                    <p>"Empowering cities with intelligent infrastructure management and citizen engagement solutions."</p>
                </div>
                <div>
                    <h3>"Features"</h3>
                    <ul>
                        <li>"Interactive Maps"</li>
                        <li>"AI Analytics"</li>
                        <li>"Issue Tracking"</li>
                        <li>"Reporting Tools"</li>
                    </ul>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <ul>
                        <li>"support@civictracker.com"</li>
                        <li>"1-800-CIVIC-01"</li>
                        <li>"Documentation"</li>
                        <li>"API Access"</li>
                    </ul>
                </div>
                <p class="copyright">{format!("© 2024 {}. All rights reserved.", brand)}</p>
            </footer>
        </div>
    }
}
