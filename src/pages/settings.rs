//! System Settings Page
//!
//! Tabbed preferences form. Inputs edit the draft held by `SettingsEditor`;
//! "Save Changes" commits it and "Cancel" rolls it back.

use leptos::prelude::*;

use civic_core::sample;
use civic_core::settings::{BackupFrequency, SettingsEditor, SettingsTab, SystemSettings};

use crate::components::{Badge, BarChart, Card, PageHeading, StatGrid};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (tab, set_tab) = signal(SettingsTab::default());
    let editor = RwSignal::new(SettingsEditor::new(SystemSettings::default()));

    let save = move |_| {
        editor.update(|e| e.save());
        log::info!("settings saved");
    };
    let discard = move |_| editor.update(|e| e.discard());

    view! {
        <div class="page">
            <PageHeading
                title="System Settings"
                description="Configure system preferences and administrative settings"
            />
            <StatGrid tiles=sample::system_health() />

            <Card title="System Resource Usage">
                <BarChart data=sample::system_usage() />
            </Card>

            <div class="grid grid-4">
                <Card title="Settings">
                    <nav class="tab-list">
                        {SettingsTab::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if tab.get() == t { "tab-button active" } else { "tab-button" }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </nav>
                </Card>

                <section class="card span-3">
                    <header class="card-header">
                        <h3 class="card-title">{move || tab.get().heading()}</h3>
                        <Show when=move || editor.with(|e| e.is_dirty())>
                            <span class="dirty-flag">"Unsaved changes"</span>
                        </Show>
                    </header>
                    <div class="card-body">
                        {move || match tab.get() {
                            SettingsTab::General => view! { <GeneralPanel editor=editor /> }.into_any(),
                            SettingsTab::Notifications => view! { <NotificationsPanel editor=editor /> }.into_any(),
                            SettingsTab::Security => view! { <SecurityPanel editor=editor /> }.into_any(),
                            SettingsTab::Integrations => view! { <IntegrationsPanel /> }.into_any(),
                            SettingsTab::Backup => view! { <BackupPanel editor=editor /> }.into_any(),
                        }}
                        <div class="form-actions">
                            <button class="btn btn-outline" prop:disabled=move || !editor.with(|e| e.is_dirty()) on:click=discard>
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" on:click=save>"Save Changes"</button>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn GeneralPanel(editor: RwSignal<SettingsEditor>) -> impl IntoView {
    view! {
        <div class="panel-grid">
            <div>
                <h4>"System Information"</h4>
                <TextField label="System Name" editor=editor get=|s| s.system_name.clone() set=|s, v| s.system_name = v />
                <TextField label="Version" editor=editor get=|s| s.version.clone() set=|s, v| s.version = v />
                <ChoiceField
                    label="Time Zone"
                    options=&SystemSettings::TIME_ZONES
                    editor=editor
                    get=|s| s.time_zone.clone()
                    set=|s, v| s.time_zone = v
                />
                <ChoiceField
                    label="Date Format"
                    options=&SystemSettings::DATE_FORMATS
                    editor=editor
                    get=|s| s.date_format.clone()
                    set=|s, v| s.date_format = v
                />
            </div>
            <div>
                <h4>"Display Settings"</h4>
                <Toggle label="Enable dark mode" editor=editor get=|s| s.dark_mode set=|s, v| s.dark_mode = v />
                <Toggle
                    label="Show system statistics on dashboard"
                    editor=editor
                    get=|s| s.show_dashboard_stats
                    set=|s, v| s.show_dashboard_stats = v
                />
                <Toggle
                    label="Enable advanced tooltips"
                    editor=editor
                    get=|s| s.advanced_tooltips
                    set=|s, v| s.advanced_tooltips = v
                />
            </div>
        </div>
    }
}

#[component]
fn NotificationsPanel(editor: RwSignal<SettingsEditor>) -> impl IntoView {
    view! {
        <div class="panel-grid">
            <div>
                <h4>"Email Notifications"</h4>
                <Toggle
                    label="High priority issue alerts"
                    editor=editor
                    get=|s| s.alert_high_priority
                    set=|s, v| s.alert_high_priority = v
                />
                <Toggle label="Daily system reports" editor=editor get=|s| s.daily_reports set=|s, v| s.daily_reports = v />
                <Toggle
                    label="Maintenance reminders"
                    editor=editor
                    get=|s| s.maintenance_reminders
                    set=|s, v| s.maintenance_reminders = v
                />
                <Toggle
                    label="User activity updates"
                    editor=editor
                    get=|s| s.activity_updates
                    set=|s, v| s.activity_updates = v
                />
            </div>
            <div>
                <h4>"Alert Thresholds"</h4>
                <NumberField
                    label="System Downtime Alert (minutes)"
                    editor=editor
                    get=|s| s.downtime_alert_minutes
                    set=|s, v| s.downtime_alert_minutes = v
                />
                <NumberField
                    label="High Priority Issues (count)"
                    editor=editor
                    get=|s| s.high_priority_threshold
                    set=|s, v| s.high_priority_threshold = v
                />
            </div>
        </div>
    }
}

#[component]
fn SecurityPanel(editor: RwSignal<SettingsEditor>) -> impl IntoView {
    view! {
        <div class="panel-grid">
            <div>
                <h4>"Password Policy"</h4>
                <NumberField
                    label="Minimum Password Length"
                    editor=editor
                    get=|s| s.min_password_length
                    set=|s, v| s.min_password_length = v
                />
                <Toggle
                    label="Require uppercase letters"
                    editor=editor
                    get=|s| s.require_uppercase
                    set=|s, v| s.require_uppercase = v
                />
                <Toggle
                    label="Require special characters"
                    editor=editor
                    get=|s| s.require_special
                    set=|s, v| s.require_special = v
                />
                <Toggle
                    label="Enable two-factor authentication"
                    editor=editor
                    get=|s| s.two_factor
                    set=|s, v| s.two_factor = v
                />
            </div>
            <div>
                <h4>"Session Management"</h4>
                <NumberField
                    label="Session Timeout (minutes)"
                    editor=editor
                    get=|s| s.session_timeout_minutes
                    set=|s, v| s.session_timeout_minutes = v
                />
                <NumberField
                    label="Maximum Failed Login Attempts"
                    editor=editor
                    get=|s| s.max_failed_logins
                    set=|s, v| s.max_failed_logins = v
                />
            </div>
        </div>
    }
}

#[component]
fn IntegrationsPanel() -> impl IntoView {
    view! {
        <h4>"External APIs"</h4>
        <div class="row-list">
            {sample::api_integrations().into_iter().map(|api| view! {
                <div class="row-item">
                    <div>
                        <h4>{api.name.clone()}</h4>
                        <p class="muted">{format!("Last sync: {}", api.last_sync_label())}</p>
                    </div>
                    <div class="row-end button-row">
                        <Badge tone=api.badge() label=api.status_label() />
                        <button class="btn btn-outline btn-sm">"Configure"</button>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn BackupPanel(editor: RwSignal<SettingsEditor>) -> impl IntoView {
    view! {
        <div class="panel-grid">
            <div>
                <h4>"Backup Schedule"</h4>
                <label class="field">
                    <span>"Backup Frequency"</span>
                    <select
                        prop:value=move || editor.with(|e| e.draft().backup_frequency.label())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(freq) = BackupFrequency::ALL.into_iter().find(|f| f.label() == value) {
                                editor.update(|e| e.edit(|s| s.backup_frequency = freq));
                            }
                        }
                    >
                        {BackupFrequency::ALL.iter().map(|f| view! { <option value=f.label()>{f.label()}</option> }).collect_view()}
                    </select>
                </label>
                <TextField label="Backup Time" editor=editor get=|s| s.backup_time.clone() set=|s, v| s.backup_time = v />
                <NumberField
                    label="Retention Period (days)"
                    editor=editor
                    get=|s| s.retention_days
                    set=|s, v| s.retention_days = v
                />
            </div>
            <div>
                <h4>"Recent Backups"</h4>
                <div class="row-list">
                    {sample::backups().into_iter().map(|backup| view! {
                        <div class="row-item">
                            <div>
                                <span>{backup.taken_at.format("%Y-%m-%d %H:%M").to_string()}</span>
                                <span class="muted">{format!(" ({} GB)", backup.size_gb)}</span>
                            </div>
                            <Badge tone=backup.badge() label=backup.status_label() />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

// ========================
// Bound inputs
// ========================

#[component]
fn Toggle(
    label: &'static str,
    editor: RwSignal<SettingsEditor>,
    get: fn(&SystemSettings) -> bool,
    set: fn(&mut SystemSettings, bool),
) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || editor.with(|e| get(e.draft()))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    editor.update(|e| e.edit(|s| set(s, checked)));
                }
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
fn TextField(
    label: &'static str,
    editor: RwSignal<SettingsEditor>,
    get: fn(&SystemSettings) -> String,
    set: fn(&mut SystemSettings, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=move || editor.with(|e| get(e.draft()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|e| e.edit(|s| set(s, value)));
                }
            />
        </label>
    }
}

/// Rejects input that is not a whole number; the draft keeps its last value
#[component]
fn NumberField(
    label: &'static str,
    editor: RwSignal<SettingsEditor>,
    get: fn(&SystemSettings) -> u32,
    set: fn(&mut SystemSettings, u32),
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="number"
                min="0"
                prop:value=move || editor.with(|e| get(e.draft())).to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        editor.update(|e| e.edit(|s| set(s, value)));
                    }
                }
            />
        </label>
    }
}

#[component]
fn ChoiceField(
    label: &'static str,
    options: &'static [&'static str],
    editor: RwSignal<SettingsEditor>,
    get: fn(&SystemSettings) -> String,
    set: fn(&mut SystemSettings, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <select
                prop:value=move || editor.with(|e| get(e.draft()))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|e| e.edit(|s| set(s, value)));
                }
            >
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        </label>
    }
}
