//! Complaint Form Component
//!
//! "Report New Issue" modal. Title and location are required; an incomplete
//! submit keeps the form open and names the missing fields.

use leptos::prelude::*;

use civic_core::domain::{append_transcript, ComplaintDraft, IssueCategory, Priority};
use civic_core::pending::PendingRun;

use crate::clock;
use crate::components::ui::Modal;
use crate::context::use_app_context;
use crate::store::{store_add_complaint, use_app_store};
use crate::timer::DelayedTask;

#[component]
pub fn ComplaintForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(IssueCategory::default());
    let (priority, set_priority) = signal(Priority::default());
    let (location, set_location) = signal(String::new());
    let (recording, set_recording) = signal(PendingRun::default());
    let (missing, set_missing) = signal(Vec::<&'static str>::new());
    let voice = DelayedTask::new();
    on_cleanup(move || {
        set_recording.try_update(|run| run.cancel());
    });

    let toggle_recording = move |_| {
        if recording.get_untracked().is_active() {
            voice.cancel();
            set_recording.update(|run| {
                run.cancel();
            });
            return;
        }
        let mut ticket = None;
        set_recording.update(|run| ticket = run.start());
        let Some(ticket) = ticket else {
            return;
        };
        let (delay, transcript) = ctx.with_config(|c| (c.voice_capture_ms, c.voice_transcript.clone()));
        voice.schedule(delay, move || {
            let mut landed = false;
            set_recording.update(|run| landed = run.complete(ticket));
            if landed {
                set_description.update(|text| *text = append_transcript(text, &transcript));
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ComplaintDraft {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            priority: priority.get(),
            location: location.get(),
        };
        set_missing.set(draft.missing_fields());
        let reporter = ctx.with_config(|c| c.default_reporter.clone());
        if let Some(complaint) = draft.submit(clock::now_millis(), clock::today(), &reporter) {
            log::info!("filed complaint {} ({})", complaint.id, complaint.category.label());
            store_add_complaint(&store, complaint);
            on_close.run(());
        }
    };

    view! {
        <Modal title="Report New Issue" on_close=on_close>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Issue Title"</span>
                    <input
                        type="text"
                        placeholder="Brief description of the issue"
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || category.get().id()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                set_category.set(value);
                            }
                        }
                    >
                        {IssueCategory::ALL.iter().map(|c| view! { <option value=c.id()>{c.label()}</option> }).collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Priority"</span>
                    <select
                        prop:value=move || priority.get().as_str()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                set_priority.set(value);
                            }
                        }
                    >
                        {Priority::ALL.iter().map(|p| view! { <option value=p.as_str()>{p.label()}</option> }).collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Location"</span>
                    <input
                        type="text"
                        placeholder="Street address or landmark"
                        required=true
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Description"</span>
                    <div class="textarea-wrap">
                        <textarea
                            rows="4"
                            placeholder="Detailed description of the issue..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            type="button"
                            class=move || if recording.get().is_active() { "mic-btn recording" } else { "mic-btn" }
                            title="Voice input"
                            on:click=toggle_recording
                        >
                            "🎤"
                        </button>
                    </div>
                </label>
                <Show when=move || recording.get().is_active()>
                    <p class="recording-hint">"Recording... Speak now"</p>
                </Show>
                <Show when=move || !missing.get().is_empty()>
                    <p class="form-error">{move || format!("Please fill in: {}", missing.get().join(", "))}</p>
                </Show>
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">"Submit Report"</button>
                </div>
            </form>
        </Modal>
    }
}
