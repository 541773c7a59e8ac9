//! Login Modal Component

use leptos::prelude::*;

use civic_core::{Credentials, SessionEvent};

use crate::context::use_app_context;

/// Any non-empty email and password signs in
#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get(), password.get());
        ctx.dispatch(SessionEvent::SubmitLogin(credentials));
    };
    let close = move |_| ctx.dispatch(SessionEvent::CancelLogin);

    view! {
        <div class="modal-backdrop">
            <div class="modal login-modal">
                <div class="modal-header">
                    <h2>"Admin Login"</h2>
                    <button class="modal-close" title="Close" on:click=close>"×"</button>
                </div>
                <form class="form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email Address"</span>
                        <input
                            type="email"
                            placeholder="admin@civictracker.com"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="••••••••"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label class="checkbox">
                            <input type="checkbox" />
                            <span>"Remember me"</span>
                        </label>
                        <button type="button" class="link-btn">"Forgot Password?"</button>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">"Sign In"</button>
                </form>
            </div>
        </div>
    }
}
