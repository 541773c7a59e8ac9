//! User Management Page

use leptos::prelude::*;

use civic_core::domain::{Role, SystemUser};
use civic_core::sample;

use crate::components::{Badge, BarChart, Card, DetailList, Modal, PageHeading, PieChart, StatGrid};

#[component]
pub fn UsersPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<SystemUser>);
    let (role, set_role) = signal(Role::Admin);

    view! {
        <div class="page">
            <PageHeading title="User Management" description="Manage system users, roles, and permissions" />
            <StatGrid tiles=sample::user_stats() />

            <div class="grid grid-2">
                <Card title="User Role Distribution">
                    <PieChart data=sample::user_roles() />
                </Card>
                <Card title="Weekly User Activity">
                    <BarChart data=sample::weekly_activity() />
                </Card>
            </div>

            <div class="grid grid-3">
                <Card title="System Users" class="span-2">
                    <div class="row-list">
                        {sample::system_users().into_iter().map(|user| {
                            let clicked = user.clone();
                            view! {
                                <div class="row-item clickable" on:click=move |_| set_selected.set(Some(clicked.clone()))>
                                    <div class="user-cell">
                                        <span class="avatar">{user.initial().to_string()}</span>
                                        <div>
                                            <h4>{user.name.clone()}</h4>
                                            <p class="muted">{user.email.clone()}</p>
                                            <p class="muted">{user.department.clone()}</p>
                                        </div>
                                    </div>
                                    <div class="row-end">
                                        <Badge tone=user.status.badge() label=user.status.label() />
                                        <p class="muted">{format!("Role: {}", user.role.label())}</p>
                                        <p class="muted">{format!("Last: {}", user.last_login_label())}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Card>

                <Card title="Role Permissions">
                    <label class="field">
                        <span>"Select Role"</span>
                        <select
                            prop:value=move || role.get().id()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<Role>() {
                                    set_role.set(value);
                                }
                            }
                        >
                            {Role::ALL.iter().map(|r| view! { <option value=r.id()>{r.label()}</option> }).collect_view()}
                        </select>
                    </label>
                    <div class="permission-matrix">
                        {move || sample::permissions_for(role.get()).into_iter().map(|perm| view! {
                            <div class="permission-row">
                                <h4>{perm.module}</h4>
                                <div class="button-row">
                                    <PermissionFlag label="Read" granted=perm.read />
                                    <PermissionFlag label="Write" granted=perm.write />
                                    <PermissionFlag label="Admin" granted=perm.admin />
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </div>

            <Card title="Recent User Activity">
                <div class="row-list">
                    {sample::recent_activity().into_iter().map(|entry| view! {
                        <div class="row-item">
                            <div>
                                <h4>{entry.user}</h4>
                                <p class="muted">{entry.action}</p>
                            </div>
                            <p class="muted">{entry.time}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Card>

            {move || selected.get().map(|user| view! {
                <Modal title="User Details" on_close=move |_: ()| set_selected.set(None)>
                    <div class="user-cell">
                        <span class="avatar avatar-lg">{user.initial().to_string()}</span>
                        <div>
                            <h4>{user.name.clone()}</h4>
                            <p class="muted">{user.email.clone()}</p>
                        </div>
                    </div>
                    <DetailList rows=vec![
                        ("Role", user.role.label().to_string()),
                        ("Department", user.department.clone()),
                        ("Status", user.status.label().to_string()),
                        ("Last Login", user.last_login_label()),
                    ] />
                    <div class="form-actions">
                        <button class="btn btn-primary">"Edit User"</button>
                        <button class="btn btn-outline">"Reset Password"</button>
                    </div>
                </Modal>
            })}
        </div>
    }
}

#[component]
fn PermissionFlag(label: &'static str, granted: bool) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input type="checkbox" prop:checked=granted disabled=true />
            <span>{label}</span>
        </label>
    }
}
