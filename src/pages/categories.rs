//! Issue Categories Page
//!
//! Lists the categories in the store and appends new ones. A draft without
//! a name is ignored.

use leptos::prelude::*;

use civic_core::domain::CategoryDraft;

use crate::components::{Card, PageHeading};
use crate::store::{store_add_category, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CategoryDraft {
            name: name.get(),
            description: description.get(),
        };
        if let Some(category) = draft.submit() {
            log::info!("added category {}", category.name);
            store_add_category(&store, category);
            set_name.set(String::new());
            set_description.set(String::new());
        }
    };

    view! {
        <div class="page">
            <PageHeading title="Issue Categories" description="Manage the categories citizens can report issues under" />
            <div class="grid grid-2">
                <Card title="Create New Category">
                    <form class="form" on:submit=on_submit>
                        <label class="field">
                            <span>"Category Name"</span>
                            <input
                                type="text"
                                placeholder="e.g. Noise Complaints"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Description"</span>
                            <textarea
                                rows="3"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary">"Add Category"</button>
                    </form>
                </Card>
                <Card title="Existing Categories">
                    <div class="row-list">
                        {move || store.categories().read().iter().map(|category| view! {
                            <div class="row-item">
                                <div>
                                    <h4>{category.name.clone()}</h4>
                                    <p class="muted">{category.description.clone()}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
