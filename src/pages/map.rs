//! Interactive Map Page
//!
//! Mock city canvas with filterable issue pins. Zoom and pan go through
//! `Viewport`; dragging the canvas pans it.

use leptos::prelude::*;
use web_sys::MouseEvent;

use civic_core::display::{count_by_priority, filter_by_category, CategoryFilter};
use civic_core::domain::{Entity, MapMarker, MarkerType, Priority};
use civic_core::sample;
use civic_core::viewport::Viewport;

use crate::components::{Badge, Card, PageHeading, ProgressBar};

#[component]
pub fn MapPage() -> impl IntoView {
    let markers = StoredValue::new(sample::map_markers());
    let (filter, set_filter) = signal(CategoryFilter::default());
    let (viewport, set_viewport) = signal(Viewport::new());
    let (selected, set_selected) = signal(None::<u32>);
    let (drag_from, set_drag_from) = signal(None::<(i32, i32)>);

    let visible = Memo::new(move |_| {
        markers.with_value(|all| filter_by_category(all, filter.get()).into_iter().cloned().collect::<Vec<_>>())
    });
    let summary = markers.with_value(|all| count_by_priority(all));

    let start_drag = move |ev: MouseEvent| set_drag_from.set(Some((ev.client_x(), ev.client_y())));
    let drag = move |ev: MouseEvent| {
        if let Some((x0, y0)) = drag_from.get_untracked() {
            let (x, y) = (ev.client_x(), ev.client_y());
            set_viewport.update(|v| v.drag_by(f64::from(x - x0), f64::from(y - y0)));
            set_drag_from.set(Some((x, y)));
        }
    };
    let end_drag = move |_| set_drag_from.set(None);

    view! {
        <div class="page">
            <PageHeading title="City Issue Map" description="Interactive visualization of civic issues across the city" />

            <div class="grid grid-map">
                <Card title="Map Controls">
                    <label class="field">
                        <span>"Filter by Type"</span>
                        <select
                            prop:value=move || filter.get().id()
                            on:change=move |ev| set_filter.set(CategoryFilter::from_select(&event_target_value(&ev)))
                        >
                            <option value={CategoryFilter::ALL_ID}>"All Issues"</option>
                            {MarkerType::ALL.iter().map(|kind| view! { <option value=kind.id()>{kind.label()}</option> }).collect_view()}
                        </select>
                    </label>

                    <div class="field">
                        <span>"Zoom Controls"</span>
                        <div class="button-row">
                            <button
                                class="btn btn-sm btn-primary"
                                prop:disabled=move || !viewport.get().can_zoom_in()
                                on:click=move |_| set_viewport.update(|v| v.zoom_in())
                            >"+"</button>
                            <button
                                class="btn btn-sm btn-primary"
                                prop:disabled=move || !viewport.get().can_zoom_out()
                                on:click=move |_| set_viewport.update(|v| v.zoom_out())
                            >"-"</button>
                            <button class="btn btn-sm btn-outline" on:click=move |_| set_viewport.update(|v| v.reset())>"Reset"</button>
                        </div>
                        <p class="muted">{move || format!("Zoom: {}%", viewport.get().zoom_percent())}</p>
                    </div>

                    <div class="legend">
                        <h4>"Legend"</h4>
                        <p><span class="legend-dot pin-high"></span>"High Priority"</p>
                        <p><span class="legend-dot pin-medium"></span>"Medium Priority"</p>
                        <p><span class="legend-dot pin-low"></span>"Low Priority"</p>
                    </div>
                </Card>

                <Card title="City Issue Map">
                    <div
                        class=move || if drag_from.get().is_some() { "map-frame dragging" } else { "map-frame" }
                        on:mousedown=start_drag
                        on:mousemove=drag
                        on:mouseup=end_drag
                        on:mouseleave=end_drag
                    >
                        <div class="map-canvas" style=move || format!("transform: {};", viewport.get().css_transform())>
                            <div class="road road-h" style="top: 33%;"></div>
                            <div class="road road-h" style="top: 66%;"></div>
                            <div class="road road-v" style="left: 25%;"></div>
                            <div class="road road-v" style="left: 75%;"></div>
                            <div class="area area-park">"Central Park"</div>
                            <div class="area area-business">"Business District"</div>
                            <div class="area area-hall">"City Hall"</div>
                            <For
                                each=move || visible.get()
                                key=|marker| marker.id()
                                children=move |marker| view! { <MapPin marker=marker selected=selected set_selected=set_selected /> }
                            />
                        </div>
                    </div>
                </Card>
            </div>

            <Card title="Issue Summary">
                <div class="summary-grid">
                    {[Priority::High, Priority::Medium, Priority::Low].into_iter().map(|priority| view! {
                        <div class=format!("summary-cell summary-{}", priority.as_str())>
                            <div class="summary-value">{summary.get(priority)}</div>
                            <div class="summary-label">{format!("{} Priority", priority.label())}</div>
                        </div>
                    }).collect_view()}
                    <div class="summary-cell">
                        <div class="summary-value">{summary.total()}</div>
                        <div class="summary-label">"Total Issues"</div>
                    </div>
                </div>
            </Card>

            <Card title="Department Workload" subtitle="Current assignment distribution across departments">
                {sample::department_workload().into_iter().map(|dept| view! {
                    <div class="workload-row">
                        <div class="workload-head">
                            <span>{dept.name.clone()}</span>
                            <span class="muted">{format!("{}% capacity", dept.display_value())}</span>
                        </div>
                        <ProgressBar percent=dept.value fill=dept.tone.fill_class() />
                    </div>
                }).collect_view()}
            </Card>
        </div>
    }
}

#[component]
fn MapPin(marker: MapMarker, selected: ReadSignal<Option<u32>>, set_selected: WriteSignal<Option<u32>>) -> impl IntoView {
    let id = marker.id;
    let is_selected = move || selected.get() == Some(id);
    let position = format!("left: {}%; top: {}%;", marker.x, marker.y);
    let pin_class = marker.pin_class();
    let badge = marker.priority.badge();
    let priority = marker.priority.label();
    let date = marker.date.to_string();
    let reported_by = format!("Reported by: {}", marker.reported_by);
    let MapMarker { title, description, .. } = marker;

    view! {
        <div
            class="map-marker"
            style=position
            on:mousedown=|ev| ev.stop_propagation()
            on:click=move |_| set_selected.update(|s| *s = if *s == Some(id) { None } else { Some(id) })
        >
            <div class=pin_class><span class="pin-dot"></span></div>
            <Show when=is_selected>
                <div class="marker-popover" on:click=|ev| ev.stop_propagation()>
                    <div class="popover-head">
                        <h4>{title.clone()}</h4>
                        <button class="modal-close" on:click=move |_| set_selected.set(None)>"×"</button>
                    </div>
                    <p class="muted">{description.clone()}</p>
                    <div class="popover-meta">
                        <Badge tone=badge label=priority />
                        <span class="muted">{date.clone()}</span>
                    </div>
                    <p class="muted">{reported_by.clone()}</p>
                </div>
            </Show>
        </div>
    }
}
