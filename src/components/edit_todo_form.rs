//! Edit Todo Form Component
//!
//! Inline form under an item for changing title and description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::{Todo, TodoPatch};

/// Hidden until `visible` is set; Save sends `{title, description}` and hides it
#[component]
pub fn EditTodoForm(
    todo: Todo,
    visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let original_title = todo.title.clone();
    let original_description = todo.description.clone().unwrap_or_default();
    let (edit_title, set_edit_title) = signal(original_title.clone());
    let (edit_description, set_edit_description) = signal(original_description.clone());

    // Pull the server's current values each time the form opens
    Effect::new(move |_| {
        if !visible.get() {
            return;
        }
        let snapshot = (edit_title.get_untracked(), edit_description.get_untracked());
        let config = ctx.config();
        spawn_local(async move {
            match api::get_todo(&config, id).await {
                Ok(latest) => {
                    let current = (edit_title.get_untracked(), edit_description.get_untracked());
                    if !should_apply_refresh(visible.get_untracked(), &snapshot, &current) {
                        log::debug!("Keeping local edits for todo #{}", id);
                        return;
                    }
                    set_edit_title.set(latest.title);
                    set_edit_description.set(latest.description.unwrap_or_default());
                }
                Err(e) => log::warn!("Could not refresh todo #{} for editing: {}", id, e),
            }
        });
    });

    let save = move |_| {
        let patch = TodoPatch::edit(edit_title.get_untracked(), edit_description.get_untracked());
        let config = ctx.config();
        spawn_local(async move {
            match api::update_todo(&config, id, &patch).await {
                Ok(_) => ctx.reload(),
                Err(e) => dialog::report_failure("update", &e),
            }
        });
        set_visible.set(false);
    };

    let cancel = move |_| {
        set_edit_title.set(original_title.clone());
        set_edit_description.set(original_description.clone());
        set_visible.set(false);
    };

    let title_id = format!("edit-title-{}", id);
    let description_id = format!("edit-description-{}", id);

    view! {
        <div
            class="edit-form"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div>
                <label for=title_id.clone()>"Title:"</label>
                <input
                    type="text"
                    id=title_id
                    required=true
                    prop:value=move || edit_title.get()
                    on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for=description_id.clone()>"Description:"</label>
                <textarea
                    id=description_id
                    prop:value=move || edit_description.get()
                    on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="todo-actions">
                <button type="button" class="save-button" on:click=save>"Save Changes"</button>
                <button type="button" class="cancel-button" on:click=cancel>"Cancel"</button>
            </div>
        </div>
    }
}

/// A refresh lands only while the form is open and the user has not typed since it started
fn should_apply_refresh(still_visible: bool, snapshot: &(String, String), current: &(String, String)) -> bool {
    still_visible && snapshot == current
}
