//! New Todo Form Component
//!
//! Form for creating new TODOs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::NewTodo;

/// Create form; submitting posts the item and refreshes the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get_untracked();
        let description_text = description.get_untracked();
        let config = ctx.config();

        spawn_local(async move {
            let new_todo = NewTodo::new(&title_text, &description_text);
            match api::create_todo(&config, &new_todo).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(e) => dialog::report_failure("create", &e),
            }
        });
    };

    view! {
        <form id="create-todo-form" class="create-todo-form" on:submit=create_todo>
            <div>
                <label for="title">"Title:"</label>
                <input
                    type="text"
                    id="title"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="description">"Description:"</label>
                <textarea
                    id="description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit">"Create TODO"</button>
        </form>
    }
}
