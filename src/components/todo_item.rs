//! Todo Item Component
//!
//! Individual `<li>` in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::EditTodoForm;
use crate::context::use_app_context;
use crate::dialog;
use crate::format::timestamp_line;
use crate::models::Todo;

const DELETE_PROMPT: &str = "Are you sure you want to delete this TODO?";

/// A single TODO with toggle / edit / delete actions
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let (editing, set_editing) = signal(false);

    let toggle = move |_| {
        let config = ctx.config();
        spawn_local(async move {
            match api::toggle_todo(&config, id, completed).await {
                Ok(_) => ctx.reload(),
                Err(e) => dialog::report_failure("update", &e),
            }
        });
    };

    let delete = move |_| {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        let config = ctx.config();
        spawn_local(async move {
            match api::delete_todo(&config, id).await {
                Ok(_) => ctx.reload(),
                Err(e) => dialog::report_failure("delete", &e),
            }
        });
    };

    view! {
        <li class=todo.css_class() data-id=id.to_string()>
            <div class="todo-title">{todo.title.clone()}</div>
            <div class="todo-description">{todo.description_or_default().to_string()}</div>
            <div class="timestamp">
                {timestamp_line(todo.created_at.as_deref(), todo.updated_at.as_deref())}
            </div>
            <div class="todo-actions">
                <button class="toggle-button" on:click=toggle>{todo.toggle_label()}</button>
                <button class="edit-button" on:click=move |_| set_editing.update(|v| *v = !*v)>
                    "Edit"
                </button>
                <button class="delete-button" on:click=delete>"Delete"</button>
            </div>
            <EditTodoForm todo=todo.clone() visible=editing set_visible=set_editing />
        </li>
    }
}
