//! Todo List Component
//!
//! Renders the fetched list, replacing its content on every reload.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Todo;

pub const EMPTY_MESSAGE: &str = "No TODOs found. Create your first one above!";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading TODOs. Please try again later.";

/// What the list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Failed,
    Empty,
    Items,
}

impl ListState {
    pub fn derive(loading: bool, failed: bool, count: usize) -> Self {
        if loading {
            ListState::Loading
        } else if failed {
            ListState::Failed
        } else if count == 0 {
            ListState::Empty
        } else {
            ListState::Items
        }
    }
}

#[component]
pub fn TodoList(
    todos: ReadSignal<Vec<Todo>>,
    loading: ReadSignal<bool>,
    load_failed: ReadSignal<bool>,
) -> impl IntoView {
    let state = move || ListState::derive(loading.get(), load_failed.get(), todos.with(Vec::len));

    view! {
        <div id="loading" class="loading" style:display=move || if loading.get() { "block" } else { "none" }>
            "Loading..."
        </div>
        <div id="todo-list" class="todo-list">
            {move || match state() {
                ListState::Loading => ().into_any(),
                ListState::Failed => view! { <p>{LOAD_ERROR_MESSAGE}</p> }.into_any(),
                ListState::Empty => view! { <p>{EMPTY_MESSAGE}</p> }.into_any(),
                ListState::Items => view! {
                    <ul class="todo-items">
                        <For
                            each=move || todos.get()
                            key=|todo| {
                                // every rendered field, so an edit re-renders the row
                                (
                                    todo.id,
                                    todo.title.clone(),
                                    todo.description.clone(),
                                    todo.completed,
                                    todo.created_at.clone(),
                                    todo.updated_at.clone(),
                                )
                            }
                            children=move |todo| view! { <TodoItem todo=todo /> }
                        />
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state() {
        assert_eq!(ListState::derive(true, false, 0), ListState::Loading);
        assert_eq!(ListState::derive(true, true, 3), ListState::Loading);
        assert_eq!(ListState::derive(false, true, 3), ListState::Failed);
        assert_eq!(ListState::derive(false, false, 0), ListState::Empty);
        assert_eq!(ListState::derive(false, false, 2), ListState::Items);
    }
}
