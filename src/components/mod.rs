//! UI Components
//!
//! Leptos components for the TODO page.

mod edit_todo_form;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use edit_todo_form::EditTodoForm;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
