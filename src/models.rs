//! Frontend Models
//!
//! Data structures matching the server's JSON.

use serde::{Deserialize, Serialize};

/// TODO item as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Todo {
    /// CSS class for the list item
    pub fn css_class(&self) -> &'static str {
        if self.completed {
            "todo-item todo-completed"
        } else {
            "todo-item"
        }
    }

    /// Label for the completion toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Mark Incomplete"
        } else {
            "Mark Complete"
        }
    }

    /// Description text, or a placeholder when empty
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No description",
        }
    }
}

/// Body for `POST /todos`
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

impl<'a> NewTodo<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description, completed: false }
    }
}

/// Body for `PUT /todos/{id}`; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn edit(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }
}

/// Body returned by `DELETE /todos/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_todo() {
        let json = r#"{
            "id": 7,
            "title": "Buy milk",
            "description": "2 litres",
            "completed": true,
            "created_at": "2024-03-05T10:20:30.123456",
            "updated_at": "2024-03-06T08:00:00"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.description.as_deref(), Some("2 litres"));
        assert!(todo.completed);
        assert_eq!(todo.updated_at.as_deref(), Some("2024-03-06T08:00:00"));
    }

    #[test]
    fn test_decode_sparse_todo() {
        let json = r#"{"id": 1, "title": "Bare", "description": null, "updated_at": null}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.description, None);
        assert!(!todo.completed);
        assert_eq!(todo.created_at, None);
        assert_eq!(todo.updated_at, None);
    }

    #[test]
    fn test_display_helpers() {
        let mut todo: Todo = serde_json::from_str(r#"{"id": 1, "title": "T", "description": ""}"#).unwrap();
        assert_eq!(todo.css_class(), "todo-item");
        assert_eq!(todo.toggle_label(), "Mark Complete");
        assert_eq!(todo.description_or_default(), "No description");

        todo.completed = true;
        todo.description = Some("details".into());
        assert_eq!(todo.css_class(), "todo-item todo-completed");
        assert_eq!(todo.toggle_label(), "Mark Incomplete");
        assert_eq!(todo.description_or_default(), "details");
    }

    #[test]
    fn test_new_todo_starts_incomplete() {
        let body = serde_json::to_value(NewTodo::new("Write report", "")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Write report", "description": "", "completed": false}));
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let toggle = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(toggle, serde_json::json!({"completed": true}));

        let edit = serde_json::to_value(TodoPatch::edit("New", "Desc")).unwrap();
        assert_eq!(edit, serde_json::json!({"title": "New", "description": "Desc"}));
    }
}
