//! Request and response bodies for the todo endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::todo::domain::{NewTodo, Todo, TodoFilter, TodoPatch, TodoStatus};

/// Body of `POST /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    /// Title; required but may be empty.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional free-form priority.
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional initial status; `pending` when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(request: CreateTodoRequest) -> Self {
        let CreateTodoRequest {
            title,
            description,
            priority,
            status,
        } = request;
        let mut new_todo = Self::new(title);
        if let Some(description) = description {
            new_todo = new_todo.with_description(description);
        }
        if let Some(priority) = priority {
            new_todo = new_todo.with_priority(priority);
        }
        if let Some(status) = status {
            new_todo = new_todo.with_status(status);
        }
        new_todo
    }
}

/// Body of `PUT`/`PATCH /todos/{id}`.
///
/// Absent fields leave the stored value untouched. An explicit `null`
/// clears `description` or `priority` and is ignored for the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    /// Replacement priority; `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present_or_null")]
    pub priority: Option<Option<String>>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<String>,
    /// Replacement completion flag; ignored when `status` is also sent.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: request.status.map(TodoStatus::from),
            completed: request.completed,
        }
    }
}

// Only called for keys present in the body, so `null` becomes `Some(None)`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /todos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTodosQuery {
    /// Exact status filter.
    pub status: Option<String>,
    /// Exact priority filter.
    pub priority: Option<String>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
}

impl ListTodosQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut query.status,
                "priority" => &mut query.priority,
                "search" => &mut query.search,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl From<ListTodosQuery> for TodoFilter {
    fn from(query: ListTodosQuery) -> Self {
        Self {
            status: query.status.map(TodoStatus::from),
            priority: query.priority,
            search: query.search,
        }
    }
}

/// Todo representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Priority, if any.
    pub priority: Option<String>,
    /// Status value.
    pub status: String,
    /// Completion flag.
    pub completed: bool,
    /// Owner identifier.
    pub user: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().to_string(),
            title: todo.title().to_owned(),
            description: todo.description().map(ToOwned::to_owned),
            priority: todo.priority().map(ToOwned::to_owned),
            status: todo.status().as_str().to_owned(),
            completed: todo.completed(),
            user: todo.owner().as_str().to_owned(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
        }
    }
}

/// Acknowledgement body carrying a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    fn repeated_query_keys_keep_the_first_value() {
        let query = ListTodosQuery::from_pairs(pairs(&[
            ("status", "completed"),
            ("status", "pending"),
            ("page", "2"),
            ("search", "milk"),
        ]));

        assert_eq!(
            query,
            ListTodosQuery {
                status: Some("completed".to_owned()),
                priority: None,
                search: Some("milk".to_owned()),
            }
        );
    }

    #[rstest]
    fn explicit_null_clears_optional_text_fields() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"description": null, "title": null}"#)
                .expect("valid update body");
        let patch = TodoPatch::from(request);

        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.priority, None);
        assert_eq!(patch.title, None);
    }

    #[rstest]
    fn supplied_text_replaces_the_stored_value() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"priority": "high"}"#).expect("valid update body");
        let patch = TodoPatch::from(request);

        assert_eq!(patch.priority, Some(Some("high".to_owned())));
        assert_eq!(patch.description, None);
    }
}
