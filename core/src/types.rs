//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. `id` and
//! `created_at` are server-assigned and never fabricated on this side.
//! `UpdateTodo` is a partial patch: an omitted field is left unchanged by the
//! server, so every field must distinguish "absent" from "present". For
//! `description` that means a double `Option` — `Some(None)` serializes to an
//! explicit JSON `null` that clears the field.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned todo identifier, unique and stable for the session.
pub type TodoId = i64;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Set once by the server at creation, never modified.
    pub created_at: String,
}

/// Request payload for creating a new todo. Carries no id; the server
/// assigns one and returns the full entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    /// `None` serializes to an explicit `null` — the wire format has no
    /// empty-string-as-absent ambiguity.
    pub description: Option<String>,
}

impl CreateTodo {
    /// Trim both fields and normalize an empty description to `None`.
    pub fn new(title: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            title: title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `None` — leave unchanged; `Some(None)` — clear to `null`;
    /// `Some(Some(text))` — replace.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Patch that flips only the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch produced by the item editor's save path: trimmed title plus
    /// trimmed description, with an empty description normalized to `null`.
    pub fn edit(title: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            title: Some(title.trim().to_string()),
            description: Some(if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            }),
            completed: None,
        }
    }
}

/// A field that was present deserializes to `Some(_)`, even when its value
/// is `null`. Absent fields fall back to the `default` attribute (`None`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body returned by the `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}
