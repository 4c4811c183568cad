//! Client-side core for the todo service: API client plus page state.
//!
//! # Overview
//! All durable state lives behind the HTTP API; this crate holds a transient
//! in-memory cache of the server's todo collection for the lifetime of the
//! page. `TodoPage` is the sole owner of that cache and of the error/loading
//! state; `AddTodoForm` and `ItemEditor` are the two local input state
//! machines that feed it; `list` derives the aggregate counts shown next to
//! the collection.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`. Each operation is
//!   split into `build_*` (produces a request) and `parse_*` (consumes a
//!   response), so the I/O boundary is explicit.
//! - The `Transport` trait executes the round trip: ureq in the CLI, a
//!   scripted fake in tests. The core itself never touches the network.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod page;
pub mod types;

pub use client::TodoClient;
pub use editor::{EditorMode, ItemEditor};
pub use error::ApiError;
pub use form::AddTodoForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use list::{summarize, ListSummary};
pub use page::{Pending, TodoPage};
pub use types::{CreateTodo, DeleteResponse, Health, Todo, TodoId, UpdateTodo};
