//! Page controller: the single owner of the client-side todo collection.
//!
//! # Design
//! `TodoPage` holds the authoritative in-memory copy of the server's
//! collection together with the in-flight set and the current error message.
//! It is the only component that talks to the API client: the form, the list
//! helpers, and the item editors all go through it. Each operation is one
//! build/execute/parse round trip followed by a local reconciliation step:
//! load replaces the collection wholesale, create prepends, update replaces
//! in place by id, delete filters by id. A failed call changes nothing but
//! the error message.
//!
//! Instead of one global loading boolean, in-flight work is tracked per
//! operation key, so work on one item does not have to disable the whole
//! page. An operation whose key is already pending refuses to start.

use std::collections::HashSet;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateTodo, Health, Todo, TodoId, UpdateTodo};

/// Key identifying one in-flight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pending {
    Load,
    Create,
    Item(TodoId),
}

/// Owns the cached todo collection and orchestrates all API calls.
///
/// The collection is rebuilt wholesale by [`TodoPage::load_todos`] and
/// discarded with the value; there is no persistence on this side.
pub struct TodoPage<T: Transport> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    pending: HashSet<Pending>,
    error: Option<String>,
}

impl<T: Transport> TodoPage<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            todos: Vec::new(),
            pending: HashSet::new(),
            error: None,
        }
    }

    /// Current cached collection: load order, newest creations first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Most recent operation failure, if not yet dismissed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while any operation is in flight.
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// True while an update or delete for this item is in flight; the UI
    /// disables only that row's affordances.
    pub fn is_item_busy(&self, id: TodoId) -> bool {
        self.pending.contains(&Pending::Item(id))
    }

    /// Clear the error banner without retrying anything.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Manual retry: re-issues the load.
    pub fn retry(&mut self) -> bool {
        self.load_todos()
    }

    /// Fetch the full collection and replace the local copy with it, in the
    /// order the server returned. On failure the previous collection is kept
    /// untouched. Clears any prior error up front.
    pub fn load_todos(&mut self) -> bool {
        if !self.begin(Pending::Load) {
            return false;
        }
        self.error = None;
        let result = self.fetch_all();
        self.finish(Pending::Load);
        match result {
            Ok(todos) => {
                self.todos = todos;
                true
            }
            Err(err) => self.fail(err),
        }
    }

    /// Create a todo and prepend the server-returned entity, newest first.
    pub fn add_todo(&mut self, data: CreateTodo) -> bool {
        if !self.begin(Pending::Create) {
            return false;
        }
        let result = self.create_remote(&data);
        self.finish(Pending::Create);
        match result {
            Ok(created) => {
                self.todos.insert(0, created);
                true
            }
            Err(err) => self.fail(err),
        }
    }

    /// Apply a partial patch and replace the matching cached entry with the
    /// full entity the server returned. The entry keeps its position in the
    /// list; only a load re-orders.
    pub fn update_todo(&mut self, id: TodoId, patch: UpdateTodo) -> bool {
        if !self.begin(Pending::Item(id)) {
            return false;
        }
        let result = self.update_remote(id, &patch);
        self.finish(Pending::Item(id));
        match result {
            Ok(updated) => {
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
                true
            }
            Err(err) => self.fail(err),
        }
    }

    /// Delete on the server, then drop the matching entry locally. Relative
    /// order of the remaining entries is unchanged.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        if !self.begin(Pending::Item(id)) {
            return false;
        }
        let result = self.delete_remote(id);
        self.finish(Pending::Item(id));
        match result {
            Ok(_message) => {
                self.todos.retain(|t| t.id != id);
                true
            }
            Err(err) => self.fail(err),
        }
    }

    /// Connectivity probe against `/health`. Does not touch page state, so
    /// the error is returned to the caller instead of stored.
    pub fn health_check(&mut self) -> Result<Health, ApiError> {
        let req = self.client.build_health_check();
        let resp = self.transport.execute(req)?;
        self.client.parse_health_check(resp)
    }

    fn fetch_all(&mut self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos();
        let resp = self.transport.execute(req)?;
        self.client.parse_list_todos(resp)
    }

    fn create_remote(&mut self, data: &CreateTodo) -> Result<Todo, ApiError> {
        let req = self.client.build_create_todo(data)?;
        let resp = self.transport.execute(req)?;
        self.client.parse_create_todo(resp)
    }

    fn update_remote(&mut self, id: TodoId, patch: &UpdateTodo) -> Result<Todo, ApiError> {
        let req = self.client.build_update_todo(id, patch)?;
        let resp = self.transport.execute(req)?;
        self.client.parse_update_todo(resp)
    }

    fn delete_remote(&mut self, id: TodoId) -> Result<String, ApiError> {
        let req = self.client.build_delete_todo(id);
        let resp = self.transport.execute(req)?;
        self.client.parse_delete_todo(resp)
    }

    /// Returns false when this key is already in flight, which disables the
    /// conflicting affordance instead of racing it.
    fn begin(&mut self, op: Pending) -> bool {
        self.pending.insert(op)
    }

    fn finish(&mut self, op: Pending) {
        self.pending.remove(&op);
    }

    /// The newest error replaces any previous one; the collection is never
    /// rolled back because failed calls never touched it.
    fn fail(&mut self, err: ApiError) -> bool {
        tracing::error!("todo operation failed: {err}");
        self.error = Some(err.user_message());
        false
    }
}
