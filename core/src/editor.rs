//! Per-item editor: the view/edit state machine embedded in each list row.
//!
//! # Design
//! One `ItemEditor` lives per rendered todo. It starts in `Viewing` and only
//! enters `Editing` when the user asks; the edit buffers are seeded from the
//! item's current values at that point. Saving commits the buffers through
//! the page's update operation and leaves edit mode only when the call
//! succeeds — on failure the unsaved buffers stay put and the page's error
//! banner explains why. The completion toggle and the delete action are
//! available from `Viewing` without entering edit mode, and delete requires
//! an explicit confirmation step first.

use crate::http::Transport;
use crate::page::TodoPage;
use crate::types::{Todo, TodoId, UpdateTodo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Edit-mode state machine for a single todo item.
#[derive(Debug)]
pub struct ItemEditor {
    id: TodoId,
    mode: EditorMode,
    edit_title: String,
    edit_description: String,
    confirming_delete: bool,
}

impl ItemEditor {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            mode: EditorMode::Viewing,
            edit_title: todo.title.clone(),
            edit_description: todo.description.clone().unwrap_or_default(),
            confirming_delete: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    pub fn edit_title(&self) -> &str {
        &self.edit_title
    }

    pub fn edit_description(&self) -> &str {
        &self.edit_description
    }

    pub fn set_edit_title(&mut self, title: &str) {
        self.edit_title = title.to_string();
    }

    pub fn set_edit_description(&mut self, description: &str) {
        self.edit_description = description.to_string();
    }

    /// Enter edit mode, seeding the buffers from the item's current values.
    pub fn start_edit(&mut self, todo: &Todo) {
        self.edit_title = todo.title.clone();
        self.edit_description = todo.description.clone().unwrap_or_default();
        self.confirming_delete = false;
        self.mode = EditorMode::Editing;
    }

    /// Discard the buffers, restore the item's current values, and return to
    /// viewing. No network call.
    pub fn cancel_edit(&mut self, todo: &Todo) {
        self.edit_title = todo.title.clone();
        self.edit_description = todo.description.clone().unwrap_or_default();
        self.mode = EditorMode::Viewing;
    }

    /// Commit the staged edit. A blank title is a no-op. The transition back
    /// to `Viewing` happens only when the update succeeds; on failure the
    /// buffers are preserved so the user's edit is not lost.
    pub fn save<T: Transport>(&mut self, page: &mut TodoPage<T>) -> bool {
        if self.mode != EditorMode::Editing {
            return false;
        }
        if self.edit_title.trim().is_empty() {
            return false;
        }
        let patch = UpdateTodo::edit(&self.edit_title, &self.edit_description);
        if page.update_todo(self.id, patch) {
            self.mode = EditorMode::Viewing;
            true
        } else {
            false
        }
    }

    /// Flip the completion flag directly from `Viewing`, without entering
    /// edit mode. Uses the current cached value as the base.
    pub fn toggle_completed<T: Transport>(&self, page: &mut TodoPage<T>) -> bool {
        if self.mode != EditorMode::Viewing {
            return false;
        }
        let Some(completed) = page.todos().iter().find(|t| t.id == self.id).map(|t| t.completed)
        else {
            return false;
        };
        page.update_todo(self.id, UpdateTodo::completed(!completed))
    }

    /// First step of deletion: ask for confirmation. Only available from
    /// `Viewing`.
    pub fn request_delete(&mut self) {
        if self.mode == EditorMode::Viewing {
            self.confirming_delete = true;
        }
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Second step of deletion: actually delete. A no-op unless a
    /// confirmation was requested first.
    pub fn confirm_delete<T: Transport>(&mut self, page: &mut TodoPage<T>) -> bool {
        if !self.confirming_delete {
            return false;
        }
        self.confirming_delete = false;
        page.delete_todo(self.id)
    }
}
